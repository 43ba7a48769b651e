use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use varietal_core::{DATE_TEXT_FORMAT, Generator, Result, Value, date_of};

use crate::combinators::constant;

/// Projection applied by [`date`] and [`now`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `YYYY-MM-DD HH:MM:SS` text.
    #[default]
    Local,
    /// Day of the month.
    Date,
    Hours,
    Minutes,
    Seconds,
    /// Milliseconds since the Unix epoch, reading the date as UTC.
    Time,
    /// RFC 2822 text in GMT.
    Gmt,
}

/// Constant generator for one projection of `date`, which is a `Date` value
/// or a parsable date text.
pub fn date(date: impl Into<Value>, format: DateFormat) -> Result<Generator> {
    let date = date_of(&date.into())?;
    Ok(constant(project(date, format)))
}

/// [`date`] at the local time of the call.
pub fn now(format: DateFormat) -> Generator {
    constant(project(Local::now().naive_local(), format))
}

fn project(date: NaiveDateTime, format: DateFormat) -> Value {
    match format {
        DateFormat::Local => Value::Text(date.format(DATE_TEXT_FORMAT).to_string()),
        DateFormat::Date => Value::Int(i64::from(date.day())),
        DateFormat::Hours => Value::Int(i64::from(date.hour())),
        DateFormat::Minutes => Value::Int(i64::from(date.minute())),
        DateFormat::Seconds => Value::Int(i64::from(date.second())),
        DateFormat::Time => Value::Int(date.and_utc().timestamp_millis()),
        DateFormat::Gmt => Value::Text(date.and_utc().to_rfc2822()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varietal_core::{Error, State};

    fn run(generator: &Generator) -> Value {
        generator
            .run(&Value::Null, &mut State::new())
            .expect("date generator")
    }

    #[test]
    fn projections_of_a_text_date() {
        let day = date("2024-03-09 14:05:30", DateFormat::Date).expect("date");
        let hours = date("2024-03-09 14:05:30", DateFormat::Hours).expect("hours");
        let local = date("2024-03-09", DateFormat::Local).expect("local");
        assert_eq!(run(&day), Value::Int(9));
        assert_eq!(run(&hours), Value::Int(14));
        assert_eq!(run(&local), Value::text("2024-03-09 00:00:00"));
    }

    #[test]
    fn epoch_time_is_milliseconds() {
        let time = date("1970-01-01 00:00:01", DateFormat::Time).expect("time");
        assert_eq!(run(&time), Value::Int(1000));
    }

    #[test]
    fn non_dates_are_rejected() {
        let err = date(42, DateFormat::Local).expect_err("not a date");
        assert!(matches!(err, Error::InvalidType { .. }));
    }
}

use chrono::{DateTime, NaiveDateTime};
use varietal_core::{Error, Generator, GeneratorKind, RangeArgs, Value};

use crate::random::RandomSource;

const ALPHA: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHA_NUM: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random text and timestamps, available on every [`RandomSource`].
pub trait RandomText: RandomSource {
    /// Letters only; the length is drawn from `length` (default `[1, 100)`).
    fn alpha(&self, length: impl Into<RangeArgs>) -> Generator {
        random_string(self.clone(), ALPHA, length.into())
    }

    /// Letters and digits; the length is drawn from `length` (default
    /// `[1, 100)`).
    fn alpha_num(&self, length: impl Into<RangeArgs>) -> Generator {
        random_string(self.clone(), ALPHA_NUM, length.into())
    }

    /// Timestamp with second resolution in `[from, to)`.
    fn date_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Generator {
        let start = from.and_utc().timestamp();
        let end = to.and_utc().timestamp();
        let (start, end) = (start.min(end), start.max(end));
        let source = self.clone();
        Generator::from_fn(GeneratorKind::Random, move |_, _| {
            let seconds = source.next_int(start, end);
            DateTime::from_timestamp(seconds, 0)
                .map(|date| Value::Date(date.naive_utc()))
                .ok_or_else(|| Error::InvalidArgument(format!("timestamp {seconds} out of range")))
        })
    }
}

impl<R: RandomSource> RandomText for R {}

fn random_string<R: RandomSource>(source: R, charset: &'static [u8], length: RangeArgs) -> Generator {
    let (min, max) = length.resolve(1, 100);
    Generator::from_fn(GeneratorKind::Random, move |_, _| {
        let len = source.next_int(min, max).max(0);
        let text = (0..len)
            .map(|_| {
                let index = source.next_int(0, charset.len() as i64);
                char::from(charset[index as usize % charset.len()])
            })
            .collect::<String>();
        Ok(Value::Text(text))
    })
}

//! Runtime shape predicates and validating coercions.
//!
//! The coercions fail with [`Error::InvalidType`] instead of guessing.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::record::Record;
use crate::spec::SpecNode;
use crate::value::Value;

/// Shape of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Text,
    Date,
    Array,
    Object,
    Group,
    Spec,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Date => "date",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Group => "group",
            ValueKind::Spec => "spec",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Date(_) => ValueKind::Date,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Group(_) => ValueKind::Group,
            Value::Spec(_) => ValueKind::Spec,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// True for integers and for floats without a fractional part.
    pub fn is_int(&self) -> bool {
        match self {
            Value::Int(_) => true,
            Value::Float(value) => value.is_finite() && value.fract() == 0.0,
            _ => false,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Value::Group(_))
    }

    pub fn is_spec(&self) -> bool {
        matches!(self, Value::Spec(_))
    }
}

pub fn number_of(value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| Error::invalid_type("number", describe(value)))
}

/// Integer view of a number; floats are floored.
pub fn int_of(value: &Value) -> Result<i64> {
    match value {
        Value::Int(value) => Ok(*value),
        Value::Float(value) if value.is_finite() => Ok(value.floor() as i64),
        other => Err(Error::invalid_type("integer", describe(other))),
    }
}

pub fn string_of(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| Error::invalid_type("string", describe(value)))
}

pub fn array_of(value: &Value) -> Result<&[Value]> {
    value
        .as_array()
        .ok_or_else(|| Error::invalid_type("array", describe(value)))
}

pub fn record_of(value: &Value) -> Result<&Record> {
    value
        .as_record()
        .ok_or_else(|| Error::invalid_type("object", describe(value)))
}

/// A date value, or a string in one of the accepted date layouts.
pub fn date_of(value: &Value) -> Result<NaiveDateTime> {
    match value {
        Value::Date(date) => Ok(*date),
        Value::Text(text) => {
            parse_date_text(text).ok_or_else(|| Error::invalid_type("date", describe(value)))
        }
        other => Err(Error::invalid_type("date", describe(other))),
    }
}

pub fn generator_of(node: &SpecNode) -> Result<Generator> {
    match node {
        SpecNode::Gen(generator) => Ok(generator.clone()),
        SpecNode::Literal(value) => Err(Error::invalid_type("generator", describe(value))),
        SpecNode::Sequence(_) => Err(Error::invalid_type("generator", "sequence")),
        SpecNode::Nested(_) => Err(Error::invalid_type("generator", "nested spec")),
    }
}

pub fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.naive_utc())
        .or_else(|| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| {
            ["%Y-%m-%d", "%b %d %Y", "%b. %d %Y", "%B %d %Y", "%d %b %Y"]
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn describe(value: &Value) -> String {
    match value {
        Value::Text(text) => format!("text '{text}'"),
        Value::Int(number) => format!("int {number}"),
        Value::Float(number) => format!("float {number}"),
        other => other.kind().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_of_floors_floats_and_rejects_text() {
        assert_eq!(int_of(&Value::Float(3.9)).expect("number"), 3);
        assert_eq!(int_of(&Value::Int(-2)).expect("number"), -2);
        let err = int_of(&Value::text("3")).expect_err("text is not an int");
        assert!(matches!(err, Error::InvalidType { expected: "integer", .. }));
    }

    #[test]
    fn date_of_accepts_common_layouts() {
        let expected = NaiveDate::from_ymd_opt(2009, 9, 13)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid date");
        assert_eq!(date_of(&Value::text("2009-09-13")).expect("iso"), expected);
        assert_eq!(date_of(&Value::text("Sep. 13 2009")).expect("short"), expected);
        assert_eq!(date_of(&Value::text("Sep 13 2009")).expect("short"), expected);
        assert!(date_of(&Value::text("not a date")).is_err());
        assert!(date_of(&Value::Int(1)).is_err());
    }

    #[test]
    fn predicates_follow_shape() {
        assert!(Value::Float(2.0).is_int());
        assert!(!Value::Float(2.5).is_int());
        assert!(Value::from(vec![1, 2]).is_array());
        assert_eq!(Value::Null.kind(), ValueKind::Null);
    }

    #[test]
    fn generator_of_rejects_literals() {
        let err = generator_of(&SpecNode::from(5)).expect_err("literal");
        assert!(matches!(err, Error::InvalidType { expected: "generator", .. }));
    }
}

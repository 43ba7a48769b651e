use chrono::NaiveDateTime;
use serde::ser::{Error as _, Serialize, Serializer};

use crate::record::Record;
use crate::spec::{GeneratorSpec, Group};

/// Text format used when a date is rendered or serialised.
pub const DATE_TEXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_JSON_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A value flowing through generators and stored on records.
///
/// `Group` and `Spec` are markers a generator may yield to steer the mutation
/// engine; they never appear on a finished record.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDateTime),
    Array(Vec<Value>),
    Object(Record),
    /// Output of the wrapped generators is kept as one value instead of branching.
    Group(Group),
    /// A nested generator spec to expand against the attribute's current value.
    Spec(GeneratorSpec),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(values) => Some(values.as_slice()),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Renders the value the way string concatenation sees it.
    ///
    /// `Null` renders empty and arrays render their elements separated by `,`.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(value) => value.to_string(),
            Value::Int(value) => value.to_string(),
            Value::Float(value) => value.to_string(),
            Value::Text(value) => value.clone(),
            Value::Date(value) => value.format(DATE_TEXT_FORMAT).to_string(),
            Value::Array(values) => values
                .iter()
                .map(Value::to_text)
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(record) => serde_json::to_string(record)
                .unwrap_or_else(|_| "[object]".to_string()),
            Value::Group(_) => "[group]".to_string(),
            Value::Spec(_) => "[spec]".to_string(),
        }
    }

    /// Loose `+`: numbers add, everything else concatenates as text.
    pub fn plus(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_add(*b)
                .map(Value::Int)
                .unwrap_or(Value::Float(*a as f64 + *b as f64)),
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                let a = self.as_f64().unwrap_or_default();
                let b = other.as_f64().unwrap_or_default();
                Value::Float(a + b)
            }
            _ => Value::Text(format!("{}{}", self.to_text(), other.to_text())),
        }
    }

    /// Converts into a JSON value; fails on generator markers.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::Text(value) => serializer.serialize_str(value),
            Value::Date(value) => {
                serializer.serialize_str(&value.format(DATE_JSON_FORMAT).to_string())
            }
            Value::Array(values) => values.serialize(serializer),
            Value::Object(record) => record.serialize(serializer),
            Value::Group(_) => Err(S::Error::custom("group markers cannot be serialised")),
            Value::Spec(_) => Err(S::Error::custom("spec markers cannot be serialised")),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => match number.as_i64() {
                Some(value) => Value::Int(value),
                None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(value) => Value::Text(value),
            serde_json::Value::Array(values) => {
                Value::Array(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Date(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Object(value)
    }
}

impl From<GeneratorSpec> for Value {
    fn from(value: GeneratorSpec) -> Self {
        Value::Spec(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plus_adds_numbers_and_concatenates_text() {
        assert_eq!(Value::Int(2).plus(&Value::Int(3)), Value::Int(5));
        assert_eq!(Value::Int(2).plus(&Value::Float(0.5)), Value::Float(2.5));
        assert_eq!(
            Value::text("Mr. Potato ").plus(&Value::text("Head")),
            Value::text("Mr. Potato Head")
        );
        assert_eq!(Value::text("v").plus(&Value::Int(1)), Value::text("v1"));
    }

    #[test]
    fn to_text_renders_arrays_with_commas() {
        let value = Value::from(vec![Value::Int(1), Value::text("a"), Value::Null]);
        assert_eq!(value.to_text(), "1,a,");
    }

    #[test]
    fn json_conversion_keeps_shape() {
        let source = json!({"name": "Woody", "age": 2, "tags": ["toy", 1.5], "owner": null});
        let value = Value::from(source.clone());
        assert_eq!(value.to_json().expect("serialisable"), source);
    }

    #[test]
    fn markers_refuse_serialisation() {
        let value = Value::Spec(GeneratorSpec::new());
        assert!(value.to_json().is_err());
    }
}

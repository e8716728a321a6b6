mod number;

use std::fmt;

use ahash::AHashMap;
pub use number::Number;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::paths::{Location, Segment};

/// An immutable JSON value that is known to conform to the JSON grammar.
///
/// Numbers are always finite and containers own their children, so the value is a tree.
/// Object keys are unique and their order does not take part in equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(Number),
    String(Box<str>),
    Array(Box<[JsonValue]>),
    Object(Box<AHashMap<Box<str>, JsonValue>>),
}

/// The kind of a [`JsonValue`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        })
    }
}

impl JsonValue {
    #[must_use]
    pub fn json_type(&self) -> JsonType {
        match self {
            JsonValue::Null => JsonType::Null,
            JsonValue::Bool(_) => JsonType::Boolean,
            JsonValue::Number(_) => JsonType::Number,
            JsonValue::String(_) => JsonType::String,
            JsonValue::Array(_) => JsonType::Array,
            JsonValue::Object(_) => JsonType::Object,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(value) => Some(value.as_f64()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(value) => Some(&**value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(&**items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&AHashMap<Box<str>, JsonValue>> {
        match self {
            JsonValue::Object(object) => Some(&**object),
            _ => None,
        }
    }

    /// Look up a property of an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object()?.get(key)
    }

    /// Look up an element of an array.
    #[must_use]
    pub fn get_index(&self, idx: usize) -> Option<&JsonValue> {
        self.as_array()?.get(idx)
    }

    /// Follow `location` from this value. Returns `None` if any step does not exist.
    #[must_use]
    pub fn pointer(&self, location: &Location) -> Option<&JsonValue> {
        location
            .iter()
            .try_fold(self, |current, segment| match segment {
                Segment::Key(key) => current.get(key),
                Segment::Index(idx) => current.get_index(*idx),
            })
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<Number> for JsonValue {
    fn from(value: Number) -> Self {
        JsonValue::Number(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.into())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value.into_boxed_str())
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value.into_boxed_slice())
    }
}

impl<K: Into<Box<str>>> FromIterator<(K, JsonValue)> for JsonValue {
    fn from_iter<T: IntoIterator<Item = (K, JsonValue)>>(iter: T) -> Self {
        JsonValue::Object(Box::new(
            iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(value) => serializer.serialize_bool(*value),
            JsonValue::Number(value) => serializer.serialize_f64(value.as_f64()),
            JsonValue::String(value) => serializer.serialize_str(value),
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let serialized = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&serialized)
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonType, JsonValue, Number};
    use crate::paths::{Location, Segment};
    use test_case::test_case;

    fn number(value: f64) -> JsonValue {
        JsonValue::Number(Number::new(value).expect("Finite"))
    }

    fn sample() -> JsonValue {
        JsonValue::from_iter([(
            "a",
            JsonValue::from(vec![
                number(1.0),
                number(2.0),
                JsonValue::from_iter([("b", JsonValue::Null)]),
            ]),
        )])
    }

    #[test]
    fn object_equality_ignores_order() {
        let left = JsonValue::from_iter([("x", number(1.0)), ("y", JsonValue::Bool(true))]);
        let right = JsonValue::from_iter([("y", JsonValue::Bool(true)), ("x", number(1.0))]);
        assert_eq!(left, right);
    }

    #[test]
    fn array_equality_respects_order() {
        let left = JsonValue::from(vec![number(1.0), number(2.0)]);
        let right = JsonValue::from(vec![number(2.0), number(1.0)]);
        assert_ne!(left, right);
    }

    #[test_case(JsonValue::Null, JsonType::Null; "null")]
    #[test_case(JsonValue::Bool(false), JsonType::Boolean; "boolean")]
    #[test_case(number(0.5), JsonType::Number; "number")]
    #[test_case(JsonValue::from(""), JsonType::String; "string")]
    #[test_case(JsonValue::from(vec![]), JsonType::Array; "array")]
    #[test_case(JsonValue::from_iter(Vec::<(String, JsonValue)>::new()), JsonType::Object; "object")]
    fn json_type(value: JsonValue, expected: JsonType) {
        assert_eq!(value.json_type(), expected);
    }

    #[test]
    fn pointer() {
        let value = sample();
        let location: Location = [Segment::from("a"), Segment::Index(2), Segment::from("b")]
            .into_iter()
            .collect();
        assert_eq!(value.pointer(&location), Some(&JsonValue::Null));
        assert_eq!(value.pointer(&Location::new()), Some(&value));
        assert_eq!(value.pointer(&Location::new().join("missing")), None);
        assert_eq!(
            value.pointer(&Location::new().join("a").join(7_usize)),
            None
        );
    }

    #[test]
    fn accessors() {
        let value = sample();
        let items = value.get("a").and_then(JsonValue::as_array).expect("Array");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_f64(), Some(1.0));
        assert!(items[2].get("b").is_some_and(JsonValue::is_null));
        assert_eq!(JsonValue::from("x").as_str(), Some("x"));
        assert_eq!(JsonValue::Bool(true).as_bool(), Some(true));
        assert_eq!(JsonValue::Null.as_bool(), None);
    }

    #[test_case(JsonValue::Null, "null"; "null")]
    #[test_case(JsonValue::Bool(true), "true"; "boolean")]
    #[test_case(number(1.5), "1.5"; "number")]
    #[test_case(JsonValue::from("a\"b"), r#""a\"b""#; "escaped string")]
    #[test_case(sample(), r#"{"a":[1.0,2.0,{"b":null}]}"#; "nested")]
    fn display(value: JsonValue, expected: &str) {
        assert_eq!(value.to_string(), expected);
    }
}

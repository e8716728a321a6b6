use serde_json::{Map, Value};

use crate::{
    dynamic::{Array, Dynamic, Object},
    value::{JsonValue, Number},
};

impl From<Value> for Dynamic {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Dynamic::Null,
            Value::Bool(b) => Dynamic::Bool(b),
            // Without `arbitrary_precision` every number has an `f64` view.
            Value::Number(num) => Dynamic::Number(num.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Dynamic::String(s.into_boxed_str()),
            Value::Array(old) => Dynamic::Array(old.into_iter().map(Dynamic::from).collect()),
            Value::Object(old) => Dynamic::Object(
                old.into_iter()
                    .map(|(k, v)| (k, Dynamic::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for Dynamic {
    fn from(value: &Value) -> Self {
        Dynamic::from(value.clone())
    }
}

impl From<&JsonValue> for Dynamic {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Dynamic::Null,
            JsonValue::Bool(b) => Dynamic::Bool(*b),
            JsonValue::Number(num) => Dynamic::Number(num.as_f64()),
            JsonValue::String(s) => Dynamic::String(s.clone()),
            JsonValue::Array(items) => Dynamic::Array(items.iter().map(Dynamic::from).collect()),
            JsonValue::Object(object) => {
                let new: Object = object
                    .iter()
                    .map(|(k, v)| (k.clone(), Dynamic::from(v)))
                    .collect();
                Dynamic::Object(new)
            }
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(num) => serde_json::Number::from_f64(num.as_f64())
                .map_or(Value::Null, Value::Number),
            JsonValue::String(s) => Value::String(s.into_string()),
            JsonValue::Array(items) => Value::Array(
                items
                    .into_vec()
                    .into_iter()
                    .map(Value::from)
                    .collect(),
            ),
            JsonValue::Object(object) => Value::Object(
                (*object)
                    .into_iter()
                    .map(|(k, v)| (k.into_string(), Value::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Number(r)) => compare_number(l, *r),
        (Value::String(l), JsonValue::String(r)) => l.as_bytes() == r.as_bytes(),
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (key, lv) in l {
                match r.get(key.as_str()) {
                    Some(rv) if eq(lv, rv) => continue,
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}

#[inline]
#[allow(clippy::float_cmp)]
fn compare_number(lhs: &serde_json::Number, rhs: Number) -> bool {
    lhs.as_f64().is_some_and(|v| v == rhs.as_f64())
}

#[cfg(test)]
mod tests {
    use crate::{
        dynamic::{Dynamic, DynamicType},
        value::{JsonValue, Number},
    };
    use serde_json::{json, Value};
    use test_case::test_case;

    fn number(value: f64) -> JsonValue {
        JsonValue::Number(Number::new(value).expect("Finite"))
    }

    #[test_case(json!(null), DynamicType::Null; "null")]
    #[test_case(json!(true), DynamicType::Boolean; "bool")]
    #[test_case(json!(42), DynamicType::Number; "positive number")]
    #[test_case(json!(-42), DynamicType::Number; "negative number")]
    #[test_case(json!(3.5), DynamicType::Number; "float number")]
    #[test_case(json!("hello"), DynamicType::String; "string")]
    #[test_case(json!([1, 2, 3]), DynamicType::Array; "array")]
    #[test_case(json!({"a": 1}), DynamicType::Object; "object")]
    fn into_dynamic(value: Value, expected: DynamicType) {
        assert_eq!(Dynamic::from(&value).ty(), expected);
    }

    #[test_case(json!(null), JsonValue::Null; "null equals")]
    #[test_case(json!(true), JsonValue::Bool(true); "bool equals")]
    #[test_case(json!(42), number(42.0); "integer equals")]
    #[test_case(json!(-42), number(-42.0); "negative integer equals")]
    #[test_case(json!(3.5), number(3.5); "float number equals")]
    #[test_case(json!("hello"), JsonValue::from("hello"); "string equals")]
    #[test_case(
        json!([1, 2, 3]),
        JsonValue::from(vec![number(1.0), number(2.0), number(3.0)]);
        "array equals"
    )]
    #[test_case(
        json!({"b": "test", "a": 1, "c": true}),
        [
            ("a", number(1.0)),
            ("b", JsonValue::from("test")),
            ("c", JsonValue::Bool(true)),
        ].into_iter().collect();
        "object equals"
    )]
    fn comparison_eq(serde_value: Value, custom: JsonValue) {
        assert_eq!(serde_value, custom);
        assert_eq!(custom, serde_value);
        assert_eq!(Value::from(custom.clone()), custom);
    }

    #[test_case(json!(null), JsonValue::Bool(true); "null != bool")]
    #[test_case(json!(true), JsonValue::Bool(false); "bool not equal")]
    #[test_case(json!(42), number(-42.0); "positive vs negative number not equal")]
    #[test_case(json!(3.5), number(2.5); "different floats not equal")]
    #[test_case(json!("hello"), JsonValue::from("world"); "different strings not equal")]
    #[test_case(
        json!([1, 2, 3]),
        JsonValue::from(vec![number(1.0), number(2.0), number(4.0)]);
        "different arrays not equal"
    )]
    #[test_case(
        json!({"a": 1}),
        [("a", number(2.0))].into_iter().collect();
        "different object not equal"
    )]
    #[test_case(
        json!({"a": 1}),
        [("b", number(1.0))].into_iter().collect();
        "different keys not equal"
    )]
    fn comparison_neq(serde_value: Value, custom: JsonValue) {
        assert_ne!(serde_value, custom);
        assert_ne!(custom, serde_value);
    }

    #[test]
    fn json_value_back_to_dynamic() {
        let value: JsonValue = [(
            "list",
            JsonValue::from(vec![number(1.0), JsonValue::Null, JsonValue::from("x")]),
        )]
        .into_iter()
        .collect();
        let dynamic = Dynamic::from(&value);
        let Dynamic::Object(object) = dynamic else {
            panic!("Expected an object");
        };
        let Some(Dynamic::Array(list)) = object.get("list") else {
            panic!("Expected an array");
        };
        assert_eq!(list.len(), 3);
    }
}

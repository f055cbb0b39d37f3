//! Flat request payload assembly.
//!
//! The API takes one JSON object with every field as an unprefixed sibling
//! key. Each part of a request is serialized on its own and its keys are
//! shallow-merged into a single map. On a key collision the later part
//! wins.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// A flat JSON object built from several serializable parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Map<String, Value>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes `part` and merges its top-level keys into the payload.
    ///
    /// Fails if `part` does not serialize to a JSON object.
    pub fn merge<T: Serialize + ?Sized>(mut self, part: &T) -> Result<Self, serde_json::Error> {
        match serde_json::to_value(part)? {
            Value::Object(map) => {
                self.fields.extend(map);
                Ok(self)
            }
            other => Err(serde_json::Error::custom(format!(
                "payload part must serialize to a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_is_flat_union() {
        let payload = Payload::new()
            .merge(&json!({"apiKey": "abc", "order_id": "o-1"}))
            .unwrap()
            .merge(&json!({"payer_name": "Maria"}))
            .unwrap()
            .merge(&json!({"items": [{"item_id": "1"}]}))
            .unwrap();

        assert_eq!(payload.len(), 4);
        assert_eq!(payload.get("apiKey"), Some(&json!("abc")));
        assert_eq!(payload.get("payer_name"), Some(&json!("Maria")));
        assert!(payload.get("items").unwrap().is_array());
    }

    #[test]
    fn test_later_part_overwrites() {
        let payload = Payload::new()
            .merge(&json!({"order_id": "first"}))
            .unwrap()
            .merge(&json!({"order_id": "second"}))
            .unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("order_id"), Some(&json!("second")));
    }

    #[test]
    fn test_non_object_part_is_rejected() {
        let err = Payload::new().merge(&vec![1, 2, 3]).unwrap_err();
        assert!(err.to_string().contains("got an array"));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let payload = Payload::new().merge(&json!({"a": 1})).unwrap();
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"a":1}"#);
    }
}

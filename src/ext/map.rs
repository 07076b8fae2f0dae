//! Value-map helpers built on serde.
//!
//! The dynamic "object as dictionary" pattern maps onto `serde_json::Map`:
//! any `Serialize` struct can be flattened to a map of its fields, and typed
//! values can be pulled back out without intermediate structs.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Serializes `value`'s fields into a `serde_json::Map`.
///
/// Errors if `value` does not serialize to a JSON object (e.g. a bare number
/// or a sequence).
pub fn to_value_map<T: Serialize>(value: &T) -> Result<Map<String, Value>, serde_json::Error> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(serde::ser::Error::custom(format!(
            "expected a map-like value, got {}",
            match other {
                Value::Null => "null",
                Value::Bool(_) => "a boolean",
                Value::Number(_) => "a number",
                Value::String(_) => "a string",
                Value::Array(_) => "an array",
                Value::Object(_) => unreachable!(),
            }
        ))),
    }
}

/// Typed extraction from a value map.
pub trait ValueMapExt {
    /// Gets `key` deserialized as `T`; `None` when the key is missing or the
    /// value does not have the requested shape.
    fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T>;
}

impl ValueMapExt for Map<String, Value> {
    fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

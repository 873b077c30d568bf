//! Conversions between Value and serde types.

use serde::de::DeserializeOwned;
use serde::Serialize;

use dotstore_core::{Error, Map, Value};

/// Convert a Value to a Rust type via serde.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    let json = value_to_json(value);
    serde_json::from_value(json).map_err(|e| Error::decode(e.to_string()))
}

/// Convert a Rust type to a Value via serde.
pub fn to_value<T: Serialize + ?Sized>(data: &T) -> Result<Value, Error> {
    let json = serde_json::to_value(data).map_err(|e| Error::encode(e.to_string()))?;
    Ok(json_to_value(json))
}

/// Convert a Rust type that serializes as an object into a tree.
pub fn to_map<T: Serialize + ?Sized>(data: &T) -> Result<Map, Error> {
    match to_value(data)? {
        Value::Map(map) => Ok(map),
        other => Err(Error::import(format!(
            "expected an object at the root, got {}",
            kind(&other)
        ))),
    }
}

/// Convert our Value to serde_json::Value.
///
/// Non-finite floats have no JSON form and become `null`.
pub fn value_to_json(value: Value) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(b),
        Value::Integer(i) => Json::from(i),
        Value::Float(f) => serde_json::Number::from_f64(f).map_or(Json::Null, Json::Number),
        Value::String(s) => Json::String(s),
        Value::Array(items) => items.into_iter().map(value_to_json).collect(),
        Value::Map(map) => map_to_json(map),
    }
}

/// Convert a branch to a JSON object, keeping key order.
pub fn map_to_json(map: Map) -> serde_json::Value {
    let object: serde_json::Map<String, serde_json::Value> = map
        .into_iter()
        .map(|(key, child)| (key, value_to_json(child)))
        .collect();
    serde_json::Value::Object(object)
}

/// Convert serde_json::Value to our Value.
///
/// Numbers that fit `i64` stay integers. Anything else, including a `u64`
/// above `i64::MAX`, becomes a `Float` and may lose precision.
pub fn json_to_value(json: serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => n.as_f64().map_or(Value::Null, Value::Float),
        },
        Json::String(s) => Value::String(s),
        Json::Array(items) => Value::Array(items.into_iter().map(json_to_value).collect()),
        Json::Object(object) => object
            .into_iter()
            .map(|(key, child)| (key, json_to_value(child)))
            .collect(),
    }
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Integer(_) | Value::Float(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Map(_) => "an object",
    }
}

//! Helpers for reading untyped JSON request bodies.
//!
//! Create and update bodies arrive as arbitrary JSON objects. Handlers pull
//! mandatory keys with [`required`], in their fixed per-entity order, and
//! entity models coerce individual values with the typed readers below; a
//! value of the wrong JSON type is a `400 Invalid <field>`.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::{parse_id, DbId};

/// A decoded JSON object body.
pub type JsonObject = serde_json::Map<String, Value>;

/// Fetch a mandatory key, or fail with `Missing <field>`.
///
/// Presence is all that is checked; a `null` value counts as present.
pub fn required<'a>(body: &'a JsonObject, field: &str) -> Result<&'a Value, CoreError> {
    body.get(field).ok_or_else(|| CoreError::missing(field))
}

/// Read a mandatory string value.
pub fn string(field: &str, value: &Value) -> Result<String, CoreError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| CoreError::invalid(field))
}

/// Read a nullable string value.
pub fn optional_string(field: &str, value: &Value) -> Result<Option<String>, CoreError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(CoreError::invalid(field)),
    }
}

/// Read an integer value that fits in 32 bits.
pub fn integer(field: &str, value: &Value) -> Result<i32, CoreError> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| CoreError::invalid(field))
}

/// Read a nullable floating-point value. Integers are widened.
pub fn optional_float(field: &str, value: &Value) -> Result<Option<f64>, CoreError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_f64().map(Some).ok_or_else(|| CoreError::invalid(field)),
        _ => Err(CoreError::invalid(field)),
    }
}

/// Interpret a body value as a reference to another record.
///
/// Anything other than a well-formed UUID string cannot name a stored record
/// and yields `None`; callers report that as not found.
pub fn reference(value: &Value) -> Option<DbId> {
    value.as_str().and_then(parse_id)
}

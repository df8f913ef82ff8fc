//! Raw response bodies in the shapes the REST API produces.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::TestError;

/// `{ "data": value }`
pub fn data_body<T: Serialize>(value: &T) -> Result<String, TestError> {
    Ok(json!({ "data": value }).to_string())
}

/// `{ "success": success, "data": value }`
pub fn mutation_body<T: Serialize>(success: bool, value: &T) -> Result<String, TestError> {
    Ok(json!({ "success": success, "data": value }).to_string())
}

/// `{ "error": message }`
pub fn error_body(message: &str) -> String {
    json!({ "error": message }).to_string()
}

/// Serialize `value` and then rewrite its numeric `status` to a string, the
/// way older API records carry it.
pub fn with_string_status<T: Serialize>(value: &T) -> Result<Value, TestError> {
    let mut value = serde_json::to_value(value)?;

    if let Some(status) = value.get("status").and_then(Value::as_i64) {
        value["status"] = Value::String(status.to_string());
    }

    Ok(value)
}

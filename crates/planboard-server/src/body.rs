use axum::body::Bytes;
use planboard_core::error::{PlanError, Result};
use planboard_core::plan::Plan;
use serde_json::{Map, Value};

/// Decode an accumulated request body. An empty buffer is an absent value
/// (PATCH and DELETE carry no body); anything else must parse as JSON.
/// Parser detail never leaves this function.
pub fn decode(bytes: &Bytes) -> Result<Option<Value>> {
    if bytes.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|_| PlanError::InvalidBody)
}

/// Decode a body that must carry a JSON object.
pub fn require_object(bytes: &Bytes) -> Result<Map<String, Value>> {
    match decode(bytes)? {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(PlanError::InvalidBody),
    }
}

/// Decode a bulk-import body: a JSON array of plan records. Anything else,
/// including an empty body, is a format error.
pub fn require_plans(bytes: &Bytes) -> Result<Vec<Plan>> {
    match decode(bytes)? {
        Some(value @ Value::Array(_)) => {
            serde_json::from_value(value).map_err(|_| PlanError::InvalidFormat)
        }
        Some(_) | None => Err(PlanError::InvalidFormat),
    }
}

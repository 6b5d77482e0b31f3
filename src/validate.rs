// src/validate.rs
use serde_json::Value;

use crate::error::PollError;

/// Check the decoded API payload against the documented shape and hand back
/// the `homeworks` list.
///
/// Elements are not validated here; only the newest submission matters, and
/// its fields are checked by `verdict::parse_status` when it is actually used.
pub fn check_response(response: &Value) -> Result<&Vec<Value>, PollError> {
    tracing::info!(target: "validate", "checking API response shape");

    let Some(obj) = response.as_object() else {
        return Err(PollError::Shape { what: "response" });
    };
    let homeworks = match obj.get("homeworks") {
        None | Some(Value::Null) => return Err(PollError::MissingKey),
        Some(v) => v,
    };
    let Some(list) = homeworks.as_array() else {
        return Err(PollError::Shape { what: "homeworks" });
    };

    tracing::debug!(target: "validate", count = list.len(), "response matches documentation");
    Ok(list)
}

// src/verdict.rs
use serde_json::Value;

use crate::error::PollError;

/// The closed set of review statuses and their user-facing verdict lines.
const VERDICTS: [(&str, &str); 3] = [
    ("approved", "reviewed, no issues"),
    ("reviewing", "taken up for review"),
    ("rejected", "reviewed, issues found"),
];

fn verdict_for(status: &str) -> Option<&'static str> {
    VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}

/// Build the notification sentence for one homework record.
pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    tracing::info!(target: "verdict", "extracting homework status");

    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(PollError::MissingField("homework_name"))?;
    let status = homework
        .get("status")
        .and_then(Value::as_str)
        .ok_or(PollError::MissingField("status"))?;

    let verdict =
        verdict_for(status).ok_or_else(|| PollError::UnknownStatus(status.to_string()))?;

    tracing::debug!(target: "verdict", name, status, "homework status extracted");
    Ok(format!(
        "Status changed for submission \"{name}\". {verdict}"
    ))
}

// src/error.rs
use thiserror::Error;

/// Everything that can go wrong inside one poll cycle.
/// All variants are retryable: the loop logs them and tries again next tick.
#[derive(Debug, Clone, Error)]
pub enum PollError {
    #[error("review API request failed: {detail}")]
    Upstream { kind: UpstreamKind, detail: String },

    #[error("unexpected shape: `{what}` has the wrong type")]
    Shape { what: &'static str },

    #[error("response has no `homeworks` key")]
    MissingKey,

    #[error("homework record is missing the `{0}` field")]
    MissingField(&'static str),

    #[error("unknown homework status: {0}")]
    UnknownStatus(String),
}

/// What the upstream failure actually was. Carried separately from the
/// human-readable detail so deduplication never depends on interpolated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamKind {
    /// Connection/timeout/transport-layer failure.
    Transport,
    /// A response arrived, but with a non-2xx status.
    Status(u16),
    /// A 2xx response whose body was not decodable JSON.
    Decode,
}

/// Comparison key for error-notification dedup.
///
/// Variant identity plus fixed fields only; free-text details (transport
/// error strings, URLs) are deliberately excluded so a standing outage whose
/// wording drifts between cycles still dedups, while a genuinely different
/// failure (500 -> 502, transport -> decode) re-notifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKey {
    Upstream(UpstreamKind),
    Shape(&'static str),
    MissingKey,
    MissingField(&'static str),
    UnknownStatus(String),
}

impl PollError {
    pub fn dedup_key(&self) -> ErrorKey {
        match self {
            PollError::Upstream { kind, .. } => ErrorKey::Upstream(*kind),
            PollError::Shape { what } => ErrorKey::Shape(*what),
            PollError::MissingKey => ErrorKey::MissingKey,
            PollError::MissingField(f) => ErrorKey::MissingField(*f),
            PollError::UnknownStatus(s) => ErrorKey::UnknownStatus(s.clone()),
        }
    }
}

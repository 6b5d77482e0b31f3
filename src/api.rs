// src/api.rs
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::error::{PollError, UpstreamKind};

pub const DEFAULT_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Source of review-status payloads. The poll loop only ever talks to this
/// trait; tests script it, production uses [`ReviewApi`].
#[async_trait]
pub trait ReviewFeed {
    /// Fetch everything that changed since `from_date` (unix seconds).
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

/// HTTP client for the homework-review endpoint.
pub struct ReviewApi {
    endpoint: String,
    token: String,
    client: Client,
    timeout: Duration,
}

impl ReviewApi {
    pub fn new(endpoint: String, token: String) -> Self {
        Self {
            endpoint,
            token,
            client: Client::new(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

#[async_trait]
impl ReviewFeed for ReviewApi {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        tracing::info!(target: "api", from_date, "requesting review statuses");

        let res = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| PollError::Upstream {
                kind: UpstreamKind::Transport,
                detail: e.to_string(),
            })?;

        let status = res.status();
        if !status.is_success() {
            return Err(PollError::Upstream {
                kind: UpstreamKind::Status(status.as_u16()),
                detail: format!("HTTP {status}"),
            });
        }

        let payload: Value = res.json().await.map_err(|e| PollError::Upstream {
            kind: UpstreamKind::Decode,
            detail: e.to_string(),
        })?;

        tracing::info!(target: "api", "review statuses received");
        Ok(payload)
    }
}

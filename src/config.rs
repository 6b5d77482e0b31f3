// src/config.rs
use anyhow::{anyhow, Result};

use crate::api::DEFAULT_ENDPOINT;

const ENV_PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
const ENV_TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
const ENV_REVIEW_API_URL: &str = "REVIEW_API_URL";
const ENV_POLL_INTERVAL_SECS: &str = "POLL_INTERVAL_SECS";
const ENV_HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Startup configuration, read once from the environment before the loop
/// starts. Missing secrets are fatal here, never inside the loop.
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub poll_interval_secs: u64,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mut missing: Vec<&str> = Vec::new();
        let mut required = |name: &'static str| -> String {
            match std::env::var(name) {
                Ok(v) if !v.trim().is_empty() => v,
                _ => {
                    missing.push(name);
                    String::new()
                }
            }
        };

        let practicum_token = required(ENV_PRACTICUM_TOKEN);
        let telegram_token = required(ENV_TELEGRAM_TOKEN);
        let telegram_chat_id = required(ENV_TELEGRAM_CHAT_ID);

        if !missing.is_empty() {
            return Err(anyhow!(
                "missing required environment variables: {}",
                missing.join(", ")
            ));
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: std::env::var(ENV_REVIEW_API_URL)
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            poll_interval_secs: secs_from_env(ENV_POLL_INTERVAL_SECS, DEFAULT_POLL_INTERVAL_SECS),
            http_timeout_secs: secs_from_env(ENV_HTTP_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS),
        })
    }
}

fn secs_from_env(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(v) => v.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(target: "config", var = name, value = %v, "unparseable seconds value, using default");
            default
        }),
        Err(_) => default,
    }
}

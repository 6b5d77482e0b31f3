// src/notify/telegram.rs
use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use super::Messenger;

/// Telegram Bot API messenger (`sendMessage` over HTTPS).
pub struct TelegramMessenger {
    api_url: String,
    client: Client,
    timeout: Duration,
}

#[derive(Serialize)]
struct SendMessageBody<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramMessenger {
    pub fn new(bot_token: &str) -> Self {
        Self {
            api_url: format!("https://api.telegram.org/bot{bot_token}/sendMessage"),
            client: Client::new(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }
}

#[async_trait::async_trait]
impl Messenger for TelegramMessenger {
    async fn send(&self, chat_id: &str, text: &str) -> Result<()> {
        let body = SendMessageBody { chat_id, text };

        self.client
            .post(&self.api_url)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .context("telegram sendMessage post")?
            .error_for_status()
            .context("telegram sendMessage non-2xx")?;
        Ok(())
    }
}

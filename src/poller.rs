// src/poller.rs
use metrics::{counter, describe_counter, describe_gauge, gauge};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::time::Duration;

use crate::api::ReviewFeed;
use crate::error::{ErrorKey, PollError};
use crate::notify::Messenger;
use crate::validate::check_response;
use crate::verdict::parse_status;

/// One-time metrics registration.
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("poll_cycles_total", "Poll cycles started.");
        describe_counter!("poll_failures_total", "Poll cycles that ended in an error.");
        describe_counter!("notifications_sent_total", "Messages delivered to the chat.");
        describe_gauge!(
            "poll_last_success_ts",
            "Unix ts of the last successful poll cycle."
        );
    });
}

/// The poll-check-notify controller. Owns the two pieces of loop state
/// (time cursor, last notified failure) as plain fields; collaborators are
/// injected so tests can script the feed and record outgoing messages.
pub struct Poller<F, M> {
    feed: F,
    messenger: M,
    chat_id: String,
    interval: Duration,
    cursor: i64,
    last_error: Option<ErrorKey>,
}

impl<F, M> Poller<F, M>
where
    F: ReviewFeed,
    M: Messenger,
{
    /// Cursor starts at "now": only changes after startup are interesting.
    pub fn new(feed: F, messenger: M, chat_id: String) -> Self {
        Self {
            feed,
            messenger,
            chat_id,
            interval: Duration::from_secs(crate::config::DEFAULT_POLL_INTERVAL_SECS),
            cursor: chrono::Utc::now().timestamp(),
            last_error: None,
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.interval = Duration::from_secs(secs);
        self
    }

    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_error(&self) -> Option<&ErrorKey> {
        self.last_error.as_ref()
    }

    /// Run forever. Exits only with the process.
    pub async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.run_cycle().await;
        }
    }

    /// One full fetch-validate-notify-advance pass, errors contained.
    pub async fn run_cycle(&mut self) {
        ensure_metrics_described();
        counter!("poll_cycles_total").increment(1);

        match self.cycle().await {
            Ok(()) => {
                self.last_error = None;
                gauge!("poll_last_success_ts").set(chrono::Utc::now().timestamp() as f64);
            }
            Err(err) => {
                counter!("poll_failures_total").increment(1);
                tracing::error!(target: "poller", error = %err, "poll cycle failed");

                let key = err.dedup_key();
                if self.last_error.as_ref() != Some(&key) {
                    self.notify(&format!("Poll cycle failed: {err}")).await;
                    self.last_error = Some(key);
                } else {
                    tracing::debug!(target: "poller", "repeated failure, notification suppressed");
                }
            }
        }
    }

    async fn cycle(&mut self) -> Result<(), PollError> {
        let response = self.feed.fetch(self.cursor).await?;
        let homeworks = check_response(&response)?;
        tracing::info!(target: "poller", count = homeworks.len(), "homework list received");

        // Only the newest submission is inspected; simultaneous changes
        // further down the list are intentionally ignored.
        if let Some(newest) = homeworks.first() {
            let message = parse_status(newest)?;
            self.notify(&message).await;
        } else {
            tracing::debug!(target: "poller", "no new statuses");
        }

        if let Some(ts) = response.get("current_date").and_then(Value::as_i64) {
            self.cursor = ts;
        }
        Ok(())
    }

    /// Delivery failures are logged and swallowed; the loop never dies
    /// because the chat was unreachable.
    async fn notify(&self, text: &str) {
        match self.messenger.send(&self.chat_id, text).await {
            Ok(()) => {
                counter!("notifications_sent_total").increment(1);
                tracing::debug!(target: "poller", text, "notification delivered");
            }
            Err(e) => {
                tracing::error!(target: "poller", error = %e, "notification delivery failed");
            }
        }
    }
}

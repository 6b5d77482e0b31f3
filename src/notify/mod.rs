// src/notify/mod.rs
pub mod telegram;

use anyhow::Result;
use async_trait::async_trait;

/// Outbound message delivery. Implementations may fail; the poll loop is the
/// one that decides failures are non-fatal.
#[async_trait]
pub trait Messenger {
    async fn send(&self, chat_id: &str, text: &str) -> Result<()>;
}

// Lets tests hold on to a recording messenger after handing it to the poller.
#[async_trait]
impl<M: Messenger + Send + Sync> Messenger for std::sync::Arc<M> {
    async fn send(&self, chat_id: &str, text: &str) -> Result<()> {
        (**self).send(chat_id, text).await
    }
}

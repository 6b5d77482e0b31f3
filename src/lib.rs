// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod config;
pub mod error;
pub mod notify;
pub mod poller;
pub mod validate;
pub mod verdict;

// ---- Re-exports for stable public API ----
pub use crate::api::{ReviewApi, ReviewFeed};
pub use crate::config::Config;
pub use crate::error::{ErrorKey, PollError, UpstreamKind};
pub use crate::notify::Messenger;
pub use crate::poller::Poller;

//! Homework Review Notifier — Binary Entrypoint
//! Loads configuration, wires the API client and Telegram messenger, and
//! hands control to the poll loop. Runs until killed.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use homework_notifier::notify::telegram::TelegramMessenger;
use homework_notifier::{Config, Poller, ReviewApi};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env in local/dev; no-op when vars come from the real environment.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "startup configuration invalid, aborting");
            std::process::exit(1);
        }
    };

    let feed = ReviewApi::new(cfg.endpoint.clone(), cfg.practicum_token.clone())
        .with_timeout(cfg.http_timeout_secs);
    let messenger = TelegramMessenger::new(&cfg.telegram_token).with_timeout(cfg.http_timeout_secs);

    tracing::info!(
        endpoint = %cfg.endpoint,
        interval_secs = cfg.poll_interval_secs,
        "starting poll loop"
    );

    Poller::new(feed, messenger, cfg.telegram_chat_id)
        .with_interval(cfg.poll_interval_secs)
        .run()
        .await;
}

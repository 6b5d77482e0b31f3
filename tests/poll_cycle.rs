// tests/poll_cycle.rs
// Happy-path cycles: notification content and cursor movement.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use homework_notifier::{Messenger, PollError, Poller, ReviewFeed};

struct ScriptedFeed {
    responses: Mutex<VecDeque<Result<Value, PollError>>>,
}

impl ScriptedFeed {
    fn new(responses: Vec<Result<Value, PollError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl ReviewFeed for ScriptedFeed {
    async fn fetch(&self, _from_date: i64) -> Result<Value, PollError> {
        self.responses
            .lock()
            .pop_front()
            .expect("feed script exhausted")
    }
}

#[derive(Default)]
struct RecordingMessenger {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingMessenger {
    fn texts(&self) -> Vec<String> {
        self.sent.lock().iter().map(|(_, t)| t.clone()).collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, chat_id: &str, text: &str) -> anyhow::Result<()> {
        self.sent.lock().push((chat_id.to_string(), text.to_string()));
        Ok(())
    }
}

#[tokio::test]
async fn approved_homework_notifies_and_advances_cursor() {
    let feed = ScriptedFeed::new(vec![Ok(json!({
        "homeworks": [ { "homework_name": "hw1", "status": "approved" } ],
        "current_date": 1000
    }))]);
    let chat = Arc::new(RecordingMessenger::default());

    let mut poller = Poller::new(feed, chat.clone(), "42".to_string()).with_cursor(1);
    poller.run_cycle().await;

    let texts = chat.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("hw1"), "{}", texts[0]);
    assert!(texts[0].contains("reviewed, no issues"), "{}", texts[0]);
    assert_eq!(poller.cursor(), 1000);
    assert_eq!(chat.sent.lock()[0].0, "42");
}

#[tokio::test]
async fn empty_list_is_silent_and_cursor_holds_without_current_date() {
    let feed = ScriptedFeed::new(vec![Ok(json!({ "homeworks": [] }))]);
    let chat = Arc::new(RecordingMessenger::default());

    let mut poller = Poller::new(feed, chat.clone(), "42".to_string()).with_cursor(777);
    poller.run_cycle().await;

    assert!(chat.texts().is_empty());
    assert_eq!(poller.cursor(), 777);
    assert!(poller.last_error().is_none());
}

#[tokio::test]
async fn only_the_newest_submission_is_reported() {
    let feed = ScriptedFeed::new(vec![Ok(json!({
        "homeworks": [
            { "homework_name": "hw3", "status": "reviewing" },
            { "homework_name": "hw2", "status": "approved" },
            { "homework_name": "hw1", "status": "rejected" }
        ],
        "current_date": 2000
    }))]);
    let chat = Arc::new(RecordingMessenger::default());

    let mut poller = Poller::new(feed, chat.clone(), "42".to_string()).with_cursor(1);
    poller.run_cycle().await;

    let texts = chat.texts();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].contains("hw3"), "{}", texts[0]);
    assert!(texts[0].contains("taken up for review"), "{}", texts[0]);
}

#[tokio::test]
async fn cursor_follows_server_time_not_local_clock() {
    // Two successful cycles; the second fetch must use the server-reported
    // current_date from the first.
    let feed = ScriptedFeed::new(vec![
        Ok(json!({ "homeworks": [], "current_date": 5000 })),
        Ok(json!({ "homeworks": [], "current_date": 6000 })),
    ]);
    let chat = Arc::new(RecordingMessenger::default());

    let mut poller = Poller::new(feed, chat.clone(), "42".to_string()).with_cursor(1);
    poller.run_cycle().await;
    assert_eq!(poller.cursor(), 5000);
    poller.run_cycle().await;
    assert_eq!(poller.cursor(), 6000);
}

#[tokio::test]
async fn cursor_holds_when_cycle_fails_before_advance() {
    let feed = ScriptedFeed::new(vec![Ok(json!({
        "homeworks": "not-a-list",
        "current_date": 9999
    }))]);
    let chat = Arc::new(RecordingMessenger::default());

    let mut poller = Poller::new(feed, chat.clone(), "42".to_string()).with_cursor(123);
    poller.run_cycle().await;

    // Validation failed, so current_date was never read.
    assert_eq!(poller.cursor(), 123);
    assert!(poller.last_error().is_some());
}

//! Common test utilities for integration tests.
//!
//! Fixtures for the quiz API payloads and helpers for driving an [`App`]
//! with key events against a [`MockHttpClient`].
//!
//! # Example
//!
//! ```ignore
//! let http = MockHttpClient::new();
//! http.set_response(&history_url(), MockResponse::json(history_json()));
//! let mut app = test_app(&http);
//! press(&mut app, KeyCode::Tab);
//! ```

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

use wikiquiz::adapters::MockHttpClient;
use wikiquiz::app::{App, AppMessage};
use wikiquiz::config::AppConfig;

pub const API_BASE: &str = "http://quiz.test";
pub const ARTICLE_URL: &str = "https://en.wikipedia.org/wiki/Alan_Turing";

pub fn generate_url() -> String {
    format!("{}/generate", API_BASE)
}

pub fn history_url() -> String {
    format!("{}/history", API_BASE)
}

pub fn detail_url(id: i64) -> String {
    format!("{}/history/{}", API_BASE, id)
}

/// A valid two-question quiz payload.
pub fn quiz_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "url": ARTICLE_URL,
        "title": title,
        "summary": "English mathematician and computer scientist.",
        "key_entities": {
            "people": ["Alan Turing"],
            "organizations": ["GCHQ"],
            "locations": ["Bletchley Park"]
        },
        "sections": ["Early life", "Career"],
        "quiz": [
            {
                "question": "Where did Turing work during WWII?",
                "options": ["Bletchley Park", "Cambridge", "Manchester", "Princeton"],
                "answer": "Bletchley Park",
                "difficulty": "easy",
                "explanation": "He worked at Bletchley Park."
            },
            {
                "question": "Which machine did Turing help break?",
                "options": ["Lorenz", "Enigma", "Purple", "Typex"],
                "answer": "Enigma",
                "difficulty": "medium",
                "explanation": "The bombe attacked Enigma."
            }
        ],
        "related_topics": ["Enigma machine", "Turing test"]
    })
}

/// Two history entries, newest first.
pub fn history_json() -> Value {
    json!([
        {"id": 2, "url": ARTICLE_URL, "title": "Alan Turing", "created_at": "2024-03-01T12:30:00"},
        {"id": 1, "url": "https://en.wikipedia.org/wiki/Ada_Lovelace", "title": "Ada Lovelace", "created_at": "2024-02-28T08:00:00"}
    ])
}

pub fn test_config() -> AppConfig {
    AppConfig::default()
        .with_api_base_url(API_BASE)
        .without_log_file()
}

/// App wired to `http`. Clones of the mock share responses and requests.
pub fn test_app(http: &MockHttpClient) -> App {
    App::new(test_config(), Arc::new(http.clone()))
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn press_ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Wait for the next request completion and apply it to the app.
pub async fn deliver_next(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    let msg = next_message(rx).await;
    app.handle_message(msg.clone());
    msg
}

pub async fn next_message(rx: &mut UnboundedReceiver<AppMessage>) -> AppMessage {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for a request to complete")
        .expect("message channel closed")
}

//! Application state and event handling.
//!
//! The App owns the controllers, the view router and the view state the
//! renderer needs (quiz cursors, list cursor). Key events and request
//! completions are applied synchronously; network work is spawned onto the
//! runtime and reports back through [`AppMessage`].

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use navigation::{handle_quiz_key, QuizKeyOutcome};
pub use types::{ListCursor, QuizCursor};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::QuizApiClient;
use crate::config::AppConfig;
use crate::state::{
    GenerationSession, HistoryBrowser, HistoryState, QuizInteractionEngine, Tab, ViewRouter,
};
use crate::traits::HttpClient;

/// Render/tick interval of the event loop.
pub const TICK_INTERVAL_MS: u64 = 100;

/// Ticks a detail-failure notice stays up (about two seconds).
pub const NOTICE_TICKS: u64 = 20;

/// Main application state
pub struct App {
    pub config: AppConfig,
    /// Quiz API client (shared with request tasks)
    pub api: QuizApiClient,
    pub router: ViewRouter,
    pub generation: GenerationSession,
    pub history: HistoryBrowser,
    /// Focus inside the generated quiz
    pub generate_cursor: QuizCursor,
    /// Focus inside the stored quiz opened from history
    pub history_cursor: QuizCursor,
    /// Highlighted history row
    pub list_cursor: ListCursor,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Receiver for request completions (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for request completions (clone this into request tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for spinners and the failure notice timeout
    pub tick_count: u64,
    /// Tick at which the current detail-failure notice became visible
    pub notice_since: Option<u64>,
    /// Dirty flag: set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
}

impl App {
    /// Create an App talking to `config.api_base_url` through `http`.
    pub fn new(config: AppConfig, http: Arc<dyn HttpClient>) -> Self {
        let api = QuizApiClient::new(config.api_base_url.clone(), http);
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            config,
            api,
            router: ViewRouter::new(),
            generation: GenerationSession::new(),
            history: HistoryBrowser::new(),
            generate_cursor: QuizCursor::default(),
            history_cursor: QuizCursor::default(),
            list_cursor: ListCursor::default(),
            should_quit: false,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            notice_since: None,
            needs_redraw: true,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }

    pub fn active_tab(&self) -> Tab {
        self.router.active()
    }

    /// Switch tabs; the first visit to History starts the list fetch.
    pub fn switch_tab(&mut self, tab: Tab) {
        if !self.router.switch_to(tab) {
            return;
        }
        self.mark_dirty();
        if tab == Tab::History {
            if let Some(request) = self.history.activate() {
                self.spawn_list_history(request);
            }
        }
    }

    pub fn cycle_tab(&mut self) {
        self.switch_tab(self.router.active().next());
    }

    /// Engine of the quiz displayed on the active tab, if any.
    pub fn active_engine(&self) -> Option<&QuizInteractionEngine> {
        match self.router.active() {
            Tab::Generate => self.generation.engine(),
            Tab::History => self.history.engine(),
        }
    }

    /// Whether keystrokes currently go into the URL field.
    pub fn is_editing_url(&self) -> bool {
        self.router.active() == Tab::Generate && self.generation.is_editable()
    }

    /// Whether a request the user is looking at is in flight.
    pub fn is_busy(&self) -> bool {
        match self.router.active() {
            Tab::Generate => self.generation.is_requesting(),
            Tab::History => self.history.is_loading(),
        }
    }

    /// Advance the tick counter, animating spinners and expiring the
    /// detail-failure notice.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.is_busy() {
            self.mark_dirty();
        }

        let notice_visible = self.router.active() == Tab::History
            && matches!(self.history.state(), HistoryState::DetailFailed { .. });
        if !notice_visible {
            return;
        }
        match self.notice_since {
            None => self.notice_since = Some(self.tick_count),
            Some(since) if self.tick_count.wrapping_sub(since) >= NOTICE_TICKS => {
                self.dismiss_notice();
            }
            Some(_) => {}
        }
    }

    /// Drop the detail-failure notice and show the list again.
    pub fn dismiss_notice(&mut self) -> bool {
        self.notice_since = None;
        if self.history.dismiss_failure() {
            self.mark_dirty();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;

    fn test_app() -> App {
        App::new(
            AppConfig::default().with_api_base_url("http://quiz.test"),
            Arc::new(MockHttpClient::new()),
        )
    }

    #[test]
    fn test_new_app_defaults() {
        let app = test_app();
        assert_eq!(app.active_tab(), Tab::Generate);
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
        assert!(app.message_rx.is_some());
        assert!(app.is_editing_url());
        assert_eq!(app.api.base_url(), "http://quiz.test");
    }

    #[test]
    fn test_tick_increments() {
        let mut app = test_app();
        app.tick();
        app.tick();
        assert_eq!(app.tick_count, 2);
    }

    #[test]
    fn test_dismiss_notice_without_failure() {
        let mut app = test_app();
        app.notice_since = Some(3);
        assert!(!app.dismiss_notice());
        assert_eq!(app.notice_since, None);
    }
}

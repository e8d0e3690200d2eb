//! Message handling for the App.

use super::{App, AppMessage};

impl App {
    /// Route a request completion to the controller that issued it.
    ///
    /// Controllers drop completions whose token they are no longer waiting
    /// for, so late responses never overwrite newer state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        tracing::debug!(token = %msg.token(), "request completed");
        self.mark_dirty();
        match msg {
            AppMessage::QuizGenerated { token, result } => {
                if self.generation.complete(token, result) && self.generation.engine().is_some() {
                    self.generate_cursor.reset();
                }
            }
            AppMessage::HistoryListed { token, result } => {
                if self.history.list_loaded(token, result) {
                    let len = self.history.summaries().map_or(0, |s| s.len());
                    self.list_cursor.clamp(len);
                }
            }
            AppMessage::HistoryDetailLoaded { token, result } => {
                if self.history.detail_loaded(token, result) {
                    self.history_cursor.reset();
                    // the timeout starts once the notice is actually visible
                    self.notice_since = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::config::AppConfig;
    use crate::error::ApiError;
    use crate::models::quiz::fixtures::abc_quiz;
    use crate::state::{HistoryState, Tab};
    use std::sync::Arc;

    fn test_app() -> App {
        App::new(AppConfig::default(), Arc::new(MockHttpClient::new()))
    }

    #[test]
    fn test_generation_result_resets_cursor() {
        let mut app = test_app();
        app.generation.update_url("https://en.wikipedia.org/wiki/Rust");
        let request = app.generation.submit().unwrap();
        app.generate_cursor.question = 4;

        app.handle_message(AppMessage::QuizGenerated {
            token: request.token,
            result: Ok(abc_quiz()),
        });
        assert!(app.generation.engine().is_some());
        assert_eq!(app.generate_cursor, Default::default());
    }

    #[test]
    fn test_stale_generation_result_ignored() {
        let mut app = test_app();
        app.generation.update_url("https://en.wikipedia.org/wiki/Rust");
        let first = app.generation.submit().unwrap();
        app.generation
            .complete(first.token, Err(ApiError::Transport("x".to_string())));
        app.generation.submit().unwrap();

        app.handle_message(AppMessage::QuizGenerated {
            token: first.token,
            result: Ok(abc_quiz()),
        });
        assert!(app.generation.is_requesting());
    }

    #[test]
    fn test_list_result_clamps_cursor() {
        let mut app = test_app();
        app.router.switch_to(Tab::History);
        let request = app.history.activate().unwrap();
        app.list_cursor.index = 7;

        app.handle_message(AppMessage::HistoryListed {
            token: request.token,
            result: Ok(vec![]),
        });
        assert!(matches!(app.history.state(), HistoryState::Listed(_)));
        assert_eq!(app.list_cursor.index, 0);
    }
}

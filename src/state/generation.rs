//! "Submit a URL, await the generated quiz" lifecycle.
//!
//! ```text
//! Idle(url) --submit, bad url--> Failed(invalid URL)
//! Idle(url) --submit--> Requesting --ok--> Succeeded(engine)
//!                                  --err--> Failed(generation failed)
//! Succeeded | Failed --reset--> Idle("")
//! ```
//!
//! URL validation runs synchronously inside `submit`, so there is no
//! observable validating state. The controller performs no I/O itself:
//! `submit` hands back a [`GenerateRequest`] for the caller to execute and
//! the outcome is fed back through `complete`.

use crate::error::ApiError;
use crate::models::Quiz;
use crate::state::engine::QuizInteractionEngine;
use crate::state::request::{RequestGeneration, RequestToken};

/// Substring every accepted article URL must contain.
pub const WIKIPEDIA_ARTICLE_MARKER: &str = "wikipedia.org/wiki/";

/// Why the last submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationFailure {
    /// Local validation rejected the URL; no request was made
    InvalidUrl,
    /// The generation request failed
    RequestFailed,
}

impl GenerationFailure {
    pub fn message(&self) -> &'static str {
        match self {
            GenerationFailure::InvalidUrl => "invalid URL",
            GenerationFailure::RequestFailed => "generation failed",
        }
    }
}

#[derive(Debug, Clone)]
pub enum GenerationState {
    /// Editing the URL
    Idle { url: String },
    /// Waiting for `POST /generate`
    Requesting { url: String, token: RequestToken },
    /// A quiz arrived and is on display
    Succeeded(QuizInteractionEngine),
    /// Last submission failed; the URL stays editable
    Failed {
        url: String,
        failure: GenerationFailure,
    },
}

/// Outbound generation request issued by [`GenerationSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub token: RequestToken,
    pub url: String,
}

/// Local URL check: must point at a Wikipedia article.
pub fn is_article_url(url: &str) -> bool {
    url.contains(WIKIPEDIA_ARTICLE_MARKER)
}

/// Generation controller. Starts in `Idle("")`.
#[derive(Debug)]
pub struct GenerationSession {
    state: GenerationState,
    requests: RequestGeneration,
    /// `user_message()` of the last request error
    failure_detail: Option<String>,
}

impl Default for GenerationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationSession {
    pub fn new() -> Self {
        Self {
            state: GenerationState::Idle { url: String::new() },
            requests: RequestGeneration::new(),
            failure_detail: None,
        }
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// URL text currently entered (empty once a quiz is shown).
    pub fn url(&self) -> &str {
        match &self.state {
            GenerationState::Idle { url }
            | GenerationState::Requesting { url, .. }
            | GenerationState::Failed { url, .. } => url,
            GenerationState::Succeeded(_) => "",
        }
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.state, GenerationState::Requesting { .. })
    }

    /// URL field accepts edits.
    pub fn is_editable(&self) -> bool {
        matches!(
            self.state,
            GenerationState::Idle { .. } | GenerationState::Failed { .. }
        )
    }

    pub fn failure(&self) -> Option<GenerationFailure> {
        match &self.state {
            GenerationState::Failed { failure, .. } => Some(*failure),
            _ => None,
        }
    }

    pub fn engine(&self) -> Option<&QuizInteractionEngine> {
        match &self.state {
            GenerationState::Succeeded(engine) => Some(engine),
            _ => None,
        }
    }

    pub fn engine_mut(&mut self) -> Option<&mut QuizInteractionEngine> {
        match &mut self.state {
            GenerationState::Succeeded(engine) => Some(engine),
            _ => None,
        }
    }

    /// Replace the URL text. Only from `Idle` or `Failed`; lands in `Idle`.
    pub fn update_url(&mut self, text: impl Into<String>) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.state = GenerationState::Idle { url: text.into() };
        true
    }

    /// Append a character to the URL being edited.
    pub fn push_char(&mut self, c: char) -> bool {
        let mut url = self.url().to_string();
        url.push(c);
        self.update_url(url)
    }

    /// Remove the last character of the URL being edited.
    pub fn pop_char(&mut self) -> bool {
        let mut url = self.url().to_string();
        if url.pop().is_none() {
            return false;
        }
        self.update_url(url)
    }

    /// Explanation of a failed request, shown under the fixed message.
    pub fn failure_detail(&self) -> Option<&str> {
        match self.failure() {
            Some(GenerationFailure::RequestFailed) => self.failure_detail.as_deref(),
            _ => None,
        }
    }

    /// Validate the URL and, if it passes, start a generation request.
    ///
    /// Returns the request to execute, or `None` when nothing should be sent:
    /// the URL was rejected locally (state becomes `Failed(invalid URL)`) or
    /// the controller is not in `Idle`/`Failed` (e.g. already requesting).
    pub fn submit(&mut self) -> Option<GenerateRequest> {
        if !self.is_editable() {
            tracing::debug!("generation submit ignored outside Idle/Failed");
            return None;
        }
        let url = self.url().trim().to_string();

        if !is_article_url(&url) {
            tracing::debug!(%url, "rejected non-article URL");
            self.state = GenerationState::Failed {
                url: self.url().to_string(),
                failure: GenerationFailure::InvalidUrl,
            };
            return None;
        }

        let token = self.requests.issue();
        tracing::info!(%url, %token, "generation requested");
        self.state = GenerationState::Requesting {
            url: url.clone(),
            token,
        };
        Some(GenerateRequest { token, url })
    }

    /// Apply the outcome of a generation request.
    ///
    /// Ignored unless it answers the request currently in flight. Returns
    /// whether the outcome was applied.
    pub fn complete(&mut self, token: RequestToken, result: Result<Quiz, ApiError>) -> bool {
        let url = match &self.state {
            GenerationState::Requesting { url, token: pending } if *pending == token => {
                url.clone()
            }
            _ => {
                tracing::debug!(%token, "discarding stale generation response");
                return false;
            }
        };

        self.state = match result {
            Ok(quiz) => {
                tracing::info!(title = %quiz.title, questions = quiz.len(), "quiz generated");
                GenerationState::Succeeded(QuizInteractionEngine::new(quiz))
            }
            Err(err) => {
                tracing::warn!(error = %err, %url, "quiz generation failed");
                self.failure_detail = Some(err.user_message());
                GenerationState::Failed {
                    url,
                    failure: GenerationFailure::RequestFailed,
                }
            }
        };
        true
    }

    /// Drop the quiz (or failure) and start over with an empty URL.
    pub fn reset(&mut self) -> bool {
        match self.state {
            GenerationState::Succeeded(_) | GenerationState::Failed { .. } => {
                self.state = GenerationState::Idle { url: String::new() };
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::fixtures::abc_quiz;
    use crate::state::engine::InteractionMode;

    const RUST_URL: &str = "https://en.wikipedia.org/wiki/Rust";

    #[test]
    fn test_initial_state_is_empty_idle() {
        let session = GenerationSession::new();
        assert!(matches!(session.state(), GenerationState::Idle { url } if url.is_empty()));
    }

    #[test]
    fn test_invalid_url_fails_without_request() {
        let mut session = GenerationSession::new();
        session.update_url("https://example.com");
        assert_eq!(session.submit(), None);
        assert_eq!(session.failure(), Some(GenerationFailure::InvalidUrl));
        assert_eq!(session.failure().unwrap().message(), "invalid URL");
        // the text stays editable
        assert_eq!(session.url(), "https://example.com");
        assert!(session.update_url("https://en.wikipedia.org/wiki/Go"));
        assert!(matches!(session.state(), GenerationState::Idle { .. }));
    }

    #[test]
    fn test_valid_url_issues_request() {
        let mut session = GenerationSession::new();
        session.update_url(format!("  {}  ", RUST_URL));
        let request = session.submit().unwrap();
        assert_eq!(request.url, RUST_URL);
        assert!(session.is_requesting());
    }

    #[test]
    fn test_success_builds_review_engine() {
        let mut session = GenerationSession::new();
        session.update_url(RUST_URL);
        let request = session.submit().unwrap();

        assert!(session.complete(request.token, Ok(abc_quiz())));
        let engine = session.engine().unwrap();
        assert_eq!(engine.mode(), InteractionMode::Review);
        assert_eq!(engine.selection_count(), 0);
        assert_eq!(engine.score(), None);
    }

    #[test]
    fn test_request_failure() {
        let mut session = GenerationSession::new();
        session.update_url(RUST_URL);
        let request = session.submit().unwrap();

        session.complete(request.token, Err(ApiError::status(500, "boom")));
        assert_eq!(session.failure(), Some(GenerationFailure::RequestFailed));
        assert_eq!(session.failure().unwrap().message(), "generation failed");
        assert_eq!(
            session.failure_detail(),
            Some("The quiz server is having trouble. Try again later.")
        );
        assert_eq!(session.url(), RUST_URL);

        // editing leaves the failure, and its detail with it
        session.push_char('x');
        assert_eq!(session.failure_detail(), None);
    }

    #[test]
    fn test_invalid_url_has_no_detail() {
        let mut session = GenerationSession::new();
        session.update_url("https://example.com");
        assert!(session.submit().is_none());
        assert_eq!(session.failure_detail(), None);
    }

    #[test]
    fn test_submit_gated_while_requesting() {
        let mut session = GenerationSession::new();
        session.update_url(RUST_URL);
        assert!(session.submit().is_some());
        assert!(session.submit().is_none());
        assert!(!session.update_url("other"));
        assert!(!session.push_char('x'));
        assert!(session.is_requesting());
    }

    #[test]
    fn test_stale_token_is_discarded() {
        let mut session = GenerationSession::new();
        session.update_url(RUST_URL);
        let first = session.submit().unwrap();
        session.complete(first.token, Err(ApiError::Transport("x".to_string())));

        let second = session.submit().unwrap();
        assert!(!session.complete(first.token, Ok(abc_quiz())));
        assert!(session.is_requesting());
        assert!(session.complete(second.token, Ok(abc_quiz())));
        assert!(session.engine().is_some());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut session = GenerationSession::new();
        session.update_url(RUST_URL);
        let request = session.submit().unwrap();
        session.complete(request.token, Err(ApiError::Transport("down".to_string())));
        assert!(session.submit().is_some());
    }

    #[test]
    fn test_reset_discards_quiz() {
        let mut session = GenerationSession::new();
        session.update_url(RUST_URL);
        let request = session.submit().unwrap();
        session.complete(request.token, Ok(abc_quiz()));

        assert!(session.reset());
        assert!(session.engine().is_none());
        assert_eq!(session.url(), "");
    }

    #[test]
    fn test_reset_not_allowed_from_idle_or_requesting() {
        let mut session = GenerationSession::new();
        assert!(!session.reset());
        session.update_url(RUST_URL);
        session.submit();
        assert!(!session.reset());
        assert!(session.is_requesting());
    }

    #[test]
    fn test_char_editing() {
        let mut session = GenerationSession::new();
        for c in "abc".chars() {
            session.push_char(c);
        }
        assert!(session.pop_char());
        assert_eq!(session.url(), "ab");
        session.update_url("");
        assert!(!session.pop_char());
    }

    #[test]
    fn test_engine_mut_only_when_succeeded() {
        let mut session = GenerationSession::new();
        assert!(session.engine_mut().is_none());
        session.update_url(RUST_URL);
        let request = session.submit().unwrap();
        session.complete(request.token, Ok(abc_quiz()));
        let engine = session.engine_mut().unwrap();
        engine.set_mode(InteractionMode::TakeQuiz);
        assert_eq!(session.engine().unwrap().mode(), InteractionMode::TakeQuiz);
    }
}

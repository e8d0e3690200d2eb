//! "List past quizzes, open one by id" lifecycle.
//!
//! ```text
//! Unloaded --activate--> Loading --ok--> Listed(summaries)
//!                                --err--> ListFailed
//! Listed --select_entry--> DetailLoading --ok--> DetailShown(engine)
//!                                        --err--> DetailFailed --dismiss--> Listed
//! DetailShown | DetailFailed --back--> Listed
//! Listed | ListFailed --refresh--> Loading
//! ```
//!
//! The summaries fetched for `Listed` travel with the detail states so
//! `back` can return to the list without another request.

use crate::error::ApiError;
use crate::models::{HistorySummary, Quiz, QuizId};
use crate::state::engine::QuizInteractionEngine;
use crate::state::request::{RequestGeneration, RequestToken};

pub const LIST_FAILED_MESSAGE: &str = "failed to load history";
pub const DETAIL_FAILED_MESSAGE: &str = "failed to load details";

#[derive(Debug, Clone, Default)]
pub enum HistoryState {
    /// Never activated; nothing fetched yet
    #[default]
    Unloaded,
    Loading {
        token: RequestToken,
    },
    /// List on display; may be empty ("no quizzes yet")
    Listed(Vec<HistorySummary>),
    ListFailed,
    DetailLoading {
        summaries: Vec<HistorySummary>,
        id: QuizId,
        token: RequestToken,
    },
    DetailShown {
        summaries: Vec<HistorySummary>,
        id: QuizId,
        engine: QuizInteractionEngine,
    },
    /// Detail fetch failed; a transient notice over the list
    DetailFailed {
        summaries: Vec<HistorySummary>,
    },
}

/// Outbound `GET /history` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRequest {
    pub token: RequestToken,
}

/// Outbound `GET /history/{id}` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRequest {
    pub token: RequestToken,
    pub id: QuizId,
}

/// History browser controller.
#[derive(Debug, Default)]
pub struct HistoryBrowser {
    state: HistoryState,
    requests: RequestGeneration,
    /// `user_message()` of the last request error
    failure_detail: Option<String>,
}

impl HistoryBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// The list currently known, if any state carries one.
    pub fn summaries(&self) -> Option<&[HistorySummary]> {
        match &self.state {
            HistoryState::Listed(summaries)
            | HistoryState::DetailLoading { summaries, .. }
            | HistoryState::DetailShown { summaries, .. }
            | HistoryState::DetailFailed { summaries } => Some(summaries),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            HistoryState::Loading { .. } | HistoryState::DetailLoading { .. }
        )
    }

    pub fn engine(&self) -> Option<&QuizInteractionEngine> {
        match &self.state {
            HistoryState::DetailShown { engine, .. } => Some(engine),
            _ => None,
        }
    }

    pub fn engine_mut(&mut self) -> Option<&mut QuizInteractionEngine> {
        match &mut self.state {
            HistoryState::DetailShown { engine, .. } => Some(engine),
            _ => None,
        }
    }

    /// User-visible failure text for the current state.
    pub fn failure_message(&self) -> Option<&'static str> {
        match self.state {
            HistoryState::ListFailed => Some(LIST_FAILED_MESSAGE),
            HistoryState::DetailFailed { .. } => Some(DETAIL_FAILED_MESSAGE),
            _ => None,
        }
    }

    /// Explanation of the current failure, from the underlying error.
    pub fn failure_detail(&self) -> Option<&str> {
        self.failure_message().and(self.failure_detail.as_deref())
    }

    /// First activation fetches the list. Later activations keep whatever
    /// state the browser was left in.
    pub fn activate(&mut self) -> Option<ListRequest> {
        match self.state {
            HistoryState::Unloaded => Some(self.start_list()),
            _ => None,
        }
    }

    /// Re-fetch the list from `Listed` or `ListFailed`.
    pub fn refresh(&mut self) -> Option<ListRequest> {
        match self.state {
            HistoryState::Unloaded | HistoryState::Listed(_) | HistoryState::ListFailed => {
                Some(self.start_list())
            }
            _ => {
                tracing::debug!("history refresh ignored while busy or showing a quiz");
                None
            }
        }
    }

    fn start_list(&mut self) -> ListRequest {
        let token = self.requests.issue();
        tracing::info!(%token, "history list requested");
        self.state = HistoryState::Loading { token };
        ListRequest { token }
    }

    /// Apply a `GET /history` outcome. Returns whether it was applied.
    pub fn list_loaded(
        &mut self,
        token: RequestToken,
        result: Result<Vec<HistorySummary>, ApiError>,
    ) -> bool {
        match self.state {
            HistoryState::Loading { token: pending } if pending == token => {}
            _ => {
                tracing::debug!(%token, "discarding stale history list response");
                return false;
            }
        }

        self.state = match result {
            Ok(summaries) => {
                tracing::info!(count = summaries.len(), "history list loaded");
                HistoryState::Listed(summaries)
            }
            Err(err) => {
                tracing::warn!(error = %err, "history list failed");
                self.failure_detail = Some(err.user_message());
                HistoryState::ListFailed
            }
        };
        true
    }

    /// Open one stored quiz. Only from `Listed`.
    pub fn select_entry(&mut self, id: QuizId) -> Option<DetailRequest> {
        let summaries = match std::mem::take(&mut self.state) {
            HistoryState::Listed(summaries) => summaries,
            other => {
                self.state = other;
                tracing::debug!(id, "history selection ignored outside the list");
                return None;
            }
        };

        let token = self.requests.issue();
        tracing::info!(id, %token, "history detail requested");
        self.state = HistoryState::DetailLoading {
            summaries,
            id,
            token,
        };
        Some(DetailRequest { token, id })
    }

    /// Apply a `GET /history/{id}` outcome. Returns whether it was applied.
    pub fn detail_loaded(&mut self, token: RequestToken, result: Result<Quiz, ApiError>) -> bool {
        let (summaries, id) = match std::mem::take(&mut self.state) {
            HistoryState::DetailLoading {
                summaries,
                id,
                token: pending,
            } if pending == token => (summaries, id),
            other => {
                self.state = other;
                tracing::debug!(%token, "discarding stale history detail response");
                return false;
            }
        };

        self.state = match result {
            Ok(quiz) => {
                tracing::info!(id, title = %quiz.title, "history detail loaded");
                HistoryState::DetailShown {
                    summaries,
                    id,
                    engine: QuizInteractionEngine::new(quiz),
                }
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "history detail failed");
                self.failure_detail = Some(err.user_message());
                HistoryState::DetailFailed { summaries }
            }
        };
        true
    }

    /// Return to the cached list from a detail view or a detail failure.
    pub fn back(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            HistoryState::DetailShown { summaries, .. } | HistoryState::DetailFailed { summaries } => {
                self.state = HistoryState::Listed(summaries);
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Clear the transient detail-failure notice.
    pub fn dismiss_failure(&mut self) -> bool {
        if matches!(self.state, HistoryState::DetailFailed { .. }) {
            self.back()
        } else {
            false
        }
    }
}

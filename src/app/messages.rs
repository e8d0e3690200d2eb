//! AppMessage enum for async communication within the application.

use crate::error::ApiError;
use crate::models::{HistorySummary, Quiz};
use crate::state::RequestToken;

/// Completions posted by request tasks. Each spawned request sends exactly
/// one message carrying the token it was issued with.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// `POST /generate` finished
    QuizGenerated {
        token: RequestToken,
        result: Result<Quiz, ApiError>,
    },
    /// `GET /history` finished
    HistoryListed {
        token: RequestToken,
        result: Result<Vec<HistorySummary>, ApiError>,
    },
    /// `GET /history/{id}` finished
    HistoryDetailLoaded {
        token: RequestToken,
        result: Result<Quiz, ApiError>,
    },
}

impl AppMessage {
    pub fn token(&self) -> RequestToken {
        match self {
            AppMessage::QuizGenerated { token, .. }
            | AppMessage::HistoryListed { token, .. }
            | AppMessage::HistoryDetailLoaded { token, .. } => *token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RequestGeneration;

    #[test]
    fn test_token_of_each_completion() {
        let mut generation = RequestGeneration::new();
        let first = generation.issue();
        let second = generation.issue();
        let third = generation.issue();

        let messages = [
            AppMessage::QuizGenerated {
                token: first,
                result: Err(ApiError::Transport("refused".to_string())),
            },
            AppMessage::HistoryListed {
                token: second,
                result: Ok(Vec::new()),
            },
            AppMessage::HistoryDetailLoaded {
                token: third,
                result: Err(ApiError::status(404, "missing")),
            },
        ];
        let tokens: Vec<RequestToken> = messages.iter().map(AppMessage::token).collect();
        assert_eq!(tokens, vec![first, second, third]);
    }
}

//! Errors raised by the quiz API client.

use thiserror::Error;

use super::QuizValidationError;
use crate::traits::HttpError;

/// Longest server error body kept in [`ApiError::Status`].
const MAX_BODY_CHARS: usize = 200;

/// Failure of a single request against the quiz API.
///
/// Every variant means the whole request failed; callers never see a
/// partially decoded quiz.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not the JSON shape we expected
    #[error("malformed response: {0}")]
    Decode(String),

    /// The body decoded but broke a quiz invariant
    #[error("invalid quiz: {0}")]
    InvalidQuiz(#[from] QuizValidationError),
}

impl ApiError {
    /// Build a status error, keeping at most a short prefix of the body.
    pub fn status(status: u16, body: &str) -> Self {
        let message = if body.chars().count() > MAX_BODY_CHARS {
            let cut: String = body.chars().take(MAX_BODY_CHARS).collect();
            format!("{}...", cut)
        } else {
            body.to_string()
        };
        ApiError::Status { status, message }
    }

    /// Short description for the status bar.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Unable to reach the quiz server.".to_string(),
            ApiError::Status { status, .. } => match *status {
                400 => "The server rejected the request.".to_string(),
                404 => "The requested quiz was not found.".to_string(),
                500..=599 => "The quiz server is having trouble. Try again later.".to_string(),
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            ApiError::Decode(_) => "The server sent a quiz we could not read.".to_string(),
            ApiError::InvalidQuiz(err) => match err.question_index() {
                Some(index) => format!(
                    "The server sent a quiz we could not read (question {}).",
                    index + 1
                ),
                None => "The server sent a quiz we could not read.".to_string(),
            },
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => ApiError::status(status, &message),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_truncates_long_bodies() {
        let body = "x".repeat(500);
        match ApiError::status(500, &body) {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message.len(), MAX_BODY_CHARS + 3);
                assert!(message.ends_with("..."));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_from_http_error() {
        let err: ApiError = HttpError::ConnectionFailed("refused".to_string()).into();
        assert!(matches!(err, ApiError::Transport(_)));

        let err: ApiError = HttpError::ServerError {
            status: 502,
            message: "bad gateway".to_string(),
        }
        .into();
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                message: "bad gateway".to_string()
            }
        );
    }

    #[test]
    fn test_from_validation_error() {
        let err: ApiError = QuizValidationError::NoQuestions.into();
        assert_eq!(err.to_string(), "invalid quiz: quiz has no questions");
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            ApiError::status(404, "").user_message(),
            "The requested quiz was not found."
        );
        assert!(ApiError::Transport("x".to_string())
            .user_message()
            .contains("reach"));
        assert!(ApiError::Decode("x".to_string())
            .user_message()
            .contains("could not read"));
    }

    #[test]
    fn test_user_message_names_invalid_question() {
        let err: ApiError = QuizValidationError::AnswerNotInOptions {
            index: 2,
            answer: "x".to_string(),
        }
        .into();
        assert_eq!(
            err.user_message(),
            "The server sent a quiz we could not read (question 3)."
        );
        let err: ApiError = QuizValidationError::NoQuestions.into();
        assert_eq!(err.user_message(), "The server sent a quiz we could not read.");
    }
}

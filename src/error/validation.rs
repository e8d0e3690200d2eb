//! Quiz payload validation errors.

use thiserror::Error;

/// A quiz payload broke one of the construction-time invariants.
///
/// Indices are zero-based question positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizValidationError {
    #[error("quiz has no questions")]
    NoQuestions,

    #[error("question {index} has {count} option(s), at least 2 required")]
    TooFewOptions { index: usize, count: usize },

    #[error("question {index} lists option {option:?} more than once")]
    DuplicateOption { index: usize, option: String },

    #[error("question {index} answer {answer:?} is not one of its options")]
    AnswerNotInOptions { index: usize, answer: String },
}

impl QuizValidationError {
    /// Index of the offending question, if the error is about one.
    pub fn question_index(&self) -> Option<usize> {
        match self {
            QuizValidationError::NoQuestions => None,
            QuizValidationError::TooFewOptions { index, .. }
            | QuizValidationError::DuplicateOption { index, .. }
            | QuizValidationError::AnswerNotInOptions { index, .. } => Some(*index),
        }
    }
}

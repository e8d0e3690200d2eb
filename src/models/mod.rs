//! Data shapes exchanged with the quiz API.
//!
//! - [`Quiz`] / [`Question`] - a generated quiz and its questions
//! - [`HistorySummary`] - one row of the quiz history list

pub mod history;
pub mod quiz;

pub use history::{HistorySummary, QuizId};
pub use quiz::{Difficulty, KeyEntities, Question, Quiz};

//! Quiz data model.
//!
//! Mirrors the JSON the quiz API returns from `POST /generate` and
//! `GET /history/{id}`. Wire names are snake_case and a couple of them differ
//! from the logical names used in the client (`quiz` holds the questions,
//! `question` holds the question text).

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::QuizValidationError;

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// Difficulty grade attached to each question by the generator.
///
/// Serialized lowercase; parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    const NAMES: &'static [&'static str] = &["easy", "medium", "hard"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a grade in any letter case, ignoring surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(raw))
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Difficulty::parse(&raw).ok_or_else(|| serde::de::Error::unknown_variant(&raw, Self::NAMES))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities extracted from the source article. Any list may be missing or null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEntities {
    #[serde(default, deserialize_with = "null_as_default")]
    pub people: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organizations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<String>,
}

/// Decode an optional field, treating an explicit `null` like a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl KeyEntities {
    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.organizations.is_empty() && self.locations.is_empty()
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
    pub difficulty: Difficulty,
}

impl Question {
    /// Check the per-question invariants: enough options, no duplicates,
    /// and the canonical answer is one of the options.
    pub fn validate(&self, index: usize) -> Result<(), QuizValidationError> {
        if self.options.len() < MIN_OPTIONS {
            return Err(QuizValidationError::TooFewOptions {
                index,
                count: self.options.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(QuizValidationError::DuplicateOption {
                    index,
                    option: option.clone(),
                });
            }
        }

        if !self.is_option(&self.answer) {
            return Err(QuizValidationError::AnswerNotInOptions {
                index,
                answer: self.answer.clone(),
            });
        }

        Ok(())
    }

    /// Whether `option` is one of this question's options.
    pub fn is_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }

    /// Whether `option` is the canonical answer.
    pub fn is_answer(&self, option: &str) -> bool {
        self.answer == option
    }
}

/// A generated quiz for one source article. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Server-side record id (present on generated and stored quizzes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Source article URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_entities: KeyEntities,
    /// Article section headings
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<String>,
    #[serde(rename = "quiz")]
    pub questions: Vec<Question>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_topics: Vec<String>,
}

impl Quiz {
    /// Parse and validate a quiz payload.
    ///
    /// Either the whole payload is well formed or it is rejected; there is
    /// no partially valid quiz.
    pub fn from_json(bytes: &[u8]) -> Result<Self, crate::error::ApiError> {
        let quiz: Quiz = serde_json::from_slice(bytes)
            .map_err(|e| crate::error::ApiError::Decode(e.to_string()))?;
        quiz.validate()?;
        Ok(quiz)
    }

    /// Validate every invariant of the quiz.
    pub fn validate(&self) -> Result<(), QuizValidationError> {
        if self.questions.is_empty() {
            return Err(QuizValidationError::NoQuestions);
        }
        for (index, question) in self.questions.iter().enumerate() {
            question.validate(index)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn question(text: &str, options: &[&str], answer: &str) -> Question {
        Question {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
            explanation: format!("Because {}.", answer),
            difficulty: Difficulty::Medium,
        }
    }

    /// Three questions whose answers are `A`, `B`, `C`.
    pub fn abc_quiz() -> Quiz {
        Quiz {
            id: Some(1),
            url: Some("https://en.wikipedia.org/wiki/Rust".to_string()),
            title: "Rust".to_string(),
            summary: "A systems programming language.".to_string(),
            key_entities: KeyEntities::default(),
            sections: vec![],
            questions: vec![
                question("First?", &["A", "X", "Y"], "A"),
                question("Second?", &["X", "B", "Y"], "B"),
                question("Third?", &["X", "Y", "C"], "C"),
            ],
            related_topics: vec!["Cargo".to_string()],
        }
    }
}

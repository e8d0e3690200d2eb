//! Answer selection, mode switching and scoring for one displayed quiz.
//!
//! The engine owns the quiz it was built for plus the interaction state
//! (mode, selections, score). What each option looks like on screen is not
//! stored: [`option_disclosure`] and [`explanation_visible`] derive it from
//! the current state on every render.

use std::collections::BTreeMap;

use crate::models::{Question, Quiz};

/// Display mode of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Correct answers always visible
    #[default]
    Review,
    /// Answers hidden until the attempt is submitted
    TakeQuiz,
}

impl InteractionMode {
    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Review => InteractionMode::TakeQuiz,
            InteractionMode::TakeQuiz => InteractionMode::Review,
        }
    }
}

/// How a single option is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDisclosure {
    /// No emphasis
    Plain,
    /// The user's current pick, correctness not revealed
    Chosen,
    /// The canonical answer
    Correct,
    /// The user's pick after submission, when it was wrong
    Incorrect,
    /// Any other option after submission
    Muted,
}

/// Disclosure for `option` given the interaction state of its question.
pub fn option_disclosure(
    mode: InteractionMode,
    score: Option<usize>,
    selection: Option<&str>,
    option: &str,
    answer: &str,
) -> OptionDisclosure {
    match (mode, score) {
        (InteractionMode::Review, _) => {
            if option == answer {
                OptionDisclosure::Correct
            } else {
                OptionDisclosure::Plain
            }
        }
        (InteractionMode::TakeQuiz, None) => {
            if selection == Some(option) {
                OptionDisclosure::Chosen
            } else {
                OptionDisclosure::Plain
            }
        }
        (InteractionMode::TakeQuiz, Some(_)) => {
            if option == answer {
                OptionDisclosure::Correct
            } else if selection == Some(option) {
                OptionDisclosure::Incorrect
            } else {
                OptionDisclosure::Muted
            }
        }
    }
}

/// Explanations show in review mode and after a submitted attempt.
pub fn explanation_visible(mode: InteractionMode, score: Option<usize>) -> bool {
    match mode {
        InteractionMode::Review => true,
        InteractionMode::TakeQuiz => score.is_some(),
    }
}

/// Interaction state machine for one quiz.
#[derive(Debug, Clone)]
pub struct QuizInteractionEngine {
    quiz: Quiz,
    mode: InteractionMode,
    /// question index -> selected option
    selections: BTreeMap<usize, String>,
    /// Set once by `submit`, cleared only by `set_mode`
    score: Option<usize>,
}

impl QuizInteractionEngine {
    /// Fresh engine in review mode with no selections.
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            mode: InteractionMode::Review,
            selections: BTreeMap::new(),
            score: None,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn score(&self) -> Option<usize> {
        self.score
    }

    pub fn question_count(&self) -> usize {
        self.quiz.len()
    }

    pub fn selection(&self, question_index: usize) -> Option<&str> {
        self.selections.get(&question_index).map(String::as_str)
    }

    pub fn selection_count(&self) -> usize {
        self.selections.len()
    }

    /// Switch mode. Always starts from a clean slate: no selections, no score.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        tracing::debug!(?mode, "quiz mode changed");
        self.mode = mode;
        self.selections.clear();
        self.score = None;
    }

    /// Record `option` as the answer for `question_index`.
    ///
    /// Only applies while taking the quiz and before submission; out-of-range
    /// indices and unknown options are ignored. Returns whether the selection
    /// was recorded.
    pub fn select(&mut self, question_index: usize, option: &str) -> bool {
        if !self.accepts_selection() {
            return false;
        }
        let Some(question) = self.quiz.question(question_index) else {
            return false;
        };
        if !question.is_option(option) {
            return false;
        }
        self.selections.insert(question_index, option.to_string());
        true
    }

    /// Select by option position instead of text.
    pub fn select_index(&mut self, question_index: usize, option_index: usize) -> bool {
        let option = self
            .quiz
            .question(question_index)
            .and_then(|q| q.options.get(option_index))
            .cloned();
        match option {
            Some(option) => self.select(question_index, &option),
            None => false,
        }
    }

    /// Every question has a selection.
    pub fn is_complete(&self) -> bool {
        (0..self.quiz.len()).all(|i| self.selections.contains_key(&i))
    }

    /// Options respond to selection (take-quiz mode, not yet submitted).
    pub fn accepts_selection(&self) -> bool {
        self.mode == InteractionMode::TakeQuiz && self.score.is_none()
    }

    /// Whether `submit` would currently be accepted.
    pub fn can_submit(&self) -> bool {
        self.accepts_selection() && self.is_complete()
    }

    /// Freeze the score for the current attempt.
    ///
    /// Rejected (returns `None`, nothing changes) unless in take-quiz mode,
    /// not yet submitted, and every question answered.
    pub fn submit(&mut self) -> Option<usize> {
        if !self.can_submit() {
            return None;
        }
        let score = self
            .quiz
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.selection(*i).is_some_and(|chosen| q.is_answer(chosen)))
            .count();
        tracing::debug!(score, total = self.quiz.len(), "quiz submitted");
        self.score = Some(score);
        self.score
    }

    /// Disclosure of one option of one question.
    pub fn disclosure(&self, question_index: usize, option: &str) -> OptionDisclosure {
        let answer = self
            .quiz
            .question(question_index)
            .map(|q| q.answer.as_str())
            .unwrap_or_default();
        option_disclosure(
            self.mode,
            self.score,
            self.selection(question_index),
            option,
            answer,
        )
    }

    pub fn explanation_visible(&self) -> bool {
        explanation_visible(self.mode, self.score)
    }

    /// Questions paired with their index, for rendering.
    pub fn questions(&self) -> impl Iterator<Item = (usize, &Question)> {
        self.quiz.questions.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::fixtures::abc_quiz;

    fn take_quiz_engine() -> QuizInteractionEngine {
        let mut engine = QuizInteractionEngine::new(abc_quiz());
        engine.set_mode(InteractionMode::TakeQuiz);
        engine
    }

    #[test]
    fn test_new_engine_is_review_with_no_state() {
        let engine = QuizInteractionEngine::new(abc_quiz());
        assert_eq!(engine.mode(), InteractionMode::Review);
        assert_eq!(engine.selection_count(), 0);
        assert_eq!(engine.score(), None);
    }

    #[test]
    fn test_select_ignored_in_review_mode() {
        let mut engine = QuizInteractionEngine::new(abc_quiz());
        assert!(!engine.select(0, "A"));
        assert_eq!(engine.selection(0), None);
    }

    #[test]
    fn test_select_overwrites_previous_choice() {
        let mut engine = take_quiz_engine();
        assert!(engine.select(0, "X"));
        assert!(engine.select(0, "A"));
        assert_eq!(engine.selection(0), Some("A"));
        assert_eq!(engine.selection_count(), 1);
    }

    #[test]
    fn test_select_out_of_range_or_unknown_option_ignored() {
        let mut engine = take_quiz_engine();
        assert!(!engine.select(3, "A"));
        assert!(!engine.select(0, "not an option"));
        assert!(!engine.select_index(0, 9));
        assert_eq!(engine.selection_count(), 0);
    }

    #[test]
    fn test_submit_rejected_until_complete() {
        let mut engine = take_quiz_engine();
        engine.select(0, "A");
        engine.select(1, "B");
        assert!(!engine.is_complete());
        assert!(!engine.can_submit());
        assert_eq!(engine.submit(), None);
        assert_eq!(engine.score(), None);

        engine.select(2, "C");
        assert!(engine.is_complete());
        assert_eq!(engine.submit(), Some(3));
    }

    #[test]
    fn test_score_counts_matching_answers() {
        let mut engine = take_quiz_engine();
        engine.select(0, "A");
        engine.select(1, "B");
        engine.select(2, "X");
        assert_eq!(engine.submit(), Some(2));
        assert_eq!(engine.score(), Some(2));
        assert_eq!(engine.score(), Some(2));
    }

    #[test]
    fn test_submit_twice_has_no_further_effect() {
        let mut engine = take_quiz_engine();
        engine.select(0, "A");
        engine.select(1, "X");
        engine.select(2, "C");
        assert_eq!(engine.submit(), Some(2));
        assert_eq!(engine.submit(), None);
        assert_eq!(engine.score(), Some(2));
    }

    #[test]
    fn test_selection_frozen_after_submit() {
        let mut engine = take_quiz_engine();
        for (i, opt) in ["A", "B", "C"].iter().enumerate() {
            engine.select(i, opt);
        }
        engine.submit();
        assert!(!engine.select(0, "X"));
        assert_eq!(engine.selection(0), Some("A"));
    }

    #[test]
    fn test_submit_rejected_in_review_mode() {
        let mut engine = QuizInteractionEngine::new(abc_quiz());
        assert_eq!(engine.submit(), None);
    }

    #[test]
    fn test_set_mode_resets_attempt() {
        let mut engine = take_quiz_engine();
        for (i, opt) in ["A", "B", "C"].iter().enumerate() {
            engine.select(i, opt);
        }
        engine.submit();

        engine.set_mode(InteractionMode::Review);
        assert_eq!(engine.selection_count(), 0);
        assert_eq!(engine.score(), None);

        engine.set_mode(InteractionMode::TakeQuiz);
        assert_eq!(engine.selection_count(), 0);
        assert_eq!(engine.score(), None);
        assert!(engine.accepts_selection());
    }

    #[test]
    fn test_reentering_take_quiz_starts_fresh() {
        let mut engine = take_quiz_engine();
        engine.select(0, "A");
        engine.set_mode(InteractionMode::TakeQuiz);
        assert_eq!(engine.selection(0), None);
    }

    #[test]
    fn test_review_disclosure_marks_only_answer() {
        let engine = QuizInteractionEngine::new(abc_quiz());
        assert_eq!(engine.disclosure(0, "A"), OptionDisclosure::Correct);
        assert_eq!(engine.disclosure(0, "X"), OptionDisclosure::Plain);
        assert!(engine.explanation_visible());
    }

    #[test]
    fn test_take_quiz_disclosure_hides_correctness() {
        let mut engine = take_quiz_engine();
        engine.select(0, "X");
        assert_eq!(engine.disclosure(0, "X"), OptionDisclosure::Chosen);
        assert_eq!(engine.disclosure(0, "A"), OptionDisclosure::Plain);
        assert_eq!(engine.disclosure(1, "B"), OptionDisclosure::Plain);
        assert!(!engine.explanation_visible());
    }

    #[test]
    fn test_submitted_disclosure() {
        let mut engine = take_quiz_engine();
        engine.select(0, "X");
        engine.select(1, "B");
        engine.select(2, "C");
        engine.submit();

        // wrong pick on question 0
        assert_eq!(engine.disclosure(0, "A"), OptionDisclosure::Correct);
        assert_eq!(engine.disclosure(0, "X"), OptionDisclosure::Incorrect);
        assert_eq!(engine.disclosure(0, "Y"), OptionDisclosure::Muted);
        // right pick on question 1
        assert_eq!(engine.disclosure(1, "B"), OptionDisclosure::Correct);
        assert_eq!(engine.disclosure(1, "X"), OptionDisclosure::Muted);
        assert!(engine.explanation_visible());
    }

    #[test]
    fn test_option_disclosure_is_pure() {
        use InteractionMode::*;
        assert_eq!(
            option_disclosure(Review, Some(1), Some("b"), "b", "a"),
            OptionDisclosure::Plain
        );
        assert_eq!(
            option_disclosure(TakeQuiz, None, None, "a", "a"),
            OptionDisclosure::Plain
        );
        assert_eq!(
            option_disclosure(TakeQuiz, Some(0), None, "b", "a"),
            OptionDisclosure::Muted
        );
        assert!(!explanation_visible(TakeQuiz, None));
        assert!(explanation_visible(TakeQuiz, Some(0)));
        assert!(explanation_visible(Review, None));
    }

    #[test]
    fn test_mode_toggled() {
        assert_eq!(InteractionMode::Review.toggled(), InteractionMode::TakeQuiz);
        assert_eq!(InteractionMode::TakeQuiz.toggled(), InteractionMode::Review);
    }
}

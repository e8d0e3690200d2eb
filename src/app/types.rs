//! View-state types owned by the App.
//!
//! - [`QuizCursor`] - Focused question/option inside a displayed quiz
//! - [`ListCursor`] - Highlighted row of the history list

/// Focus inside a displayed quiz. Never stored in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizCursor {
    pub question: usize,
    pub option: usize,
}

impl QuizCursor {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move to the previous question, focusing its first option.
    pub fn prev_question(&mut self) -> bool {
        if self.question == 0 {
            return false;
        }
        self.question -= 1;
        self.option = 0;
        true
    }

    pub fn next_question(&mut self, question_count: usize) -> bool {
        if self.question + 1 >= question_count {
            return false;
        }
        self.question += 1;
        self.option = 0;
        true
    }

    pub fn prev_option(&mut self) -> bool {
        if self.option == 0 {
            return false;
        }
        self.option -= 1;
        true
    }

    pub fn next_option(&mut self, option_count: usize) -> bool {
        if self.option + 1 >= option_count {
            return false;
        }
        self.option += 1;
        true
    }
}

/// Highlighted row of the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListCursor {
    pub index: usize,
}

impl ListCursor {
    pub fn up(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn down(&mut self, len: usize) -> bool {
        if self.index + 1 >= len {
            return false;
        }
        self.index += 1;
        true
    }

    /// Keep the cursor inside a list of `len` rows.
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }
}

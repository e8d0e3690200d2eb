//! Key handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{HistoryState, QuizInteractionEngine, Tab};

use super::{App, QuizCursor};

/// Result of offering a key to the quiz view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKeyOutcome {
    /// The key belonged to the quiz view
    Handled,
    /// Not a quiz key; the caller may use it
    Ignored,
}

/// Apply a quiz-view key to an engine and its cursor.
///
/// Arrows (or `hjkl`) move focus, `Enter`/`Space` pick the focused option,
/// digits pick an option by number, `t` toggles the mode and `s` submits.
/// Picks and submits the engine rejects are still `Handled`.
pub fn handle_quiz_key(
    engine: &mut QuizInteractionEngine,
    cursor: &mut QuizCursor,
    key: KeyEvent,
) -> QuizKeyOutcome {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return QuizKeyOutcome::Ignored;
    }

    let option_count = engine
        .quiz()
        .question(cursor.question)
        .map_or(0, |q| q.options.len());

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            cursor.prev_question();
        }
        KeyCode::Down | KeyCode::Char('j') => {
            cursor.next_question(engine.question_count());
        }
        KeyCode::Left | KeyCode::Char('h') => {
            cursor.prev_option();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            cursor.next_option(option_count);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            engine.select_index(cursor.question, cursor.option);
        }
        KeyCode::Char(c @ '1'..='9') => {
            let option = c as usize - '1' as usize;
            if engine.select_index(cursor.question, option) {
                cursor.option = option;
            }
        }
        KeyCode::Char('t') => {
            engine.set_mode(engine.mode().toggled());
        }
        KeyCode::Char('s') => {
            if engine.submit().is_none() {
                tracing::debug!(
                    answered = engine.selection_count(),
                    total = engine.question_count(),
                    "submit rejected"
                );
            }
        }
        _ => return QuizKeyOutcome::Ignored,
    }
    QuizKeyOutcome::Handled
}

fn has_control(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

impl App {
    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && has_control(&key) {
            self.quit();
            return;
        }

        // any key clears the transient detail-failure notice
        if self.router.active() == Tab::History
            && matches!(self.history.state(), HistoryState::DetailFailed { .. })
        {
            self.dismiss_notice();
            return;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.cycle_tab();
            return;
        }

        match self.router.active() {
            Tab::Generate => self.handle_generate_key(key),
            Tab::History => self.handle_history_key(key),
        }
    }

    /// Insert pasted text into the URL field.
    pub fn handle_paste(&mut self, text: &str) {
        if !self.is_editing_url() {
            return;
        }
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        let url = format!("{}{}", self.generation.url(), pasted);
        self.generation.update_url(url);
        self.mark_dirty();
    }

    /// Submit the URL field and start the request if it validates.
    pub fn submit_url(&mut self) {
        if let Some(request) = self.generation.submit() {
            self.spawn_generate(request);
        }
    }

    fn handle_generate_key(&mut self, key: KeyEvent) {
        let outcome = self
            .generation
            .engine_mut()
            .map(|engine| handle_quiz_key(engine, &mut self.generate_cursor, key));

        if let Some(outcome) = outcome {
            if outcome == QuizKeyOutcome::Handled {
                return;
            }
            match key.code {
                KeyCode::Esc => {
                    self.generation.reset();
                    self.generate_cursor.reset();
                }
                KeyCode::Char('q') => self.quit(),
                _ => {}
            }
            return;
        }

        if self.generation.is_editable() {
            match key.code {
                KeyCode::Enter => self.submit_url(),
                KeyCode::Backspace => {
                    self.generation.pop_char();
                }
                KeyCode::Char('u') if has_control(&key) => {
                    self.generation.update_url("");
                }
                KeyCode::Esc => {
                    self.generation.reset();
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
                {
                    self.generation.push_char(c);
                }
                _ => {}
            }
            return;
        }

        // requesting
        if key.code == KeyCode::Char('q') {
            self.quit();
        }
    }

    fn handle_history_key(&mut self, key: KeyEvent) {
        let outcome = self
            .history
            .engine_mut()
            .map(|engine| handle_quiz_key(engine, &mut self.history_cursor, key));

        if let Some(outcome) = outcome {
            if outcome == QuizKeyOutcome::Handled {
                return;
            }
            match key.code {
                KeyCode::Esc | KeyCode::Backspace => {
                    self.history.back();
                }
                KeyCode::Char('q') => self.quit(),
                _ => {}
            }
            return;
        }

        let (listed, len, highlighted) = match self.history.state() {
            HistoryState::Listed(summaries) => (
                true,
                summaries.len(),
                summaries.get(self.list_cursor.index).map(|s| s.id),
            ),
            _ => (false, 0, None),
        };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') if listed => {
                self.list_cursor.up();
            }
            KeyCode::Down | KeyCode::Char('j') if listed => {
                self.list_cursor.down(len);
            }
            KeyCode::Enter => {
                if let Some(request) = highlighted.and_then(|id| self.history.select_entry(id)) {
                    self.spawn_fetch_detail(request);
                }
            }
            KeyCode::Char('r') => {
                if let Some(request) = self.history.refresh() {
                    self.list_cursor.index = 0;
                    self.spawn_list_history(request);
                }
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}

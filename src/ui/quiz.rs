//! Quiz view: article header, entities, score banner and questions.
//!
//! Lines are pre-wrapped to the column width so the line index of the focused
//! question is known and the view can scroll to keep it on screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::QuizCursor;
use crate::models::{Difficulty, Question};
use crate::state::{InteractionMode, OptionDisclosure, QuizInteractionEngine};
use crate::ui::helpers::{hanging_wrap, option_label, truncate_to_width, wrap_words};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_CHOSEN, COLOR_CORRECT, COLOR_DIM, COLOR_EASY, COLOR_FOCUS_BG,
    COLOR_HARD, COLOR_HEADER, COLOR_INCORRECT, COLOR_MEDIUM,
};

/// Entities listed per kind.
pub const MAX_ENTITIES_SHOWN: usize = 3;

/// Pre-wrapped quiz content plus where the focused question sits.
#[derive(Debug, Clone)]
pub struct QuizLines {
    pub lines: Vec<Line<'static>>,
    /// First line of the focused question
    pub focus_start: usize,
    /// Last line of the focused question
    pub focus_end: usize,
}

/// Banner text once the attempt is scored.
pub fn score_banner(score: usize, total: usize) -> String {
    format!("You scored {} / {}", score, total)
}

fn difficulty_style(difficulty: Difficulty) -> Style {
    let color = match difficulty {
        Difficulty::Easy => COLOR_EASY,
        Difficulty::Medium => COLOR_MEDIUM,
        Difficulty::Hard => COLOR_HARD,
    };
    Style::default().fg(color)
}

/// Marker and text style for an option's disclosure.
fn disclosure_style(disclosure: OptionDisclosure) -> (&'static str, Style) {
    match disclosure {
        OptionDisclosure::Plain => ("  ", Style::default().fg(COLOR_ACCENT)),
        OptionDisclosure::Chosen => (
            "● ",
            Style::default()
                .fg(COLOR_CHOSEN)
                .add_modifier(Modifier::BOLD),
        ),
        OptionDisclosure::Correct => (
            "✓ ",
            Style::default()
                .fg(COLOR_CORRECT)
                .add_modifier(Modifier::BOLD),
        ),
        OptionDisclosure::Incorrect => (
            "✗ ",
            Style::default()
                .fg(COLOR_INCORRECT)
                .add_modifier(Modifier::CROSSED_OUT),
        ),
        OptionDisclosure::Muted => ("  ", Style::default().fg(COLOR_DIM)),
    }
}

fn entity_line(label: &str, names: &[String], width: usize) -> Option<Line<'static>> {
    if names.is_empty() {
        return None;
    }
    let shown: Vec<&str> = names
        .iter()
        .take(MAX_ENTITIES_SHOWN)
        .map(String::as_str)
        .collect();
    let label = format!("{}: ", label);
    let body = truncate_to_width(&shown.join(", "), width.saturating_sub(label.len()));
    Some(Line::from(vec![
        Span::styled(label, Style::default().fg(COLOR_DIM)),
        Span::raw(body),
    ]))
}

fn mode_line(engine: &QuizInteractionEngine) -> Line<'static> {
    let dim = Style::default().fg(COLOR_DIM);
    let bold = Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD);

    match engine.mode() {
        InteractionMode::Review => Line::from(vec![
            Span::styled("Mode: ", dim),
            Span::styled("Review", bold),
            Span::styled("  (t: take the quiz)", dim),
        ]),
        InteractionMode::TakeQuiz => {
            let progress = format!(
                "  answered {}/{}",
                engine.selection_count(),
                engine.question_count()
            );
            let submit_hint = if engine.score().is_some() {
                "  (t: review answers)"
            } else if engine.can_submit() {
                "  (s: submit)"
            } else {
                "  (answer every question to submit)"
            };
            Line::from(vec![
                Span::styled("Mode: ", dim),
                Span::styled("Take quiz", bold),
                Span::styled(progress, dim),
                Span::styled(submit_hint, dim),
            ])
        }
    }
}

fn push_question(
    lines: &mut Vec<Line<'static>>,
    engine: &QuizInteractionEngine,
    index: usize,
    question: &Question,
    focused_option: Option<usize>,
    width: usize,
) {
    let focused = focused_option.is_some();
    let marker = if focused { "▶ " } else { "  " };
    let number = format!("{}{}. ", marker, index + 1);
    let text_style = if focused {
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HEADER)
    };

    let mut question_lines = hanging_wrap(Span::styled(number, text_style), &question.text, text_style, width);
    if let Some(first) = question_lines.first_mut() {
        first.spans.push(Span::styled(
            format!("  [{}]", question.difficulty),
            difficulty_style(question.difficulty),
        ));
    }
    lines.extend(question_lines);

    for (opt_index, option) in question.options.iter().enumerate() {
        let (mark, mut style) = disclosure_style(engine.disclosure(index, option));
        if focused_option == Some(opt_index) {
            style = style.bg(COLOR_FOCUS_BG);
        }
        let prefix = format!("     {}{}. ", mark, option_label(opt_index));
        lines.extend(hanging_wrap(Span::styled(prefix, style), option, style, width));
    }

    if engine.explanation_visible() && !question.explanation.is_empty() {
        lines.extend(hanging_wrap(
            Span::styled("     Explanation: ", Style::default().fg(COLOR_DIM)),
            &question.explanation,
            Style::default()
                .fg(COLOR_DIM)
                .add_modifier(Modifier::ITALIC),
            width,
        ));
    }
}

/// Build the full quiz view for `width` columns.
pub fn build_quiz_lines(engine: &QuizInteractionEngine, cursor: &QuizCursor, width: usize) -> QuizLines {
    let quiz = engine.quiz();
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        truncate_to_width(&quiz.title, width),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(url) = &quiz.url {
        lines.push(Line::from(Span::styled(
            truncate_to_width(url, width),
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines.push(Line::from(""));

    if !quiz.summary.is_empty() {
        lines.extend(wrap_words(&quiz.summary, width).into_iter().map(Line::from));
        lines.push(Line::from(""));
    }

    let entities = &quiz.key_entities;
    let mut entity_lines: Vec<Line<'static>> = [
        ("People", &entities.people),
        ("Organizations", &entities.organizations),
        ("Locations", &entities.locations),
    ]
    .into_iter()
    .filter_map(|(label, names)| entity_line(label, names, width))
    .collect();
    if !quiz.sections.is_empty() {
        let label = "Sections: ";
        entity_lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(COLOR_DIM)),
            Span::styled(
                truncate_to_width(&quiz.sections.join(" · "), width.saturating_sub(label.len())),
                Style::default().fg(COLOR_DIM),
            ),
        ]));
    }
    if !entity_lines.is_empty() {
        lines.extend(entity_lines);
        lines.push(Line::from(""));
    }

    lines.push(mode_line(engine));
    if let Some(score) = engine.score() {
        lines.push(Line::from(Span::styled(
            score_banner(score, engine.question_count()),
            Style::default()
                .fg(COLOR_CORRECT)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));

    let mut focus_start = lines.len();
    let mut focus_end = lines.len();
    for (index, question) in engine.questions() {
        let focused_option = (index == cursor.question).then_some(cursor.option);
        if focused_option.is_some() {
            focus_start = lines.len();
        }
        push_question(&mut lines, engine, index, question, focused_option, width);
        if focused_option.is_some() {
            focus_end = lines.len().saturating_sub(1);
        }
        lines.push(Line::from(""));
    }

    if !quiz.related_topics.is_empty() {
        lines.extend(hanging_wrap(
            Span::styled("Related topics: ", Style::default().fg(COLOR_DIM)),
            &quiz.related_topics.join(", "),
            Style::default().fg(COLOR_ACCENT),
            width,
        ));
    }

    QuizLines {
        lines,
        focus_start,
        focus_end,
    }
}

/// First visible line so the focused question's block is on screen,
/// preferring to keep its first line visible.
pub fn scroll_offset(focus_start: usize, focus_end: usize, visible: usize) -> usize {
    if visible == 0 || focus_end < visible {
        return 0;
    }
    (focus_end + 1 - visible).min(focus_start)
}

/// Render the quiz into `area`.
pub fn render_quiz(frame: &mut Frame, area: Rect, engine: &QuizInteractionEngine, cursor: &QuizCursor) {
    let content = build_quiz_lines(engine, cursor, area.width as usize);
    let scroll = scroll_offset(content.focus_start, content.focus_end, area.height as usize);
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(content.lines).scroll((scroll, 0)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quiz::fixtures::abc_quiz;
    use crate::models::KeyEntities;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn taken_engine() -> QuizInteractionEngine {
        let mut engine = QuizInteractionEngine::new(abc_quiz());
        engine.set_mode(InteractionMode::TakeQuiz);
        engine.select(0, "A");
        engine.select(1, "B");
        engine.select(2, "X");
        engine
    }

    #[test]
    fn test_review_marks_answers_and_explanations() {
        let engine = QuizInteractionEngine::new(abc_quiz());
        let content = build_quiz_lines(&engine, &QuizCursor::default(), 80);
        let rendered = text(&content.lines);
        assert!(rendered.contains("✓ A. A"));
        assert!(rendered.contains("Mode: Review"));
        assert!(!rendered.contains("You scored"));
    }

    #[test]
    fn test_take_quiz_shows_choices_only() {
        let mut engine = QuizInteractionEngine::new(abc_quiz());
        engine.set_mode(InteractionMode::TakeQuiz);
        engine.select(0, "X");
        let rendered = text(&build_quiz_lines(&engine, &QuizCursor::default(), 80).lines);
        assert!(rendered.contains("● B. X"));
        assert!(!rendered.contains("✓"));
        assert!(!rendered.contains("Explanation"));
    }

    #[test]
    fn test_submitted_shows_score_and_mistakes() {
        let mut engine = taken_engine();
        engine.submit();
        let rendered = text(&build_quiz_lines(&engine, &QuizCursor::default(), 80).lines);
        assert!(rendered.contains("You scored 2 / 3"));
        assert!(rendered.contains("✗ A. X"));
        assert!(rendered.contains("✓ C. C"));
    }

    #[test]
    fn test_entities_capped_at_three() {
        let mut quiz = abc_quiz();
        quiz.key_entities = KeyEntities {
            people: vec!["Ada", "Alan", "Grace", "Linus"]
                .into_iter()
                .map(String::from)
                .collect(),
            organizations: vec![],
            locations: vec!["London".to_string()],
        };
        let engine = QuizInteractionEngine::new(quiz);
        let rendered = text(&build_quiz_lines(&engine, &QuizCursor::default(), 80).lines);
        assert!(rendered.contains("People: Ada, Alan, Grace"));
        assert!(!rendered.contains("Linus"));
        assert!(rendered.contains("Locations: London"));
        assert!(!rendered.contains("Organizations"));
    }

    #[test]
    fn test_focus_tracks_cursor() {
        let engine = QuizInteractionEngine::new(abc_quiz());
        let first = build_quiz_lines(&engine, &QuizCursor::default(), 80);
        let third = build_quiz_lines(&engine, &QuizCursor { question: 2, option: 0 }, 80);
        assert!(third.focus_start > first.focus_start);
        assert!(third.focus_end >= third.focus_start);
        let focused = text(&third.lines[third.focus_start..=third.focus_start]);
        assert!(focused.starts_with("▶ 3. "));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(5, 10, 20), 0);
        assert_eq!(scroll_offset(30, 36, 20), 17);
        // block taller than the view: keep its first line
        assert_eq!(scroll_offset(30, 60, 20), 30);
    }

    #[test]
    fn test_score_banner() {
        assert_eq!(score_banner(2, 3), "You scored 2 / 3");
    }
}

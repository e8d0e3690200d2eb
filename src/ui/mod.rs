//! UI rendering
//!
//! Layout, top to bottom:
//! - Header: app title and the tab selector
//! - Body: the active tab (URL entry / quiz, or history list / quiz)
//! - Footer: keybind hints for the current context
//!
//! Rendering is a pure function of the App; nothing here mutates state.
//! The body is a centered reading column sized by [`LayoutContext`].

pub mod components;
mod generate;
mod helpers;
mod history;
mod layout;
mod quiz;
mod theme;

pub use helpers::{option_label, truncate_to_width, wrap_words};
pub use layout::{breakpoints, centered_column, LayoutContext};
pub use quiz::{build_quiz_lines, score_banner, QuizLines, MAX_ENTITIES_SHOWN};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CORRECT, COLOR_DIM, COLOR_INCORRECT};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::{HistoryState, Tab};
use components::{render_tab_selector, TabItem};
use theme::COLOR_HEADER;

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], app, &ctx);

    let body = centered_column(chunks[1], ctx.content_width());
    let body = Rect {
        y: body.y + 1,
        height: body.height.saturating_sub(1),
        ..body
    };
    if !body.is_empty() {
        match app.active_tab() {
            Tab::Generate => generate::render_generate(frame, body, app),
            Tab::History => history::render_history(frame, body, app),
        }
    }

    let hints = Paragraph::new(keybind_hints(app, &ctx)).style(Style::default().fg(COLOR_DIM));
    frame.render_widget(hints, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let items: Vec<TabItem<'static>> = Tab::ALL.iter().copied().map(TabItem::from).collect();
    let mut spans = vec![Span::styled(
        " wikiquiz  ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    spans.extend(render_tab_selector(&items, app.active_tab().index(), ctx).spans);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(header, area);
}

/// Footer hints for what the keys currently do.
pub fn keybind_hints(app: &App, ctx: &LayoutContext) -> Line<'static> {
    let mut hints: Vec<&str> = Vec::new();

    if let Some(engine) = app.active_engine() {
        hints.push("↑↓ question");
        hints.push("←→ option");
        if engine.accepts_selection() {
            hints.push("enter select");
            if engine.can_submit() {
                hints.push("s submit");
            }
        }
        hints.push("t toggle mode");
        hints.push(match app.active_tab() {
            Tab::Generate => "esc new quiz",
            Tab::History => "esc back",
        });
    } else {
        match app.active_tab() {
            Tab::Generate if app.generation.is_editable() => {
                hints.push("enter generate");
                hints.push("ctrl+u clear");
            }
            Tab::Generate => {}
            Tab::History => match app.history.state() {
                HistoryState::Listed(summaries) if !summaries.is_empty() => {
                    hints.push("↑↓ move");
                    hints.push("enter open");
                    hints.push("r refresh");
                }
                HistoryState::Listed(_) | HistoryState::ListFailed => hints.push("r refresh"),
                _ => {}
            },
        }
    }

    hints.push("tab switch");
    if app.is_editing_url() {
        hints.push("ctrl+c quit");
    } else {
        hints.push("q quit");
    }

    if ctx.is_extra_small() {
        hints.truncate(3);
    }
    Line::from(format!(" {}", hints.join("  ·  ")))
}

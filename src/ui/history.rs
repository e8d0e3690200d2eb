//! Past Quizzes tab: history list, stored-quiz detail, failure notice.
//!
//! The list follows the browse-list look: two lines per entry plus a blank
//! spacer, `>` on the highlighted row.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, ListCursor};
use crate::models::HistorySummary;
use crate::state::HistoryState;

use super::components::{
    get_spinner_char, render_dialog_frame, render_status_indicator, DialogFrameConfig,
    StatusIndicatorType,
};
use super::helpers::truncate_to_width;
use super::layout::LayoutContext;
use super::quiz::render_quiz;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_PENDING};

/// Lines per item (title + url + blank line spacing)
const LINES_PER_ITEM: usize = 3;

pub const EMPTY_HISTORY_MESSAGE: &str =
    "No quizzes generated yet. Generate one from the Generate Quiz tab.";

/// First visible entry so the highlighted one is on screen.
pub fn list_scroll_offset(selected: usize, visible_items: usize) -> usize {
    if visible_items == 0 {
        return selected;
    }
    (selected + 1).saturating_sub(visible_items)
}

/// Two display lines for one entry.
pub fn history_item_lines(summary: &HistorySummary, is_selected: bool, width: usize) -> [Line<'static>; 2] {
    // "> " prefix
    let content_width = width.saturating_sub(2);
    let date = summary.created_date();
    let title_max = content_width.saturating_sub(date.width() + 2);
    let title = truncate_to_width(&summary.title, title_max);
    let padding = content_width.saturating_sub(title.width() + date.width());

    let (prefix, prefix_style, title_style) = if is_selected {
        (
            "> ",
            Style::default().fg(COLOR_ACCENT),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default(), Style::default().fg(Color::White))
    };

    [
        Line::from(vec![
            Span::styled(prefix, prefix_style),
            Span::styled(title, title_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(date, Style::default().fg(COLOR_DIM)),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate_to_width(&summary.url, content_width),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
    ]
}

fn render_list(frame: &mut Frame, area: Rect, summaries: &[HistorySummary], cursor: ListCursor) {
    if summaries.is_empty() {
        let lines = render_status_indicator(&StatusIndicatorType::info(EMPTY_HISTORY_MESSAGE));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let visible_items = (area.height as usize) / LINES_PER_ITEM;
    let offset = list_scroll_offset(cursor.index, visible_items);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (i, summary) in summaries
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_items.max(1))
    {
        lines.extend(history_item_lines(summary, i == cursor.index, area.width as usize));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_detail_failure(frame: &mut Frame, area: Rect, message: &str, detail: Option<&str>) {
    let ctx = LayoutContext::from_rect(area);
    let height = if detail.is_some() { 4 } else { 3 };
    let inner = render_dialog_frame(frame, area, &ctx, &DialogFrameConfig::new("Past Quizzes", height));
    let mut lines = vec![
        Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(
                message.to_string(),
                Style::default()
                    .fg(COLOR_ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled("press any key", Style::default().fg(COLOR_DIM))),
    ];
    if let Some(detail) = detail {
        lines.insert(1, Line::from(Span::styled(detail.to_string(), Style::default().fg(COLOR_DIM))));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the history tab into `area`.
pub fn render_history(frame: &mut Frame, area: Rect, app: &App) {
    let spinner_frame = app.tick_count as usize;

    match app.history.state() {
        HistoryState::Unloaded | HistoryState::Loading { .. } => {
            let lines =
                render_status_indicator(&StatusIndicatorType::spinner("Loading history...", spinner_frame));
            frame.render_widget(Paragraph::new(lines), area);
        }
        HistoryState::ListFailed => {
            let message = app.history.failure_message().unwrap_or_default();
            let mut lines = render_status_indicator(&StatusIndicatorType::error(
                message,
                app.history.failure_detail().map(str::to_string),
            ));
            lines.push(Line::from(Span::styled("    press r to retry", Style::default().fg(COLOR_DIM))));
            frame.render_widget(Paragraph::new(lines), area);
        }
        HistoryState::Listed(summaries) => {
            render_list(frame, area, summaries, app.list_cursor);
        }
        HistoryState::DetailLoading { summaries, .. } => {
            let list_area = Rect {
                height: area.height.saturating_sub(2),
                ..area
            };
            render_list(frame, list_area, summaries, app.list_cursor);
            if area.height >= 2 {
                let status = Line::from(vec![
                    Span::styled(
                        format!("{} ", get_spinner_char(spinner_frame)),
                        Style::default().fg(COLOR_PENDING),
                    ),
                    Span::styled("Loading quiz...", Style::default().fg(COLOR_DIM)),
                ]);
                frame.render_widget(
                    Paragraph::new(status),
                    Rect::new(area.x, area.y + area.height - 1, area.width, 1),
                );
            }
        }
        HistoryState::DetailShown { engine, .. } => {
            render_quiz(frame, area, engine, &app.history_cursor);
        }
        HistoryState::DetailFailed { summaries } => {
            render_list(frame, area, summaries, app.list_cursor);
            let message = app.history.failure_message().unwrap_or_default();
            render_detail_failure(frame, area, message, app.history.failure_detail());
        }
    }
}

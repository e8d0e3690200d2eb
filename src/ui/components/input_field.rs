//! Input Field Component
//!
//! A single-line text input with a label, placeholder and inline error, drawn
//! in a rounded box. Long values scroll so the end stays visible.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Focused fields show a block cursor and a bright border
    pub focused: bool,
    pub error: Option<&'a str>,
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows needed: label (1) + box (3) + error (1, if present).
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    if config.error.is_some() {
        5
    } else {
        4
    }
}

/// Tail of `value` that fits in `width` columns.
fn visible_tail(value: &str, width: usize) -> &str {
    if value.width() <= width {
        return value;
    }
    let mut start = value.len();
    let mut used = 0;
    for (idx, c) in value.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

/// Render the field into `area`. Returns the rows consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let mut y_offset = 0;
    let inner_x = area.x + 2;
    let inner_width = area.width.saturating_sub(4);

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        Rect::new(inner_x, area.y, inner_width, 1),
    );
    y_offset += 1;

    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    // borders take 2 columns, the cursor 1
    let text_width = inner_width.saturating_sub(3) as usize;
    let content = match config.placeholder {
        Some(placeholder) if config.value.is_empty() => {
            Span::styled(placeholder.to_string(), Style::default().fg(COLOR_DIM))
        }
        _ => {
            let style = if config.focused {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            Span::styled(visible_tail(config.value, text_width).to_string(), style)
        }
    };

    let mut spans = Vec::new();
    let show_cursor_first = config.value.is_empty();
    if config.focused && show_cursor_first {
        spans.push(Span::raw("\u{2588}"));
    }
    spans.push(content);
    if config.focused && !show_cursor_first {
        spans.push(Span::raw("\u{2588}"));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(block),
        Rect::new(inner_x, area.y + y_offset, inner_width, 3),
    );
    y_offset += 3;

    if let Some(error) = config.error {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(error.to_string(), Style::default().fg(COLOR_ERROR)),
            ])),
            Rect::new(inner_x, area.y + y_offset, inner_width, 1),
        );
        y_offset += 1;
    }

    y_offset
}

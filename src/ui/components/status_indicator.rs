//! Status Indicator Component
//!
//! Spinner, error and info lines used for loading and failure states.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::helpers::truncate_to_width;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PENDING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

const DETAIL_WIDTH: usize = 60;

/// Status indicator types
#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Error header with optional details (hint, retry key)
    Error {
        header: String,
        details: Option<String>,
    },
    /// Dim informational text
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn error(header: impl Into<String>, details: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            details,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as lines, with one blank line of top padding.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", get_spinner_char(*frame)),
                    Style::default().fg(COLOR_PENDING),
                ),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_PENDING)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        StatusIndicatorType::Error { header, details } => {
            lines.push(Line::from(vec![
                Span::styled("  \u{2717} ", Style::default().fg(COLOR_ERROR)), // X mark
                Span::styled(
                    header.clone(),
                    Style::default()
                        .fg(COLOR_ERROR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));

            if let Some(detail) = details {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("    {}", truncate_to_width(detail, DETAIL_WIDTH)),
                    Style::default().fg(COLOR_DIM),
                )));
            }
        }

        StatusIndicatorType::Info { message } => {
            lines.push(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    lines
}

//! Color theme constants for the quiz UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for the URL input box
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Loading spinners
pub const COLOR_PENDING: Color = Color::Yellow;

/// Background of the focused question/option
pub const COLOR_FOCUS_BG: Color = Color::Rgb(30, 35, 55);

// ============================================================================
// Answer Disclosure Colors
// ============================================================================

/// Correct answer
pub const COLOR_CORRECT: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Wrong pick after submission
pub const COLOR_INCORRECT: Color = Color::Red;

/// Current pick before submission
pub const COLOR_CHOSEN: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Errors and failure notices
pub const COLOR_ERROR: Color = Color::Red;

// ============================================================================
// Difficulty Badges
// ============================================================================

pub const COLOR_EASY: Color = Color::LightGreen;
pub const COLOR_MEDIUM: Color = Color::Yellow;
pub const COLOR_HARD: Color = Color::LightRed;

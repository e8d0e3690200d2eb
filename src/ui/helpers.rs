//! Text helpers shared by the views.
//!
//! Widths are display columns (unicode-width), not bytes.

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to at most `max_width` columns, ending in "..." when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Greedy word wrap to `width` columns. Words wider than a line are split.
/// Always returns at least one (possibly empty) line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let sep = usize::from(!current.is_empty());

        if current_width + sep + word_width <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += sep + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // split an over-long word
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += w;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap `text` under a hanging prefix: `first_prefix` on the first line,
/// blank padding of the same width on continuation lines.
pub fn hanging_wrap(
    first_prefix: Span<'static>,
    text: &str,
    text_style: Style,
    width: usize,
) -> Vec<Line<'static>> {
    let prefix_width = first_prefix.content.width();
    let indent = " ".repeat(prefix_width);
    let body_width = width.saturating_sub(prefix_width).max(8);

    wrap_words(text, body_width)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let prefix = if i == 0 {
                first_prefix.clone()
            } else {
                Span::styled(indent.clone(), first_prefix.style)
            };
            Line::from(vec![prefix, Span::styled(chunk, text_style)])
        })
        .collect()
}

/// Letter label for an option position: 0 -> "A", 25 -> "Z", then "27".
pub fn option_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}

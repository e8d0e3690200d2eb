//! Tab Selector Component
//!
//! Horizontal selector for the top-level tabs. The active tab carries a `▶`
//! marker; labels shrink on compact terminals.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::state::Tab;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            short_label: label,
        }
    }

    pub fn with_short_label(label: &'a str, short_label: &'a str) -> Self {
        Self { label, short_label }
    }
}

impl From<Tab> for TabItem<'static> {
    fn from(tab: Tab) -> Self {
        let short = match tab {
            Tab::Generate => "Generate",
            Tab::History => "History",
        };
        TabItem::with_short_label(tab.label(), short)
    }
}

/// Render a horizontal tab selector.
///
/// `selected` is the index of the active item; an out-of-range index simply
/// leaves every item dimmed.
pub fn render_tab_selector(items: &[TabItem<'_>], selected: usize, ctx: &LayoutContext) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if idx == selected {
            spans.push(Span::styled(
                "▶ ".to_string(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                label.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            let text_style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ".to_string(), text_style));
            spans.push(Span::styled(label.to_string(), text_style));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn tab_items() -> Vec<TabItem<'static>> {
        Tab::ALL.iter().copied().map(TabItem::from).collect()
    }

    #[test]
    fn test_marker_on_selected_tab() {
        let ctx = LayoutContext::new(120, 40);
        let line = render_tab_selector(&tab_items(), 1, &ctx);
        assert_eq!(text(&line), "  Generate Quiz    ▶ Past Quizzes");
    }

    #[test]
    fn test_compact_uses_short_labels() {
        let ctx = LayoutContext::new(50, 12);
        let line = render_tab_selector(&tab_items(), 0, &ctx);
        assert_eq!(text(&line), "▶ Generate    History");
    }
}

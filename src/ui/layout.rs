//! Responsive layout helpers.
//!
//! [`LayoutContext`] wraps the terminal size and answers the few sizing
//! questions the views ask: how wide the content column is, and whether
//! labels and hints should be condensed.

use ratatui::layout::Rect;

/// Breakpoints for responsive decisions.
pub mod breakpoints {
    /// Extra small width threshold
    pub const XS_WIDTH: u16 = 60;
    /// Small width threshold (narrow terminal)
    pub const SM_WIDTH: u16 = 80;
    /// Extra small height threshold
    pub const XS_HEIGHT: u16 = 16;
    /// Small height threshold (short terminal)
    pub const SM_HEIGHT: u16 = 24;
}

/// Widest the reading column grows on large terminals.
pub const MAX_CONTENT_WIDTH: u16 = 100;

/// Layout context holding terminal dimensions for responsive calculations.
///
/// # Example
///
/// ```
/// use wikiquiz::ui::LayoutContext;
///
/// let ctx = LayoutContext::new(120, 40);
/// assert!(!ctx.is_compact());
/// assert_eq!(ctx.percent_width(50), 60);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `min..=max`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    /// Check if the terminal is in a "narrow" state (less than 80 columns).
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Check if the terminal is in a "short" state (less than 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: condense labels and hints.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    /// Width of the centered reading column.
    pub fn content_width(&self) -> u16 {
        let margin = if self.is_extra_small() { 2 } else { 4 };
        self.width.saturating_sub(margin).min(MAX_CONTENT_WIDTH)
    }
}

/// Center a column of `width` horizontally inside `area`.
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_states() {
        assert!(LayoutContext::new(70, 30).is_narrow());
        assert!(LayoutContext::new(100, 20).is_short());
        assert!(LayoutContext::new(50, 30).is_extra_small());
        assert!(!LayoutContext::new(120, 40).is_compact());
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(30, 20, 50), 50);
        assert_eq!(LayoutContext::new(0, 0).percent_width(50), 1);
    }

    #[test]
    fn test_content_width_capped() {
        assert_eq!(LayoutContext::new(200, 50).content_width(), MAX_CONTENT_WIDTH);
        assert_eq!(LayoutContext::new(80, 24).content_width(), 76);
        assert_eq!(LayoutContext::new(40, 10).content_width(), 38);
    }

    #[test]
    fn test_centered_column() {
        let area = Rect::new(0, 1, 120, 30);
        let column = centered_column(area, 100);
        assert_eq!(column, Rect::new(10, 1, 100, 30));
        assert_eq!(centered_column(area, 500).width, 120);
    }
}

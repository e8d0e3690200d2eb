//! Generate Quiz tab: URL entry, progress, failure, then the quiz itself.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::state::GenerationFailure;

use super::components::{
    calculate_input_field_height, render_input_field, render_status_indicator, InputFieldConfig,
    StatusIndicatorType,
};
use super::quiz::render_quiz;
use super::theme::COLOR_DIM;

const URL_PLACEHOLDER: &str = "https://en.wikipedia.org/wiki/...";

/// Extra line under the inline error.
pub fn failure_hint(failure: GenerationFailure) -> &'static str {
    match failure {
        GenerationFailure::InvalidUrl => "Enter a link containing wikipedia.org/wiki/",
        GenerationFailure::RequestFailed => "Press Enter to try again",
    }
}

/// Render the generate tab into `area`.
pub fn render_generate(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(engine) = app.generation.engine() {
        render_quiz(frame, area, engine, &app.generate_cursor);
        return;
    }

    let intro = Paragraph::new(Line::styled(
        "Paste a Wikipedia article URL and press Enter to generate a quiz.",
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(intro, Rect { height: 1.min(area.height), ..area });

    let failure = app.generation.failure();
    let config = InputFieldConfig::new("Article URL", app.generation.url())
        .focused(app.generation.is_editable())
        .error(failure.map(|f| f.message()))
        .placeholder(URL_PLACEHOLDER);

    let field_height = calculate_input_field_height(&config);
    if area.height < 2 + field_height {
        return;
    }
    let field_area = Rect::new(area.x, area.y + 2, area.width, field_height);
    let used = render_input_field(frame, field_area, &config);

    let status_y = area.y + 2 + used;
    let status_area = Rect::new(area.x, status_y, area.width, area.bottom().saturating_sub(status_y));

    let status = if app.generation.is_requesting() {
        Some(StatusIndicatorType::spinner(
            "Generating quiz... this can take a while",
            app.tick_count as usize,
        ))
    } else {
        failure.map(|f| match app.generation.failure_detail() {
            Some(detail) => StatusIndicatorType::error(detail, Some(failure_hint(f).to_string())),
            None => StatusIndicatorType::info(failure_hint(f)),
        })
    };

    if let Some(status) = status {
        frame.render_widget(Paragraph::new(render_status_indicator(&status)), status_area);
    }
}

//! Toast overlay
//!
//! The single transient notice, drawn in the bottom-right corner of the
//! chat area while visible. Timing lives in the app; this only draws.

use papo_app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

const BORDER_SIZE: u16 = 2;
const PADDING: u16 = 2;

/// Render the toast overlay, if one is visible.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(text) = app.toast_text() else {
        return;
    };

    let text_cols = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let width = text_cols.saturating_add(BORDER_SIZE + PADDING).min(area.width);
    let height = (1 + BORDER_SIZE).min(area.height);
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    let paragraph = Paragraph::new(format!(" {text} "))
        .style(Style::default().fg(Color::Black).bg(Color::White))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, toast_area);
    frame.render_widget(paragraph, toast_area);
}

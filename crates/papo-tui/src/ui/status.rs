//! Status bar
//!
//! Displays connection status, the endpoint, and the menu hint.

use papo_app::App;
use papo_client::ConnState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let connection_status = match app.connection_state() {
        ConnState::Disconnected => Span::styled("Disconnected", Style::default().fg(Color::Red)),
        ConnState::Connecting => Span::styled("Connecting...", Style::default().fg(Color::Yellow)),
        ConnState::Open => Span::styled(
            "Connected",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ConnState::Closed => Span::styled("Reconnecting...", Style::default().fg(Color::Yellow)),
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        connection_status,
        Span::styled(format!(" | {}", app.endpoint()), Style::default().fg(Color::DarkGray)),
        Span::styled(" | Tab: menu  Esc: quit", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}

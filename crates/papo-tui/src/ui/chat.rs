//! Chat area
//!
//! Displays the transcript, with the welcome placeholder while it still
//! applies. Bodies go through the shared formatter so line breaks and
//! URLs render the same everywhere.

use papo_app::{App, Entry};
use papo_proto::{MessageKind, Segment, segments};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BORDER_SIZE: u16 = 2;
const WELCOME: &str = "Welcome! Messages will appear here.";

/// Render the chat area.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" papo ");

    let mut lines: Vec<Line> = Vec::new();
    if app.transcript().has_welcome() {
        lines.push(Line::from(Span::styled(WELCOME, Style::default().fg(Color::DarkGray))));
    }
    for entry in app.transcript().entries() {
        lines.extend(entry_lines(entry));
    }

    let visible_height = area.height.saturating_sub(BORDER_SIZE) as usize;
    let skip = lines.len().saturating_sub(visible_height);
    let visible_lines: Vec<_> = lines.into_iter().skip(skip).collect();

    let paragraph = Paragraph::new(visible_lines).block(block);

    frame.render_widget(paragraph, area);
}

/// Build the visual lines for one transcript entry.
///
/// [`Segment::Break`] starts a new line; links get their own style. The
/// first line carries the sender prefix.
fn entry_lines(entry: &Entry) -> Vec<Line<'static>> {
    let body_style = match entry.kind {
        MessageKind::System => Style::default().fg(Color::Yellow),
        MessageKind::Sent | MessageKind::Received => Style::default(),
    };
    let link_style =
        Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED);

    let mut lines = Vec::new();
    let mut current = prefix_spans(entry.kind);

    for segment in segments(&entry.body) {
        match segment {
            Segment::Text(text) => current.push(Span::styled(text, body_style)),
            Segment::Link(url) => current.push(Span::styled(url, link_style)),
            Segment::Break => lines.push(Line::from(std::mem::take(&mut current))),
        }
    }
    lines.push(Line::from(current));
    lines
}

fn prefix_spans(kind: MessageKind) -> Vec<Span<'static>> {
    match kind {
        MessageKind::Sent => vec![
            Span::styled("you", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
        ],
        MessageKind::Received => vec![
            Span::styled("<<", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
        ],
        MessageKind::System => vec![
            Span::styled("*", Style::default().fg(Color::Yellow)),
            Span::raw(" "),
        ],
    }
}

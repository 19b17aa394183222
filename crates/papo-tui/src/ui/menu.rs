//! Side menu overlay
//!
//! Command shortcuts and local actions, drawn over the chat area while
//! open.

use papo_app::{App, MenuEntry};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
};

const MENU_WIDTH: u16 = 28;
const BORDER_SIZE: u16 = 2;

/// Render the menu overlay, if it is open.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(selected) = app.menu_selection() else {
        return;
    };

    let entry_count = u16::try_from(MenuEntry::ALL.len()).unwrap_or(u16::MAX);
    let height = entry_count.saturating_add(BORDER_SIZE).min(area.height);
    let width = MENU_WIDTH.min(area.width);
    let menu_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let items: Vec<ListItem> = MenuEntry::ALL
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == selected {
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(format!(" {} ", entry.label()), style))
        })
        .collect();

    let list =
        List::new(items).block(Block::default().borders(Borders::ALL).title(" Menu "));

    frame.render_widget(Clear, menu_area);
    frame.render_widget(list, menu_area);
}

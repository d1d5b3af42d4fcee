// src/ui/widgets/mode_menu.rs

use crate::app::App;
use crate::core::knowledge_base;
use crate::core::models::ScanMode;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};
use strum::IntoEnumIterator;

/// Renders the three mutually-exclusive scan type controls.
///
/// The cursor highlight follows `app.menu_state`; the dot marks the
/// mode that is actually active, which can differ while the user is
/// browsing the menu.
pub fn render_mode_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Scan Types");

    let items: Vec<ListItem> = ScanMode::iter()
        .enumerate()
        .map(|(i, mode)| {
            let info = knowledge_base::mode_info(mode);
            let active = mode == app.session.current_mode;
            let marker = if active {
                Span::styled("● ", Style::default().fg(Color::Green))
            } else {
                Span::raw("  ")
            };
            let line = Line::from(vec![
                marker,
                Span::styled(format!("[{}] ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(info.title),
            ]);
            ListItem::new(line)
        })
        .collect();

    let menu = List::new(items)
        .block(block)
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(menu, area, &mut app.menu_state);
}

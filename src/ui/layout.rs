// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
///
/// Each field is the `Rect` a widget renders into. Computing them in
/// one place keeps the widgets free of sizing arithmetic.
pub struct AppLayout {
    pub header: Rect,
    pub instructions: Rect,
    pub mode_menu: Rect,
    pub info: Rect,
    pub map: Rect,
    pub stats: Rect,
    pub log: Rect,
    pub footer: Rect,
}

/// Creates the complete application layout.
///
/// The frame is split vertically into header, content, and footer. The
/// content row is divided into a left column (instructions, the scan
/// type menu, and the info panel) and a right column (the network map
/// on top of the HUD: stat bars and the activity log).
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(content_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(10),
        ])
        .split(content_chunks[1]);

    AppLayout {
        header: main_chunks[0],
        instructions: left_chunks[0],
        mode_menu: left_chunks[1],
        info: left_chunks[2],
        map: right_chunks[0],
        stats: right_chunks[1],
        log: right_chunks[2],
        footer: main_chunks[2],
    }
}

// src/ui/widgets/info_panel.rs

use crate::app::App;
use crate::core::knowledge_base;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the detail panel for the active scan mode: description,
/// key-feature list (registry order), and the best-use-case line.
pub fn render_info_panel(frame: &mut Frame, app: &App, area: Rect) {
    let info = knowledge_base::mode_info(app.session.current_mode);
    let block = Block::default().borders(Borders::ALL).title(info.title);

    let mut lines = vec![
        Line::from(""),
        Line::from(info.description),
        Line::from(""),
        Line::from("KEY FEATURES:".yellow().bold()),
    ];
    for feature in info.features {
        lines.push(Line::from(vec![Span::raw("- "), Span::raw(*feature)]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("BEST USE CASE: ", Style::new().yellow().bold()),
        Span::raw(info.use_case),
    ]));

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(panel, area);
}

// src/ui/widgets/header.rs

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

/// Renders the tutorial masthead: title plus a one-line subtitle.
pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from("Vulnerability Scanning Tutorial".bold().fg(Color::Cyan)),
        Line::from(Span::styled(
            "Learn about different types of security scans",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let header = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(header, area);
}

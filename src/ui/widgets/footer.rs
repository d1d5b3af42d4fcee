// src/ui/widgets/footer.rs

use ratatui::{
    prelude::*,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer widget, which displays available key actions.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let spans = Line::from(vec![
        Span::styled("↑/↓", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" browse, "),
        Span::styled("Enter", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" select, "),
        Span::styled("1-3", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" quick switch, "),
        Span::styled("Q", Style::new().bold().fg(Color::Yellow)),
        Span::raw(" to quit."),
    ]);

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

// src/ui/widgets/log_view.rs

use crate::app::App;
use crate::core::models::LOG_SEPARATOR;
use crate::core::presentation;
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the activity log panel.
///
/// Shows the trailing window of the session's narration log, oldest
/// visible entry first, each line prompted with "> ". Separator rules
/// are dimmed so the narration blocks read as groups.
pub fn render_log_view(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("ACTIVITY LOG");
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let log_lines: Vec<Line> = presentation::visible_log(&app.session.activity_log)
        .iter()
        .map(|entry| {
            let entry_style = if entry == LOG_SEPARATOR {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled("> ", Style::default().fg(Color::DarkGray)),
                Span::styled(entry.as_str(), entry_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(log_lines), inner_area);
}

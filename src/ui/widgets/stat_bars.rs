// src/ui/widgets/stat_bars.rs

use crate::app::App;
use crate::core::presentation::{self, StatBar};
use crate::ui::token_color;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Renders the HUD gauges: visibility depth and detection accuracy for
/// the active mode. Fill and color come straight from the derivation
/// layer; the label is the percent string drawn over the bar.
pub fn render_stat_bars(frame: &mut Frame, app: &App, area: Rect) {
    let mode = app.session.current_mode;
    let block = Block::default().borders(Borders::ALL).title("HUD");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_bar(
        frame,
        chunks[0],
        chunks[1],
        "VISIBILITY DEPTH",
        presentation::visibility_bar(mode),
    );
    render_bar(
        frame,
        chunks[2],
        chunks[3],
        "DETECTION ACCURACY",
        presentation::detection_bar(mode),
    );
}

fn render_bar(frame: &mut Frame, caption_area: Rect, gauge_area: Rect, caption: &str, bar: StatBar) {
    let caption_widget = Paragraph::new(Span::styled(
        caption.to_string(),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(caption_widget, caption_area);

    let gauge = Gauge::default()
        .ratio(bar.ratio())
        .label(bar.label)
        .gauge_style(Style::default().fg(token_color(bar.color)).bg(Color::Black));
    frame.render_widget(gauge, gauge_area);
}

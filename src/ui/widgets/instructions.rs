// src/ui/widgets/instructions.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the how-to paragraph above the scan type menu.
pub fn render_instructions(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Instructions");
    let text = Paragraph::new(
        "Select each scan type below to learn how it works. Watch the map \
         visualization change to represent the level of visibility each \
         scan type provides.",
    )
    .wrap(Wrap { trim: true })
    .block(block);
    frame.render_widget(text, area);
}

// src/ui/mod.rs

use crate::app::App;
use crate::core::presentation::ColorToken;
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::header::render_header(frame, layout.header);
    widgets::instructions::render_instructions(frame, layout.instructions);
    widgets::mode_menu::render_mode_menu(frame, app, layout.mode_menu);
    widgets::info_panel::render_info_panel(frame, app, layout.info);
    widgets::map_view::render_map_view(frame, app, layout.map);
    widgets::stat_bars::render_stat_bars(frame, app, layout.stats);
    widgets::log_view::render_log_view(frame, app, layout.log);
    widgets::footer::render_footer(frame, layout.footer);
}

/// Maps the abstract color tokens of the derivation layer onto
/// terminal colors. The token set is closed, so this stays exhaustive.
pub(crate) fn token_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Red => Color::Red,
        ColorToken::Amber => Color::Yellow,
        ColorToken::Blue => Color::Blue,
        ColorToken::Green => Color::Green,
    }
}

// src/ui/widgets/map_view.rs

use crate::app::App;
use crate::core::presentation::{self, ColorToken, TargetOverlay, MAP_HEIGHT, MAP_WIDTH};
use crate::ui::token_color;
use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Circle, Context, Line as MapLine, Rectangle},
        Block, BorderType, Borders,
    },
};

const GRID_STEP: f64 = 50.0;

/// Converts from the illustration's top-left origin to the canvas's
/// bottom-left origin.
fn flip(y: f64) -> f64 {
    MAP_HEIGHT - y
}

fn dim_or(obscured: bool, color: Color) -> Color {
    if obscured { Color::DarkGray } else { color }
}

/// Renders the decorative network map with the current mode's style
/// applied: washed out for the credential-less outside view, clear for
/// the authenticated view, and clear with a lock-on outline plus the
/// TARGET-A annotation for the agent view.
pub fn render_map_view(frame: &mut Frame, app: &App, area: Rect) {
    let mode = app.session.current_mode;
    let style = presentation::map_style(mode);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Network Visualization - {} Perspective", mode));
    if let Some(outline) = style.outline {
        block = block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(token_color(outline.color)));
    }

    // Terminal cells have no blur filter, so an obscured map renders in
    // a uniform washed-out gray instead.
    let obscured = style.is_obscured();

    let canvas = Canvas::default()
        .block(block)
        .x_bounds([0.0, MAP_WIDTH])
        .y_bounds([0.0, MAP_HEIGHT])
        .paint(|ctx| {
            draw_grid(ctx);
            ctx.layer();
            draw_terrain(ctx, obscured);
            draw_markers(ctx, obscured);
            if let Some(overlay) = presentation::target_overlay(mode) {
                ctx.layer();
                draw_target_overlay(ctx, &overlay);
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_grid(ctx: &mut Context<'_>) {
    for i in 0..=(MAP_WIDTH / GRID_STEP) as u32 {
        let x = f64::from(i) * GRID_STEP;
        ctx.draw(&MapLine {
            x1: x,
            y1: 0.0,
            x2: x,
            y2: MAP_HEIGHT,
            color: Color::DarkGray,
        });
    }
    for i in 0..=(MAP_HEIGHT / GRID_STEP) as u32 {
        let y = f64::from(i) * GRID_STEP;
        ctx.draw(&MapLine {
            x1: 0.0,
            y1: y,
            x2: MAP_WIDTH,
            y2: y,
            color: Color::DarkGray,
        });
    }
}

fn draw_terrain(ctx: &mut Context<'_>, obscured: bool) {
    let feature = dim_or(obscured, Color::Cyan);

    // Hill in the north-west, building block in the center.
    ctx.draw(&Circle {
        x: 150.0,
        y: flip(100.0),
        radius: 40.0,
        color: feature,
    });
    ctx.draw(&Rectangle {
        x: 300.0,
        y: flip(230.0),
        width: 100.0,
        height: 80.0,
        color: feature,
    });

    // Diamond outcrop in the south-east.
    let diamond = [
        (450.0, 250.0),
        (500.0, 200.0),
        (550.0, 250.0),
        (500.0, 300.0),
        (450.0, 250.0),
    ];
    for pair in diamond.windows(2) {
        ctx.draw(&MapLine {
            x1: pair[0].0,
            y1: flip(pair[0].1),
            x2: pair[1].0,
            y2: flip(pair[1].1),
            color: feature,
        });
    }

    // River winding across the south of the map.
    let river = dim_or(obscured, Color::Green);
    let path = [
        (50.0, 300.0),
        (200.0, 285.0),
        (350.0, 300.0),
        (450.0, 310.0),
        (550.0, 300.0),
    ];
    for pair in path.windows(2) {
        ctx.draw(&MapLine {
            x1: pair[0].0,
            y1: flip(pair[0].1),
            x2: pair[1].0,
            y2: flip(pair[1].1),
            color: river,
        });
    }
}

fn draw_markers(ctx: &mut Context<'_>, obscured: bool) {
    let markers = [
        ((150.0, 100.0), ColorToken::Red),
        ((350.0, 190.0), ColorToken::Blue),
        ((500.0, 225.0), ColorToken::Amber),
    ];
    for ((x, y), token) in markers {
        ctx.draw(&Circle {
            x,
            y: flip(y),
            radius: 5.0,
            color: dim_or(obscured, token_color(token)),
        });
    }
}

fn draw_target_overlay(ctx: &mut Context<'_>, overlay: &TargetOverlay) {
    let (x, y) = overlay.anchor;

    ctx.draw(&Circle {
        x,
        y: flip(y),
        radius: overlay.ring_radius,
        color: Color::Green,
    });
    // Leader line from the top of the ring to the map's upper edge,
    // with the label next to it.
    ctx.draw(&MapLine {
        x1: x,
        y1: flip(y) + overlay.ring_radius,
        x2: x,
        y2: MAP_HEIGHT,
        color: Color::Green,
    });
    ctx.print(x + 5.0, flip(15.0), Line::from(overlay.label.green()));
}

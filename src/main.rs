// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

mod app;
mod core;
mod logging;
mod ui;

use app::App;
use crate::core::models::ScanMode;

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new();

    // Synchronous draw/poll loop. All state changes happen inside
    // `handle_events`, one key press at a time.
    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app)?;
        }
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}

/// Single event handler: every key press maps to one `App` method.
///
/// Digits jump straight to a mode, arrows only move the menu cursor,
/// and Enter activates whatever the cursor is on.
fn handle_events(app: &mut App) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                KeyCode::Char('1') => app.select_mode(ScanMode::Unauthenticated),
                KeyCode::Char('2') => app.select_mode(ScanMode::Authenticated),
                KeyCode::Char('3') => app.select_mode(ScanMode::Agent),
                KeyCode::Up => app.menu_up(),
                KeyCode::Down => app.menu_down(),
                KeyCode::Enter => app.select_highlighted(),
                _ => {}
            }
        }
    }
    Ok(())
}

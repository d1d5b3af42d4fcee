// src/app.rs

use ratatui::widgets::ListState;
use strum::IntoEnumIterator;

use crate::core::models::{ScanMode, Session};

/// Top-level application state: the tutorial session value, the menu
/// cursor, and the quit flag.
///
/// The menu cursor is deliberately independent of the active mode, so
/// the user can move over the menu without triggering transitions.
/// Activation (`Enter` or a digit shortcut) is what runs the reducer.
pub struct App {
    pub should_quit: bool,
    pub session: Session,
    pub menu_state: ListState,
}

impl App {
    pub fn new() -> Self {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));
        Self {
            should_quit: false,
            session: Session::new(),
            menu_state,
        }
    }

    pub fn menu_up(&mut self) {
        let selected = self.menu_state.selected().unwrap_or(0);
        self.menu_state.select(Some(selected.saturating_sub(1)));
    }

    pub fn menu_down(&mut self) {
        let last = ScanMode::iter().count() - 1;
        let selected = self.menu_state.selected().unwrap_or(0);
        self.menu_state.select(Some((selected + 1).min(last)));
    }

    /// Activates the mode currently under the menu cursor.
    pub fn select_highlighted(&mut self) {
        if let Some(mode) = self
            .menu_state
            .selected()
            .and_then(|i| ScanMode::iter().nth(i))
        {
            self.select_mode(mode);
        }
    }

    /// Runs the transition reducer for `mode` and snaps the menu cursor
    /// onto the newly active entry.
    pub fn select_mode(&mut self, mode: ScanMode) {
        self.session = self.session.transition(mode);
        if let Some(pos) = ScanMode::iter().position(|m| m == mode) {
            self.menu_state.select(Some(pos));
        }
        tracing::info!(mode = %mode, "scan mode selected");
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_mode_runs_the_reducer_and_moves_the_cursor() {
        let mut app = App::new();
        app.select_mode(ScanMode::Agent);

        assert_eq!(app.session.current_mode, ScanMode::Agent);
        assert_eq!(app.session.activity_log.len(), 6);
        assert_eq!(app.menu_state.selected(), Some(2));
    }

    #[test]
    fn cursor_movement_alone_never_transitions() {
        let mut app = App::new();
        app.menu_down();
        app.menu_down();
        app.menu_up();

        assert_eq!(app.session.current_mode, ScanMode::Unauthenticated);
        assert_eq!(app.session.activity_log.len(), 2);
        assert_eq!(app.menu_state.selected(), Some(1));
    }

    #[test]
    fn cursor_clamps_to_the_menu_bounds() {
        let mut app = App::new();
        app.menu_up();
        assert_eq!(app.menu_state.selected(), Some(0));

        for _ in 0..10 {
            app.menu_down();
        }
        assert_eq!(app.menu_state.selected(), Some(2));
    }

    #[test]
    fn enter_activates_the_highlighted_mode() {
        let mut app = App::new();
        app.menu_down();
        app.select_highlighted();

        assert_eq!(app.session.current_mode, ScanMode::Authenticated);
        assert_eq!(app.session.activity_log.len(), 6);
    }

    #[test]
    fn quit_sets_the_flag() {
        let mut app = App::new();
        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }
}

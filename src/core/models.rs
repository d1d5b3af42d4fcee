// src/core/models.rs

use strum::{Display, EnumIter};

use crate::core::knowledge_base;

// --- Core Data Models ---

/// The three scan categories the tutorial walks through.
///
/// The set is closed: every lookup and derivation in the crate matches
/// exhaustively over these variants, so an out-of-range mode cannot be
/// constructed. `Display` renders the bare variant name, which the map
/// caption uses directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ScanMode {
    Unauthenticated,
    Authenticated,
    Agent,
}

/// The two lines every fresh session starts with.
pub const WELCOME_LINES: [&str; 2] = [
    "Welcome to Vulnerability Scanning Tutorial",
    "Select a scan type to learn more",
];

/// Horizontal rule separating narration blocks in the activity log.
pub const LOG_SEPARATOR: &str = "─────────────────────────────";

/// The only mutable entity in the application.
///
/// `activity_log` is append-only for the lifetime of the session; it is
/// never truncated, the log widget just windows it. A session lives and
/// dies with the process.
#[derive(Debug, Clone)]
pub struct Session {
    pub current_mode: ScanMode,
    pub activity_log: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            current_mode: ScanMode::Unauthenticated,
            activity_log: WELCOME_LINES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Reducer for a mode selection: returns the next session value.
    ///
    /// Appends the four-line narration block (separator, title,
    /// description, use case) for the requested mode and makes it
    /// current. Re-selecting the already-active mode is not
    /// short-circuited: the block is appended again, matching the
    /// tutorial's "every selection narrates" behavior.
    #[must_use]
    pub fn transition(&self, requested: ScanMode) -> Self {
        let info = knowledge_base::mode_info(requested);
        let mut next = self.clone();
        next.current_mode = requested;
        next.activity_log.push(LOG_SEPARATOR.to_string());
        next.activity_log.push(format!("Switched to: {}", info.title));
        next.activity_log.push(format!("Description: {}", info.description));
        next.activity_log.push(format!("Use Case: {}", info.use_case));
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_unauthenticated_with_welcome_lines() {
        let session = Session::new();
        assert_eq!(session.current_mode, ScanMode::Unauthenticated);
        assert_eq!(
            session.activity_log,
            vec![
                "Welcome to Vulnerability Scanning Tutorial".to_string(),
                "Select a scan type to learn more".to_string(),
            ]
        );
    }

    #[test]
    fn transition_appends_exactly_four_lines() {
        let session = Session::new();
        let next = session.transition(ScanMode::Authenticated);

        assert_eq!(next.current_mode, ScanMode::Authenticated);
        assert_eq!(next.activity_log.len(), session.activity_log.len() + 4);
        assert_eq!(next.activity_log[2], LOG_SEPARATOR);
        assert_eq!(next.activity_log[3], "Switched to: Authenticated Scan");
        assert_eq!(
            next.activity_log[4],
            "Description: Uses valid credentials to perform deeper system analysis. Better visibility and accuracy."
        );
        assert_eq!(
            next.activity_log[5],
            "Use Case: Internal security audits and compliance"
        );
    }

    #[test]
    fn transition_never_rewrites_existing_entries() {
        let session = Session::new().transition(ScanMode::Agent);
        let next = session.transition(ScanMode::Unauthenticated);
        assert_eq!(
            next.activity_log[..session.activity_log.len()],
            session.activity_log[..]
        );
    }

    #[test]
    fn reselecting_active_mode_still_appends() {
        let session = Session::new();
        let next = session.transition(ScanMode::Unauthenticated);
        assert_eq!(next.current_mode, ScanMode::Unauthenticated);
        assert_eq!(next.activity_log.len(), 6);
        assert_eq!(next.activity_log[3], "Switched to: Unauthenticated Scan");
    }

    #[test]
    fn tutorial_walkthrough_scenario() {
        // start -> Authenticated -> Agent -> Authenticated
        let session = Session::new()
            .transition(ScanMode::Authenticated)
            .transition(ScanMode::Agent)
            .transition(ScanMode::Authenticated);

        assert_eq!(session.current_mode, ScanMode::Authenticated);
        assert_eq!(session.activity_log.len(), 14);
        assert_eq!(session.activity_log[7], "Switched to: Agent-Based Scan");
        assert_eq!(session.activity_log[11], "Switched to: Authenticated Scan");
    }

    #[test]
    fn mode_display_renders_variant_name() {
        assert_eq!(ScanMode::Unauthenticated.to_string(), "Unauthenticated");
        assert_eq!(ScanMode::Agent.to_string(), "Agent");
    }
}

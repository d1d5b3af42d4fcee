// src/core/presentation.rs
//
// Pure derivation of rendering parameters from the current scan mode.
// Nothing here touches ratatui: the functions return small value types
// that the ui layer translates into terminal styling. Every function is
// total and keyed only on `ScanMode`.

use crate::core::models::ScanMode;

/// Logical coordinate space of the network map illustration.
pub const MAP_WIDTH: f64 = 600.0;
pub const MAP_HEIGHT: f64 = 400.0;

/// Fixed track width the stat-bar fills are measured against.
pub const STAT_TRACK_WIDTH: u16 = 200;

/// How many trailing activity-log entries the log panel shows.
pub const LOG_WINDOW: usize = 8;

/// Abstract color names used by the derivation tables. The ui layer
/// owns the mapping to concrete terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Red,
    Amber,
    Blue,
    Green,
}

/// Highlight border drawn around the map in agent mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outline {
    pub width_px: u8,
    pub color: ColorToken,
}

/// How the map illustration should be presented for a mode.
///
/// `Default` is the empty style (no blur, full opacity, no outline).
/// The closed `ScanMode` enum means `map_style` never needs it as a
/// fallback; it exists for callers that build styles incrementally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapStyle {
    pub blur_px: Option<u8>,
    pub opacity: f64,
    pub outline: Option<Outline>,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            blur_px: None,
            opacity: 1.0,
            outline: None,
        }
    }
}

impl MapStyle {
    /// True when the map should render washed out (the unauthenticated
    /// "outsider" view).
    pub fn is_obscured(&self) -> bool {
        self.blur_px.is_some() || self.opacity < 1.0
    }
}

/// One labeled stat bar: a fill width out of [`STAT_TRACK_WIDTH`], the
/// fill color, and the percentage caption drawn over the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBar {
    pub fill: u16,
    pub color: ColorToken,
    pub label: &'static str,
}

impl StatBar {
    /// Fill as a ratio of the track, for gauge-style rendering.
    pub fn ratio(&self) -> f64 {
        f64::from(self.fill) / f64::from(STAT_TRACK_WIDTH)
    }
}

/// The target-lock annotation drawn on the map in agent mode: a ring
/// around the anchor point with a leader line running to the label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetOverlay {
    pub label: &'static str,
    pub anchor: (f64, f64),
    pub ring_radius: f64,
}

/// Map presentation per mode: the unauthenticated view is blurred and
/// faded, the authenticated view is clear, and the agent view is clear
/// with a green lock-on outline.
pub fn map_style(mode: ScanMode) -> MapStyle {
    match mode {
        ScanMode::Unauthenticated => MapStyle {
            blur_px: Some(8),
            opacity: 0.3,
            outline: None,
        },
        ScanMode::Authenticated => MapStyle {
            blur_px: None,
            opacity: 1.0,
            outline: None,
        },
        ScanMode::Agent => MapStyle {
            blur_px: None,
            opacity: 1.0,
            outline: Some(Outline {
                width_px: 3,
                color: ColorToken::Green,
            }),
        },
    }
}

/// The VISIBILITY DEPTH bar.
pub fn visibility_bar(mode: ScanMode) -> StatBar {
    match mode {
        ScanMode::Unauthenticated => StatBar {
            fill: 60,
            color: ColorToken::Red,
            label: "30%",
        },
        ScanMode::Authenticated => StatBar {
            fill: 150,
            color: ColorToken::Blue,
            label: "75%",
        },
        ScanMode::Agent => StatBar {
            fill: 200,
            color: ColorToken::Green,
            label: "100%",
        },
    }
}

/// The DETECTION ACCURACY bar.
pub fn detection_bar(mode: ScanMode) -> StatBar {
    match mode {
        ScanMode::Unauthenticated => StatBar {
            fill: 80,
            color: ColorToken::Amber,
            label: "40%",
        },
        ScanMode::Authenticated => StatBar {
            fill: 170,
            color: ColorToken::Blue,
            label: "85%",
        },
        ScanMode::Agent => StatBar {
            fill: 200,
            color: ColorToken::Green,
            label: "100%",
        },
    }
}

/// The TARGET-A lock-on annotation, present only in agent mode.
pub fn target_overlay(mode: ScanMode) -> Option<TargetOverlay> {
    match mode {
        ScanMode::Agent => Some(TargetOverlay {
            label: "TARGET-A",
            anchor: (150.0, 100.0),
            ring_radius: 50.0,
        }),
        ScanMode::Unauthenticated | ScanMode::Authenticated => None,
    }
}

/// The slice of the activity log the log panel displays: the last
/// [`LOG_WINDOW`] entries, oldest visible entry first.
pub fn visible_log(log: &[String]) -> &[String] {
    let start = log.len().saturating_sub(LOG_WINDOW);
    &log[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_style_table() {
        let style = map_style(ScanMode::Unauthenticated);
        assert_eq!(style.blur_px, Some(8));
        assert_eq!(style.opacity, 0.3);
        assert_eq!(style.outline, None);
        assert!(style.is_obscured());

        let style = map_style(ScanMode::Authenticated);
        assert_eq!(style, MapStyle::default());
        assert!(!style.is_obscured());

        let style = map_style(ScanMode::Agent);
        assert_eq!(style.blur_px, None);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(
            style.outline,
            Some(Outline {
                width_px: 3,
                color: ColorToken::Green
            })
        );
        assert!(!style.is_obscured());
    }

    #[test]
    fn visibility_bar_table() {
        assert_eq!(
            visibility_bar(ScanMode::Unauthenticated),
            StatBar { fill: 60, color: ColorToken::Red, label: "30%" }
        );
        assert_eq!(
            visibility_bar(ScanMode::Authenticated),
            StatBar { fill: 150, color: ColorToken::Blue, label: "75%" }
        );
        assert_eq!(
            visibility_bar(ScanMode::Agent),
            StatBar { fill: 200, color: ColorToken::Green, label: "100%" }
        );
    }

    #[test]
    fn detection_bar_table() {
        assert_eq!(
            detection_bar(ScanMode::Unauthenticated),
            StatBar { fill: 80, color: ColorToken::Amber, label: "40%" }
        );
        assert_eq!(
            detection_bar(ScanMode::Authenticated),
            StatBar { fill: 170, color: ColorToken::Blue, label: "85%" }
        );
        assert_eq!(
            detection_bar(ScanMode::Agent),
            StatBar { fill: 200, color: ColorToken::Green, label: "100%" }
        );
    }

    #[test]
    fn full_bars_cover_the_whole_track() {
        assert_eq!(visibility_bar(ScanMode::Agent).ratio(), 1.0);
        assert_eq!(detection_bar(ScanMode::Agent).ratio(), 1.0);
        assert_eq!(visibility_bar(ScanMode::Authenticated).ratio(), 0.75);
    }

    #[test]
    fn target_overlay_only_in_agent_mode() {
        assert_eq!(target_overlay(ScanMode::Unauthenticated), None);
        assert_eq!(target_overlay(ScanMode::Authenticated), None);

        let overlay = target_overlay(ScanMode::Agent).unwrap();
        assert_eq!(overlay.label, "TARGET-A");
        assert_eq!(overlay.anchor, (150.0, 100.0));
        assert_eq!(overlay.ring_radius, 50.0);
    }

    #[test]
    fn visible_log_windows_the_tail() {
        let log: Vec<String> = (0..14).map(|i| format!("entry {i}")).collect();
        let window = visible_log(&log);
        assert_eq!(window.len(), LOG_WINDOW);
        assert_eq!(window.first().unwrap(), "entry 6");
        assert_eq!(window.last().unwrap(), "entry 13");
    }

    #[test]
    fn visible_log_shows_short_logs_whole() {
        let log: Vec<String> = (0..3).map(|i| format!("entry {i}")).collect();
        assert_eq!(visible_log(&log), &log[..]);
        assert_eq!(visible_log(&[]), &[] as &[String]);
    }
}

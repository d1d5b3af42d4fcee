//! Static, read-only registry of the tutorial's scan modes.
//!
//! Each entry carries everything the interface needs to present a mode:
//! a display title, a prose description, the key-feature bullet list,
//! and the best-use-case line. Keeping this data-driven means the
//! narrative content can be revised without touching any rendering or
//! transition code.

use crate::core::models::ScanMode;

/// Display metadata for one scan mode.
///
/// Feature order is display order; the lists are shown as-is.
pub struct ScanModeInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub use_case: &'static str,
}

static UNAUTHENTICATED: ScanModeInfo = ScanModeInfo {
    title: "Unauthenticated Scan",
    description: "External perspective scanning without credentials. Limited visibility into system internals.",
    features: &[
        "No credentials required",
        "Scans from outside the network",
        "Detects externally visible vulnerabilities",
        "Cannot see internal configurations",
        "Limited depth of analysis",
    ],
    use_case: "Simulates an external attacker's view",
};

static AUTHENTICATED: ScanModeInfo = ScanModeInfo {
    title: "Authenticated Scan",
    description: "Uses valid credentials to perform deeper system analysis. Better visibility and accuracy.",
    features: &[
        "Requires valid credentials",
        "Access to system configurations",
        "Detects missing patches",
        "Checks installed software versions",
        "More accurate results",
    ],
    use_case: "Internal security audits and compliance",
};

static AGENT: ScanModeInfo = ScanModeInfo {
    title: "Agent-Based Scan",
    description: "Lightweight software agent installed on target systems. Continuous monitoring and real-time data.",
    features: &[
        "Agent installed on endpoints",
        "Real-time vulnerability detection",
        "Minimal network traffic",
        "Offline scanning capability",
        "Comprehensive system access",
    ],
    use_case: "Continuous security monitoring and compliance",
};

/// Retrieves the registry entry for a scan mode.
///
/// Total by construction: the match is exhaustive over the closed
/// `ScanMode` enum, so there is no miss case to handle.
pub fn mode_info(mode: ScanMode) -> &'static ScanModeInfo {
    match mode {
        ScanMode::Unauthenticated => &UNAUTHENTICATED,
        ScanMode::Authenticated => &AUTHENTICATED,
        ScanMode::Agent => &AGENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_mode_has_a_full_entry() {
        for mode in ScanMode::iter() {
            let info = mode_info(mode);
            assert!(!info.title.is_empty());
            assert!(!info.description.is_empty());
            assert_eq!(info.features.len(), 5);
            assert!(!info.use_case.is_empty());
        }
    }

    #[test]
    fn titles_match_their_modes() {
        assert_eq!(mode_info(ScanMode::Unauthenticated).title, "Unauthenticated Scan");
        assert_eq!(mode_info(ScanMode::Authenticated).title, "Authenticated Scan");
        assert_eq!(mode_info(ScanMode::Agent).title, "Agent-Based Scan");
    }

    #[test]
    fn feature_order_is_preserved() {
        let info = mode_info(ScanMode::Unauthenticated);
        assert_eq!(info.features[0], "No credentials required");
        assert_eq!(info.features[4], "Limited depth of analysis");

        let info = mode_info(ScanMode::Agent);
        assert_eq!(info.features[0], "Agent installed on endpoints");
        assert_eq!(info.features[3], "Offline scanning capability");
    }

    #[test]
    fn use_cases_match_the_tutorial_copy() {
        assert_eq!(
            mode_info(ScanMode::Unauthenticated).use_case,
            "Simulates an external attacker's view"
        );
        assert_eq!(
            mode_info(ScanMode::Agent).use_case,
            "Continuous security monitoring and compliance"
        );
    }
}

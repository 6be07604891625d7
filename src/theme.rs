//! Light/dark theme state.
//!
//! Two states, one transition. The initial mode comes from the terminal's
//! ambient color signal (the `COLORFGBG` convention); a missing or
//! unreadable signal falls back to dark without erroring. Nothing is
//! persisted — a fresh run re-derives the ambient mode.

use serde::Serialize;

// ============================================================================
// MODE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn opposite(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

// ============================================================================
// STATE
// ============================================================================

/// The single piece of theme state: the current mode.
///
/// Read and written only on the UI thread; consumers observe the mode
/// after each toggle and pick their palette from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    /// Session-local state seeded from the host environment.
    pub fn from_ambient() -> Self {
        Self::new(ambient_mode(std::env::var("COLORFGBG").ok().as_deref()))
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip to the opposite mode. Total — defined in both states, always
    /// succeeds. Any visual consequence belongs to the presentation layer.
    pub fn toggle(&mut self) {
        self.mode = self.mode.opposite();
    }
}

// ============================================================================
// AMBIENT DETECTION
// ============================================================================

/// Interpret the `COLORFGBG` convention: `"<fg>;<bg>"`, sometimes
/// `"<fg>;<default>;<bg>"` — the last field is the background color
/// index. 7 and 9..=15 are light backgrounds; everything else, including
/// an absent or unparseable value, reads as dark.
pub fn ambient_mode(colorfgbg: Option<&str>) -> ThemeMode {
    let Some(raw) = colorfgbg else {
        return ThemeMode::Dark;
    };
    let Some(bg) = raw.rsplit(';').next().and_then(|s| s.trim().parse::<u8>().ok()) else {
        return ThemeMode::Dark;
    };
    match bg {
        7 | 9..=15 => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let mut state = ThemeState::new(mode);
            state.toggle();
            assert_eq!(state.mode(), mode.opposite());
            state.toggle();
            assert_eq!(state.mode(), mode);
        }
    }

    #[test]
    fn missing_ambient_signal_defaults_to_dark() {
        assert_eq!(ambient_mode(None), ThemeMode::Dark);
    }

    #[test]
    fn black_background_reads_as_dark() {
        assert_eq!(ambient_mode(Some("15;0")), ThemeMode::Dark);
    }

    #[test]
    fn white_background_reads_as_light() {
        assert_eq!(ambient_mode(Some("0;15")), ThemeMode::Light);
        assert_eq!(ambient_mode(Some("0;default;7")), ThemeMode::Light);
    }

    #[test]
    fn garbage_signal_defaults_to_dark() {
        assert_eq!(ambient_mode(Some("not-a-color")), ThemeMode::Dark);
        assert_eq!(ambient_mode(Some("")), ThemeMode::Dark);
    }

    #[test]
    fn opposite_covers_both_modes() {
        assert_eq!(ThemeMode::Light.opposite(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.opposite(), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}

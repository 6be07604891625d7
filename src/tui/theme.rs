//! Mode-dependent palette.
//!
//! Every style the view uses is derived from the active [`ThemeMode`]
//! here; view code never hardcodes a color, so the toggle repaints the
//! whole tree consistently.

use ratatui::style::{Color, Modifier, Style};

use crate::theme::ThemeMode;

/// The styles one render pass needs, resolved for a single mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Whole-frame background and default text.
    pub base: Style,
    /// App name / screen title.
    pub title: Style,
    /// Section headings.
    pub heading: Style,
    /// Body text.
    pub body: Style,
    /// De-emphasized metadata (locations, dates, help line).
    pub dim: Style,
    /// Interactive hints (keybindings, links, the toggle icon).
    pub accent: Style,
    /// Focused list row.
    pub cursor: Style,
}

/// Dark palette: light text on a black background.
pub const DARK: Palette = Palette {
    base: Style::new().fg(Color::Gray).bg(Color::Black),
    title: Style::new()
        .fg(Color::White)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD),
    heading: Style::new()
        .fg(Color::White)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD),
    body: Style::new().fg(Color::Gray).bg(Color::Black),
    dim: Style::new().fg(Color::DarkGray).bg(Color::Black),
    accent: Style::new().fg(Color::Cyan).bg(Color::Black),
    cursor: Style::new().add_modifier(Modifier::REVERSED),
};

/// Light palette: dark text on a white background.
pub const LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Black).bg(Color::White),
    title: Style::new()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD),
    heading: Style::new()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD),
    body: Style::new().fg(Color::Black).bg(Color::White),
    dim: Style::new().fg(Color::Gray).bg(Color::White),
    accent: Style::new().fg(Color::Blue).bg(Color::White),
    cursor: Style::new().add_modifier(Modifier::REVERSED),
};

impl Palette {
    /// The palette for a theme mode. Total over both modes.
    pub const fn for_mode(mode: ThemeMode) -> Palette {
        match mode {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_invert_base_colors() {
        assert_eq!(DARK.base.bg, Some(Color::Black));
        assert_eq!(LIGHT.base.bg, Some(Color::White));
        assert_ne!(DARK.base.fg, LIGHT.base.fg);
    }

    #[test]
    fn for_mode_selects_the_matching_palette() {
        assert_eq!(Palette::for_mode(ThemeMode::Dark), DARK);
        assert_eq!(Palette::for_mode(ThemeMode::Light), LIGHT);
    }

    #[test]
    fn toggling_mode_changes_the_palette() {
        let mode = ThemeMode::Dark;
        assert_ne!(Palette::for_mode(mode), Palette::for_mode(mode.opposite()));
    }

    #[test]
    fn titles_are_bold_in_both_modes() {
        assert!(DARK.title.add_modifier.contains(Modifier::BOLD));
        assert!(LIGHT.title.add_modifier.contains(Modifier::BOLD));
    }
}

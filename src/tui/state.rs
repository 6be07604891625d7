//! TUI state algebra: pure types, zero effects.
//!
//! Screen variants carry only per-screen transient state (cursor
//! positions). Shared data — theme, language, strings, career table,
//! the toggle-icon animation — lives in [`App`]. The transition function
//! and the rendering layer both program against these types.

use chrono::{Local, NaiveDate};
use crossterm::event::KeyEvent;

use crate::career::CareerTable;
use crate::error::Result;
use crate::locale::{Lang, Strings};
use crate::render;
use crate::theme::{ThemeMode, ThemeState};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel: a key reader thread sends
/// `Key` variants, a ticker thread sends `Tick` to drive the toggle-icon
/// animation and periodic redraw.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Animation/redraw heartbeat.
    Tick,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen — carries per-screen navigation state.
    pub screen: Screen,

    /// Theme mode. Seeded from ambient preference, flipped by toggle,
    /// never persisted.
    pub theme: ThemeState,

    /// Active language and its loaded string bundle.
    pub lang: Lang,
    pub strings: Strings,

    /// The career configuration, validated at startup.
    pub career: CareerTable,

    /// Playback state of the sun↔moon toggle icon.
    pub icon: IconAnimation,

    /// Refreshed by the event loop before each draw, so the ongoing
    /// job's tenure is evaluated at render time.
    pub today: NaiveDate,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Build the app, eagerly validating the career table against the
    /// localized job list so render-time lookups cannot fail.
    pub fn new(lang: Lang, theme: ThemeState) -> Result<Self> {
        let strings = Strings::load(lang)?;
        let career = CareerTable::builtin()?;
        let today = Local::now().date_naive();
        render::career_entries(&career, &strings, today)?;

        Ok(App {
            screen: Screen::Home,
            icon: IconAnimation::resting(theme.mode()),
            theme,
            lang,
            strings,
            career,
            today,
            should_quit: false,
        })
    }

    /// The theme mutator: flip the mode and start the icon animation
    /// toward the other end.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.icon.trigger();
    }

    /// Switch to the other language and reload its string bundle.
    pub fn switch_language(&mut self) -> Result<()> {
        let next = self.lang.other();
        let strings = Strings::load(next)?;
        render::career_entries(&self.career, &strings, self.today)?;
        self.lang = next;
        self.strings = strings;
        Ok(())
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Introduction, about text and principles.
    Home,

    /// Browsable career list.
    Career {
        /// Focused job index.
        cursor: usize,
    },

    /// Detail view for a single job.
    JobDetail {
        /// Index into the localized job list.
        index: usize,
    },

    /// Social links and the tech stack.
    Links { cursor: usize },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home
    }
}

impl Screen {
    /// Career list with the cursor at the most recent job.
    pub fn career() -> Self {
        Screen::Career { cursor: 0 }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up in a list.
    MoveUp,
    /// Move cursor down in a list.
    MoveDown,
    /// Drill into detail / enter a section.
    Enter,
    /// Navigate back toward Home.
    Back,
    /// Jump to a section by number (1-3).
    NumberKey(u8),
    /// Flip light/dark mode.
    ToggleTheme,
    /// Switch between the available languages.
    SwitchLanguage,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition. The effects boundary interprets
/// it: `Screen` replaces the current screen, the app-level variants
/// mutate shared state, `Quit` exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Screen(Screen),
    ToggleTheme,
    SwitchLanguage,
    Quit,
}

// ============================================================================
// ICON ANIMATION
// ============================================================================

/// Frames of the sun↔moon toggle icon, sun end first.
pub const ICON_FRAMES: [&str; 5] = ["☀", "☼", "◐", "☽", "☾"];

/// Playback state for the toggle icon.
///
/// One-shot player: frames advance on ticks and clamp at either end.
/// A toggle while the animation is in flight reverses its direction
/// instead of restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconAnimation {
    /// Index into [`ICON_FRAMES`].
    pub frame: usize,
    /// +1 toward the moon end, -1 toward the sun end.
    pub direction: i8,
    pub playing: bool,
}

impl IconAnimation {
    /// Resting at the end matching the given mode, direction primed
    /// toward the opposite end.
    pub fn resting(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => IconAnimation {
                frame: 0,
                direction: 1,
                playing: false,
            },
            ThemeMode::Dark => IconAnimation {
                frame: ICON_FRAMES.len() - 1,
                direction: -1,
                playing: false,
            },
        }
    }

    /// Start playback, or reverse it when already in flight.
    pub fn trigger(&mut self) {
        if self.playing {
            self.direction = -self.direction;
        } else {
            self.playing = true;
        }
    }

    /// Advance one frame; stop and re-prime the direction at either end.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let last = ICON_FRAMES.len() - 1;
        let next = self.frame as i64 + i64::from(self.direction);
        if next <= 0 {
            self.frame = 0;
            self.direction = 1;
            self.playing = false;
        } else if next as usize >= last {
            self.frame = last;
            self.direction = -1;
            self.playing = false;
        } else {
            self.frame = next as usize;
        }
    }

    pub fn glyph(&self) -> &'static str {
        ICON_FRAMES[self.frame]
    }
}

// ============================================================================
// TESTS
// ============================================================================

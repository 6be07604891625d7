//! Pure state transitions: (Screen, Action) → Transition.
//!
//! Fully testable without a terminal. Theme and language toggles work
//! from every screen; the remaining actions are per-screen. Unhandled
//! actions return the current screen unchanged (no-op).

use crate::locale::Strings;
use crate::profile;

use super::state::{Action, Screen, Transition};

/// Pure state transition function.
///
/// `strings` is read only for list lengths; the effects boundary
/// interprets the returned transition.
pub fn update(screen: Screen, action: &Action, strings: &Strings) -> Transition {
    // App-level actions, valid everywhere
    match action {
        Action::Quit => return Transition::Quit,
        Action::ToggleTheme => return Transition::ToggleTheme,
        Action::SwitchLanguage => return Transition::SwitchLanguage,
        Action::NumberKey(1) => return Transition::Screen(Screen::Home),
        Action::NumberKey(2) => return Transition::Screen(Screen::career()),
        Action::NumberKey(3) => return Transition::Screen(Screen::Links { cursor: 0 }),
        _ => {}
    }

    match screen {
        Screen::Home => update_home(action),
        Screen::Career { cursor } => update_career(cursor, action, strings),
        Screen::JobDetail { index } => update_job_detail(index, action),
        Screen::Links { cursor } => update_links(cursor, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Home: Enter opens the career section.
fn update_home(action: &Action) -> Transition {
    match action {
        Action::Enter => Transition::Screen(Screen::career()),
        _ => Transition::Screen(Screen::Home),
    }
}

/// Career: cursor movement over the job list, drill-down, back to Home.
fn update_career(cursor: usize, action: &Action, strings: &Strings) -> Transition {
    let len = strings.career.jobs.len();

    match action {
        Action::MoveUp => Transition::Screen(Screen::Career {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => {
            let cursor = if len == 0 { 0 } else { (cursor + 1).min(len - 1) };
            Transition::Screen(Screen::Career { cursor })
        }
        Action::Enter => {
            if cursor < len {
                Transition::Screen(Screen::JobDetail { index: cursor })
            } else {
                Transition::Screen(Screen::Career { cursor })
            }
        }
        Action::Back => Transition::Screen(Screen::Home),
        _ => Transition::Screen(Screen::Career { cursor }),
    }
}

/// JobDetail: back returns to the list at the same row.
fn update_job_detail(index: usize, action: &Action) -> Transition {
    match action {
        Action::Back | Action::Enter => Transition::Screen(Screen::Career { cursor: index }),
        _ => Transition::Screen(Screen::JobDetail { index }),
    }
}

/// Links: cursor over socials + techs, back to Home.
fn update_links(cursor: usize, action: &Action) -> Transition {
    let len = profile::SOCIAL_MEDIAS.len() + profile::USED_TECHS.len();

    match action {
        Action::MoveUp => Transition::Screen(Screen::Links {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => Transition::Screen(Screen::Links {
            cursor: (cursor + 1).min(len - 1),
        }),
        Action::Back => Transition::Screen(Screen::Home),
        _ => Transition::Screen(Screen::Links { cursor }),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Lang, Strings};

    fn strings() -> Strings {
        Strings::load(Lang::En).unwrap()
    }

    // -- App-level actions --

    #[test]
    fn quit_works_from_every_screen() {
        let screens = [
            Screen::Home,
            Screen::career(),
            Screen::JobDetail { index: 1 },
            Screen::Links { cursor: 0 },
        ];
        for screen in screens {
            assert_eq!(update(screen, &Action::Quit, &strings()), Transition::Quit);
        }
    }

    #[test]
    fn theme_toggle_works_from_every_screen() {
        let screens = [Screen::Home, Screen::career(), Screen::Links { cursor: 2 }];
        for screen in screens {
            assert_eq!(
                update(screen, &Action::ToggleTheme, &strings()),
                Transition::ToggleTheme
            );
        }
    }

    #[test]
    fn language_switch_is_app_level() {
        assert_eq!(
            update(Screen::career(), &Action::SwitchLanguage, &strings()),
            Transition::SwitchLanguage
        );
    }

    #[test]
    fn number_keys_jump_between_sections() {
        let s = strings();
        assert_eq!(
            update(Screen::career(), &Action::NumberKey(1), &s),
            Transition::Screen(Screen::Home)
        );
        assert_eq!(
            update(Screen::Home, &Action::NumberKey(2), &s),
            Transition::Screen(Screen::career())
        );
        assert_eq!(
            update(Screen::Home, &Action::NumberKey(3), &s),
            Transition::Screen(Screen::Links { cursor: 0 })
        );
    }

    #[test]
    fn out_of_range_number_key_is_a_noop() {
        assert_eq!(
            update(Screen::Home, &Action::NumberKey(9), &strings()),
            Transition::Screen(Screen::Home)
        );
    }

    // -- Home --

    #[test]
    fn home_enter_opens_career() {
        assert_eq!(
            update(Screen::Home, &Action::Enter, &strings()),
            Transition::Screen(Screen::career())
        );
    }

    // -- Career --

    #[test]
    fn career_cursor_moves_and_clamps() {
        let s = strings();
        let jobs = s.career.jobs.len();
        assert!(jobs >= 2);

        // down from the top
        let t = update(Screen::career(), &Action::MoveDown, &s);
        assert_eq!(t, Transition::Screen(Screen::Career { cursor: 1 }));

        // up at the top stays
        let t = update(Screen::career(), &Action::MoveUp, &s);
        assert_eq!(t, Transition::Screen(Screen::Career { cursor: 0 }));

        // down at the bottom stays
        let t = update(
            Screen::Career { cursor: jobs - 1 },
            &Action::MoveDown,
            &s,
        );
        assert_eq!(t, Transition::Screen(Screen::Career { cursor: jobs - 1 }));
    }

    #[test]
    fn career_enter_drills_into_detail() {
        let t = update(Screen::Career { cursor: 2 }, &Action::Enter, &strings());
        assert_eq!(t, Transition::Screen(Screen::JobDetail { index: 2 }));
    }

    #[test]
    fn career_back_returns_home() {
        let t = update(Screen::Career { cursor: 1 }, &Action::Back, &strings());
        assert_eq!(t, Transition::Screen(Screen::Home));
    }

    // -- JobDetail --

    #[test]
    fn detail_back_returns_to_same_row() {
        let t = update(Screen::JobDetail { index: 2 }, &Action::Back, &strings());
        assert_eq!(t, Transition::Screen(Screen::Career { cursor: 2 }));
    }

    #[test]
    fn detail_ignores_movement() {
        let t = update(Screen::JobDetail { index: 1 }, &Action::MoveDown, &strings());
        assert_eq!(t, Transition::Screen(Screen::JobDetail { index: 1 }));
    }

    // -- Links --

    #[test]
    fn links_cursor_clamps_at_end_of_combined_list() {
        let len = profile::SOCIAL_MEDIAS.len() + profile::USED_TECHS.len();
        let t = update(
            Screen::Links { cursor: len - 1 },
            &Action::MoveDown,
            &strings(),
        );
        assert_eq!(t, Transition::Screen(Screen::Links { cursor: len - 1 }));
    }

    #[test]
    fn links_back_returns_home() {
        let t = update(Screen::Links { cursor: 3 }, &Action::Back, &strings());
        assert_eq!(t, Transition::Screen(Screen::Home));
    }
}

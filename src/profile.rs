//! Static, non-localized portfolio data: identity, social links, tech stack.
//!
//! Pure configuration. Translated text lives in the locale bundles; this
//! module only carries the data that reads the same in every language.

use serde::Serialize;

pub const NAME: &str = "Renan Garcia";

/// Compact header mark for narrow terminals.
pub const SHORT_NAME: &str = "R.";

/// A named external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabeledLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_MEDIAS: [LabeledLink; 4] = [
    LabeledLink {
        name: "Instagram",
        href: "https://www.instagram.com/renangarciasoz/",
    },
    LabeledLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/in/renan-g-2a251ba0/",
    },
    LabeledLink {
        name: "Twitter",
        href: "https://twitter.com/renangarciasoz",
    },
    LabeledLink {
        name: "GitHub",
        href: "https://github.com/renangarciasoz",
    },
];

pub const USED_TECHS: [LabeledLink; 7] = [
    LabeledLink {
        name: "Rust",
        href: "https://www.rust-lang.org/",
    },
    LabeledLink {
        name: "ratatui",
        href: "https://ratatui.rs/",
    },
    LabeledLink {
        name: "crossterm",
        href: "https://github.com/crossterm-rs/crossterm",
    },
    LabeledLink {
        name: "clap",
        href: "https://github.com/clap-rs/clap",
    },
    LabeledLink {
        name: "serde",
        href: "https://serde.rs/",
    },
    LabeledLink {
        name: "chrono",
        href: "https://github.com/chronotope/chrono",
    },
    LabeledLink {
        name: "GitHub",
        href: "https://github.com/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_have_absolute_urls() {
        for link in SOCIAL_MEDIAS.iter().chain(USED_TECHS.iter()) {
            assert!(link.href.starts_with("https://"), "{}", link.name);
            assert!(!link.name.is_empty());
        }
    }
}

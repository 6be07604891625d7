//! portfolio-tui: a personal portfolio and résumé for the terminal.

pub mod career;
pub mod error;
pub mod locale;
pub mod profile;
pub mod render;
pub mod theme;
pub mod tui;

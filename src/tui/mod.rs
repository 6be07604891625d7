//! Interactive portfolio: pure state/update/view core plus an effects
//! boundary owning the terminal.

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;

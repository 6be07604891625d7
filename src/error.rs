//! Crate-wide error type.
//!
//! Unknown identifiers and malformed configuration fail fast with a
//! dedicated variant; they are never papered over with a default value.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    /// An employer identifier outside the closed set. This is a
    /// configuration or programming bug, not a user-recoverable state.
    #[error("unknown employer: {0}")]
    UnknownEmployer(String),

    #[error("unknown language: {0} (expected \"en\" or \"pt-br\")")]
    UnknownLanguage(String),

    /// A career record whose start postdates its end.
    #[error("invalid career span for {employer}: start {start} is after end {end}")]
    InvalidSpan {
        employer: String,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("locale bundle failed to parse: {0}")]
    Locale(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

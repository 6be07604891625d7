//! Localized text bundles.
//!
//! Every user-facing string lives in a per-language JSON file under
//! `locales/`, embedded at compile time and deserialized on load or
//! language switch. Career job headlines (title, company, location) are
//! localized data and live here too; the company field is parsed against
//! the closed employer set when tenure is computed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, Result};

// ============================================================================
// LANGUAGES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lang {
    En,
    PtBr,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::PtBr];

    pub fn tag(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::PtBr => "pt-br",
        }
    }

    /// The other language — the toggle target.
    pub fn other(&self) -> Lang {
        match self {
            Lang::En => Lang::PtBr,
            Lang::PtBr => Lang::En,
        }
    }

    fn bundle(&self) -> &'static str {
        match self {
            Lang::En => include_str!("../locales/en.json"),
            Lang::PtBr => include_str!("../locales/pt-br.json"),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Lang {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "pt-br" | "pt_br" | "pt" => Ok(Lang::PtBr),
            _ => Err(PortfolioError::UnknownLanguage(s.to_string())),
        }
    }
}

// ============================================================================
// STRINGS
// ============================================================================

/// The full translated string set for one language.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Strings {
    pub introduction: String,
    pub about: String,
    pub turn_lights_on: String,
    pub turn_lights_off: String,
    pub principles: Principles,
    pub career: Career,
    pub footer: Footer,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Principles {
    pub title: String,
    pub principles: Vec<Principle>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Principle {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Career {
    pub title: String,
    /// Label for the ongoing entry's open end ("Present").
    pub present: String,
    /// Month-count suffix ("mo").
    pub short_months: String,
    /// chrono format string for job date boundaries.
    pub date_template: String,
    /// Job headlines, most recent first. `company` must parse against
    /// the employer enumeration.
    pub jobs: Vec<JobHeadline>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobHeadline {
    pub title: String,
    pub company: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Footer {
    pub under_construction: String,
    pub social_medias_title: String,
    pub credits: String,
    pub techs_title: String,
}

impl Strings {
    /// Deserialize the embedded bundle for a language.
    pub fn load(lang: Lang) -> Result<Self> {
        Ok(serde_json::from_str(lang.bundle())?)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::Employer;

    #[test]
    fn every_bundle_deserializes() {
        for lang in Lang::ALL {
            let strings = Strings::load(lang).expect("embedded bundle must parse");
            assert!(!strings.introduction.is_empty());
            assert!(!strings.career.present.is_empty());
            assert!(!strings.career.jobs.is_empty());
        }
    }

    #[test]
    fn every_job_company_is_a_known_employer() {
        for lang in Lang::ALL {
            let strings = Strings::load(lang).unwrap();
            for job in &strings.career.jobs {
                job.company
                    .parse::<Employer>()
                    .unwrap_or_else(|_| panic!("unknown company in {lang}: {}", job.company));
            }
        }
    }

    #[test]
    fn bundles_list_one_job_per_employer() {
        for lang in Lang::ALL {
            let strings = Strings::load(lang).unwrap();
            assert_eq!(strings.career.jobs.len(), Employer::ALL.len());
        }
    }

    #[test]
    fn language_tags_parse_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(lang.tag().parse::<Lang>().unwrap(), lang);
        }
        assert_eq!("pt".parse::<Lang>().unwrap(), Lang::PtBr);
        assert_eq!("PT_BR".parse::<Lang>().unwrap(), Lang::PtBr);
    }

    #[test]
    fn unknown_language_tag_is_an_error() {
        let err = "fr".parse::<Lang>().unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownLanguage(tag) if tag == "fr"));
    }

    #[test]
    fn language_toggle_is_an_involution() {
        for lang in Lang::ALL {
            assert_eq!(lang.other().other(), lang);
        }
    }
}

//! Career history and tenure computation.
//!
//! The employer set is closed: adding a job is a data change inside
//! [`CareerTable::builtin`], not a schema change. Every date boundary is
//! normalized to end-of-day before comparison, so an ongoing job never
//! computes as zero-length partway through its last day, and the
//! "Present" equality check in the renderer cannot drift against the
//! calculator's own end timestamp.
//!
//! Tenure is derived, never stored: the ongoing entry's end is re-read
//! from the clock on every call, so the displayed duration keeps
//! advancing across a long-lived process.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{PortfolioError, Result};

// ============================================================================
// EMPLOYERS
// ============================================================================

/// One employer in the career history. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Employer {
    Loft,
    Tc,
    Livus,
}

impl Employer {
    /// All employers, most recent first (the rendering order).
    pub const ALL: [Employer; 3] = [Employer::Livus, Employer::Tc, Employer::Loft];

    pub fn name(&self) -> &'static str {
        match self {
            Employer::Loft => "Loft",
            Employer::Tc => "TC",
            Employer::Livus => "Livus",
        }
    }
}

impl fmt::Display for Employer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Employer {
    type Err = PortfolioError;

    /// Parse an employer identifier. Anything outside the closed set is
    /// an error — silently defaulting would mask a configuration bug.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "loft" => Ok(Employer::Loft),
            "tc" => Ok(Employer::Tc),
            "livus" => Ok(Employer::Livus),
            _ => Err(PortfolioError::UnknownEmployer(s.to_string())),
        }
    }
}

// ============================================================================
// SPANS AND TENURE
// ============================================================================

/// Configured dates for one job.
///
/// `end == None` is the ongoing sentinel: it resolves to "today" at
/// computation time, never at table construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSpan {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

/// Derived duration for one job. Recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tenure {
    /// Start boundary, end-of-day normalized.
    pub start: NaiveDateTime,
    /// End boundary, end-of-day normalized. For the ongoing entry this
    /// is end-of-today.
    pub end: NaiveDateTime,
    /// Whole calendar months between start and end, partial months
    /// truncated.
    pub months: u32,
}

/// The shared end-of-day convention (23:59:59) applied to every boundary.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let end = NaiveTime::from_hms_opt(23, 59, 59).expect("23:59:59 is a valid time");
    date.and_time(end)
}

/// Whole calendar months between two dates, truncating partial months.
///
/// Calendar arithmetic, not elapsed-days / 30: Feb 1 → Aug 1 is exactly
/// six months regardless of the day counts in between.
fn whole_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

// ============================================================================
// CAREER TABLE
// ============================================================================

/// The employer → dates mapping. Fixed configuration data.
#[derive(Debug, Clone)]
pub struct CareerTable {
    spans: Vec<(Employer, JobSpan)>,
}

impl CareerTable {
    /// Build a table, eagerly rejecting any record with `start > end`.
    /// A malformed span must fail here, at construction, not surface as
    /// a negative-months result at render time.
    pub fn new(spans: Vec<(Employer, JobSpan)>) -> Result<Self> {
        for (employer, span) in &spans {
            if let Some(end) = span.end {
                if span.start > end {
                    return Err(PortfolioError::InvalidSpan {
                        employer: employer.name().to_string(),
                        start: span.start,
                        end,
                    });
                }
            }
        }
        Ok(Self { spans })
    }

    /// The built-in career history.
    pub fn builtin() -> Result<Self> {
        Self::new(vec![
            (
                Employer::Livus,
                JobSpan {
                    start: ymd(2021, 8, 1),
                    end: None,
                },
            ),
            (
                Employer::Tc,
                JobSpan {
                    start: ymd(2021, 2, 1),
                    end: Some(ymd(2021, 8, 1)),
                },
            ),
            (
                Employer::Loft,
                JobSpan {
                    start: ymd(2019, 7, 1),
                    end: Some(ymd(2021, 2, 1)),
                },
            ),
        ])
    }

    /// Tenure for one employer, evaluated against an explicit `today`.
    ///
    /// Deterministic: two calls with the same `today` return identical
    /// results. The input table is never mutated and nothing is cached.
    pub fn tenure_at(&self, employer: Employer, today: NaiveDate) -> Result<Tenure> {
        let span = self
            .spans
            .iter()
            .find(|(e, _)| *e == employer)
            .map(|(_, s)| *s)
            .ok_or_else(|| PortfolioError::UnknownEmployer(employer.name().to_string()))?;

        let end_date = span.end.unwrap_or(today);
        Ok(Tenure {
            start: end_of_day(span.start),
            end: end_of_day(end_date),
            months: whole_months_between(span.start, end_date),
        })
    }

    /// Tenure as of the wall clock. `today` is re-read on every call so
    /// the ongoing entry keeps advancing.
    pub fn tenure(&self, employer: Employer) -> Result<Tenure> {
        self.tenure_at(employer, Local::now().date_naive())
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid built-in date")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;

    fn table() -> CareerTable {
        CareerTable::builtin().expect("built-in table is valid")
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- Parsing --

    #[test]
    fn employer_parses_case_insensitively() {
        assert_eq!("Loft".parse::<Employer>().unwrap(), Employer::Loft);
        assert_eq!("tc".parse::<Employer>().unwrap(), Employer::Tc);
        assert_eq!("LIVUS".parse::<Employer>().unwrap(), Employer::Livus);
    }

    #[test]
    fn unknown_identifier_is_an_error_not_a_default() {
        let err = "Z".parse::<Employer>().unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownEmployer(id) if id == "Z"));
    }

    // -- Month arithmetic --

    #[test]
    fn six_whole_months_feb_to_aug() {
        let tenure = table().tenure_at(Employer::Tc, day(2024, 1, 1)).unwrap();
        assert_eq!(tenure.months, 6);
    }

    #[test]
    fn loft_scenario_is_nineteen_months() {
        let tenure = table().tenure_at(Employer::Loft, day(2024, 1, 1)).unwrap();
        assert_eq!(tenure.start, end_of_day(day(2019, 7, 1)));
        assert_eq!(tenure.end, end_of_day(day(2021, 2, 1)));
        assert_eq!(tenure.months, 19);
    }

    #[test]
    fn partial_months_truncate() {
        // 2 months and 20 days is still 2 months
        assert_eq!(whole_months_between(day(2021, 1, 10), day(2021, 3, 30)), 2);
        // one day short of a month boundary
        assert_eq!(whole_months_between(day(2021, 1, 10), day(2021, 2, 9)), 0);
        assert_eq!(whole_months_between(day(2021, 1, 10), day(2021, 2, 10)), 1);
    }

    #[test]
    fn months_never_negative_for_any_employer() {
        let table = table();
        for employer in Employer::ALL {
            let tenure = table.tenure_at(employer, day(2025, 6, 15)).unwrap();
            // u32 already guarantees this; assert the computation too
            assert!(tenure.end >= tenure.start);
        }
    }

    // -- Ongoing entry --

    #[test]
    fn ongoing_end_resolves_to_end_of_today() {
        let today = day(2024, 3, 10);
        let tenure = table().tenure_at(Employer::Livus, today).unwrap();
        assert_eq!(tenure.end, end_of_day(today));
        // Aug 2021 → Mar 2024, day 10 >= day 1
        assert_eq!(tenure.months, 31);
    }

    #[test]
    fn ongoing_tenure_is_idempotent_within_a_day() {
        let today = day(2024, 3, 10);
        let first = table().tenure_at(Employer::Livus, today).unwrap();
        let second = table().tenure_at(Employer::Livus, today).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ongoing_tenure_advances_with_the_calendar() {
        let earlier = table().tenure_at(Employer::Livus, day(2024, 3, 10)).unwrap();
        let later = table().tenure_at(Employer::Livus, day(2024, 9, 10)).unwrap();
        assert_eq!(later.months, earlier.months + 6);
    }

    // -- Table validation --

    #[test]
    fn builtin_table_has_ordered_spans() {
        let table = table();
        for employer in Employer::ALL {
            let tenure = table.tenure_at(employer, day(2025, 1, 1)).unwrap();
            assert!(tenure.start <= tenure.end);
        }
    }

    #[test]
    fn reversed_span_is_rejected_at_construction() {
        let err = CareerTable::new(vec![(
            Employer::Loft,
            JobSpan {
                start: day(2022, 1, 1),
                end: Some(day(2021, 1, 1)),
            },
        )])
        .unwrap_err();
        assert!(matches!(err, PortfolioError::InvalidSpan { .. }));
    }

    #[test]
    fn missing_employer_in_partial_table_fails_fast() {
        let partial = CareerTable::new(vec![(
            Employer::Loft,
            JobSpan {
                start: day(2019, 7, 1),
                end: Some(day(2021, 2, 1)),
            },
        )])
        .unwrap();
        let err = partial.tenure_at(Employer::Livus, day(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownEmployer(_)));
    }

    // -- Normalization --

    #[test]
    fn end_of_day_is_one_second_before_midnight() {
        let eod = end_of_day(day(2021, 8, 1));
        assert_eq!(eod.format("%H:%M:%S").to_string(), "23:59:59");
        assert_eq!(eod.date(), day(2021, 8, 1));
    }
}

//! Plain-text and JSON rendering of the portfolio.
//!
//! Pure functions — (content, OutputFormat) → String. The TUI has its
//! own view layer; these feed the non-interactive subcommands.

use chrono::NaiveDate;
use serde::Serialize;

use crate::career::{CareerTable, Employer, Tenure, end_of_day};
use crate::error::Result;
use crate::locale::{Lang, Strings};
use crate::profile::{self, LabeledLink};

/// Output format for the non-interactive subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// JOB DATE LINE
// ============================================================================

/// Format one job's date range per the locale.
///
/// `"<start> - <end> • <months> mo"`, or the localized Present token in
/// place of the end date for the ongoing entry. The ongoing check
/// compares against the same end-of-day normalization the calculator
/// uses; a raw `now()` would disagree with the computed end by the
/// sub-day remainder.
pub fn format_job_dates(tenure: &Tenure, strings: &Strings, today: NaiveDate) -> String {
    let template = strings.career.date_template.as_str();
    let start = tenure.start.format(template);
    let months = tenure.months;
    let suffix = &strings.career.short_months;

    if tenure.end == end_of_day(today) {
        format!("{start} - {} • {months} {suffix}", strings.career.present)
    } else {
        format!("{start} - {} • {months} {suffix}", tenure.end.format(template))
    }
}

// ============================================================================
// CAREER ENTRIES
// ============================================================================

/// One resolved career row: localized headline plus computed tenure.
#[derive(Debug, Clone, Serialize)]
pub struct CareerEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub months: u32,
    pub ongoing: bool,
    /// The formatted date line shown to humans.
    pub dates: String,
}

/// Join the localized job headlines with the career table, most recent
/// first. Fails fast on a company name outside the employer set.
pub fn career_entries(
    table: &CareerTable,
    strings: &Strings,
    today: NaiveDate,
) -> Result<Vec<CareerEntry>> {
    strings
        .career
        .jobs
        .iter()
        .map(|job| {
            let employer: Employer = job.company.parse()?;
            let tenure = table.tenure_at(employer, today)?;
            Ok(CareerEntry {
                title: job.title.clone(),
                company: job.company.clone(),
                location: job.location.clone(),
                start: tenure.start.date(),
                end: tenure.end.date(),
                months: tenure.months,
                ongoing: tenure.end == end_of_day(today),
                dates: format_job_dates(&tenure, strings, today),
            })
        })
        .collect()
}

// ============================================================================
// CAREER SECTION
// ============================================================================

/// Format the career section alone.
pub fn format_career(
    table: &CareerTable,
    strings: &Strings,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String> {
    let entries = career_entries(table, strings, today)?;
    match format {
        OutputFormat::Human => Ok(career_human(&strings.career.title, &entries)),
        OutputFormat::Json => Ok(to_json(&entries)),
    }
}

fn career_human(title: &str, entries: &[CareerEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {title} ===\n"));
    for entry in entries {
        out.push_str(&format!("{}\n", entry.title));
        out.push_str(&format!("{} - {}\n", entry.company, entry.location));
        out.push_str(&format!("{}\n\n", entry.dates));
    }
    out
}

// ============================================================================
// FULL PORTFOLIO
// ============================================================================

/// Everything the home page shows, resolved for one language and day.
#[derive(Debug, Serialize)]
struct PortfolioDoc<'a> {
    name: &'static str,
    lang: Lang,
    introduction: &'a str,
    about: &'a str,
    principles: Vec<&'a str>,
    career: Vec<CareerEntry>,
    social_medias: &'a [LabeledLink],
    used_techs: &'a [LabeledLink],
}

/// Format the whole portfolio.
pub fn format_portfolio(
    table: &CareerTable,
    strings: &Strings,
    lang: Lang,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String> {
    let career = career_entries(table, strings, today)?;
    let doc = PortfolioDoc {
        name: profile::NAME,
        lang,
        introduction: &strings.introduction,
        about: &strings.about,
        principles: strings
            .principles
            .principles
            .iter()
            .map(|p| p.title.as_str())
            .collect(),
        career,
        social_medias: &profile::SOCIAL_MEDIAS,
        used_techs: &profile::USED_TECHS,
    };

    match format {
        OutputFormat::Human => Ok(portfolio_human(&doc, strings)),
        OutputFormat::Json => Ok(to_json(&doc)),
    }
}

fn portfolio_human(doc: &PortfolioDoc<'_>, strings: &Strings) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", doc.introduction));
    out.push_str(&format!("{}\n\n", doc.about));

    out.push_str(&format!("=== {} ===\n", strings.principles.title));
    for principle in &doc.principles {
        out.push_str(&format!("  {principle}\n"));
    }
    out.push('\n');

    out.push_str(&career_human(&strings.career.title, &doc.career));

    out.push_str(&format!("{}\n", strings.footer.social_medias_title));
    for link in doc.social_medias {
        out.push_str(&format!("  {} <{}>\n", link.name, link.href));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", strings.footer.techs_title));
    for link in doc.used_techs {
        out.push_str(&format!("  {} <{}>\n", link.name, link.href));
    }
    out.push('\n');

    out.push_str(&format!("{}\n", strings.footer.credits));
    out
}

fn to_json<T: Serialize>(value: &T) -> String {
    // These types serialize infallibly; fail loudly if that ever changes
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| panic!("failed to serialize portfolio JSON: {e}"))
}

// ============================================================================
// TESTS
// ============================================================================

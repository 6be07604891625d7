//! portfolio-tui CLI
//!
//! Interactive portfolio by default; `career` and `render` print the
//! same content non-interactively, as text or JSON.

use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use portfolio_tui::career::CareerTable;
use portfolio_tui::error::Result;
use portfolio_tui::locale::{Lang, Strings};
use portfolio_tui::render::{OutputFormat, format_career, format_portfolio};
use portfolio_tui::theme::{ThemeMode, ThemeState};
use portfolio_tui::tui;

#[derive(Parser)]
#[command(name = "portfolio-tui")]
#[command(about = "Personal portfolio and résumé, rendered in the terminal")]
#[command(version)]
struct Cli {
    /// Language for all text (en, pt-br)
    #[arg(long, global = true, default_value = "en")]
    lang: Lang,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive portfolio (the default)
    Tui {
        /// Force a theme instead of detecting the terminal's ambient one
        #[arg(long, value_enum)]
        theme: Option<ThemeArg>,
    },

    /// Print the career history with computed tenure
    Career {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Evaluate tenure as of this date instead of today (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Print the whole portfolio
    Render {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let lang = cli.lang;

    let result = match cli.command {
        None | Some(Commands::Tui { theme: None }) => cmd_tui(lang, ThemeState::from_ambient()),
        Some(Commands::Tui { theme: Some(theme) }) => {
            cmd_tui(lang, ThemeState::new(theme.into()))
        }
        Some(Commands::Career { format, today }) => cmd_career(lang, format.into(), today),
        Some(Commands::Render { format }) => cmd_render(lang, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(lang: Lang, theme: ThemeState) -> Result<()> {
    tui::run(lang, theme)
}

fn cmd_career(lang: Lang, format: OutputFormat, today: Option<NaiveDate>) -> Result<()> {
    let strings = Strings::load(lang)?;
    let table = CareerTable::builtin()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    print!("{}", format_career(&table, &strings, today, format)?);
    Ok(())
}

fn cmd_render(lang: Lang, format: OutputFormat) -> Result<()> {
    let strings = Strings::load(lang)?;
    let table = CareerTable::builtin()?;
    let today = Local::now().date_naive();

    print!("{}", format_portfolio(&table, &strings, lang, today, format)?);
    Ok(())
}

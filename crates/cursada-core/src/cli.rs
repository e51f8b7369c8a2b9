use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::date::parse_date_key;
use crate::render::OutputFormat;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cursada",
    version,
    about = "Month-view academic calendar: events, periods and lecture weeks",
    disable_help_subcommand = true
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Calendar config file (TOML).
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// JSON array of events; overrides the config file.
    #[arg(long = "events", global = true)]
    pub events: Option<PathBuf>,

    /// JSON array of periods; overrides the config file.
    #[arg(long = "periods", global = true)]
    pub periods: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render a month grid.
    Month(MonthArgs),
    /// Show the detail panel for one day.
    Day(DayArgs),
    /// Print the period a day falls in.
    Period {
        #[arg(value_parser = parse_cli_date)]
        date: NaiveDate,
    },
    /// Print the events after multi-date expansion, as JSON.
    Expand,
}

#[derive(Args, Debug, Clone)]
pub struct MonthArgs {
    /// Month number, 1-12. Defaults to the current month.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Defaults to the current year.
    #[arg(long)]
    pub year: Option<i32>,

    /// Months to move forward (positive) or back (negative) from the start month.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub shift: i32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct DayArgs {
    #[arg(value_parser = parse_cli_date)]
    pub date: NaiveDate,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

fn parse_cli_date(raw: &str) -> Result<NaiveDate, String> {
    parse_date_key(raw.trim()).ok_or_else(|| format!("expected YYYY-MM-DD, got: {raw}"))
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod cursor;
pub mod dataset;
pub mod date;
pub mod details;
pub mod event;
pub mod expand;
pub mod grid;
pub mod locale;
pub mod period;
pub mod render;

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let cli = cli::GlobalCli::parse_from(raw_args);

    cli::init_tracing(cli.verbose, cli.quiet)?;

    info!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        "starting cursada CLI"
    );
    debug!(command = ?cli.command, "parsed command");

    let mut cfg = config::Config::load(cli.config.as_deref())?;
    cfg.apply_overrides(cli.events, cli.periods);

    let dataset = dataset::Dataset::load(cfg.events.as_deref(), cfg.periods.as_deref())
        .context("failed to load calendar data")?;

    commands::dispatch(&cfg, &dataset, cli.command)?;

    info!("done");
    Ok(())
}

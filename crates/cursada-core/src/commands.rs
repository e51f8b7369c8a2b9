use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::cli::{Command, DayArgs, MonthArgs};
use crate::config::Config;
use crate::cursor::CalendarCursor;
use crate::dataset::Dataset;
use crate::date::date_key;
use crate::details::day_details;
use crate::grid::MonthView;
use crate::period::resolve_period;
use crate::render::{self, OutputFormat, html, text};

#[tracing::instrument(skip_all)]
pub fn dispatch(cfg: &Config, dataset: &Dataset, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Month(args) => cmd_month(cfg, dataset, args),
        Command::Day(args) => cmd_day(dataset, args),
        Command::Period { date } => cmd_period(dataset, date),
        Command::Expand => cmd_expand(dataset),
    }
}

/// Start month from explicit flags, falling back to today's month and year.
pub fn resolve_cursor(
    month: Option<u32>,
    year: Option<i32>,
    shift: i32,
    today: CalendarCursor,
) -> anyhow::Result<CalendarCursor> {
    let month0 = month.map_or(today.month0(), |month| month.saturating_sub(1));
    let year = year.unwrap_or(today.year());
    let shifted = CalendarCursor::new(month0, year)?.shift(shift);
    CalendarCursor::new(shifted.month0(), shifted.year())
        .with_context(|| format!("--shift {shift} leaves the supported calendar range"))
}

fn cmd_month(cfg: &Config, dataset: &Dataset, args: MonthArgs) -> anyhow::Result<()> {
    let today = CalendarCursor::today(cfg.timezone());
    let cursor = resolve_cursor(args.month, args.year, args.shift, today)?;
    info!(month = cursor.month(), year = cursor.year(), "rendering month");

    let view = MonthView::build(
        cursor,
        cfg.week_start_day(),
        &dataset.events,
        &dataset.periods,
    );

    let content = match args.format {
        OutputFormat::Html => {
            html::render_month_page(&view, &dataset.events, &dataset.periods, &cfg.title)
                .into_string()
        }
        OutputFormat::Text => {
            let mut out = Vec::new();
            text::write_month(&mut out, &view)?;
            String::from_utf8(out).context("month text was not valid UTF-8")?
        }
    };

    render::emit(args.output.as_deref(), &content)
}

fn cmd_day(dataset: &Dataset, args: DayArgs) -> anyhow::Result<()> {
    let Some(details) = day_details(args.date, &dataset.events, &dataset.periods) else {
        debug!(date = %args.date, "no events on selected day");
        return render::emit(
            args.output.as_deref(),
            &format!("sin eventos para {}", date_key(args.date)),
        );
    };

    let content = match args.format {
        OutputFormat::Html => html::render_day_details(&details).into_string(),
        OutputFormat::Text => {
            let mut out = Vec::new();
            text::write_details(&mut out, &details)?;
            String::from_utf8(out).context("detail text was not valid UTF-8")?
        }
    };

    render::emit(args.output.as_deref(), &content)
}

fn cmd_period(dataset: &Dataset, date: NaiveDate) -> anyhow::Result<()> {
    let line = match resolve_period(date, &dataset.periods) {
        Some(period) => format!("{}\t{}", period.kind, period.name),
        None => "sin periodo".to_string(),
    };
    debug!(date = %date, weekday = %date.weekday(), %line, "period resolved");
    render::emit(None, &line)
}

fn cmd_expand(dataset: &Dataset) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&dataset.events)
        .context("failed to serialize expanded events")?;
    render::emit(None, &json)
}

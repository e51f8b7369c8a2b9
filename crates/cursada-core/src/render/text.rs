use std::io::Write;

use chrono::Datelike;
use unicode_width::UnicodeWidthStr;

use crate::classify::{DayCell, DayClass};
use crate::details::DayDetails;
use crate::grid::MonthView;
use crate::locale::{CANCELLED_EVENT_LABEL, SPECIAL_EVENT_LABEL};

/// Terminal month table followed by one legend line per busy day.
///
/// Days outside the month are bracketed, `*` marks a day with events and `!`
/// one with a cancelled event.
pub fn write_month<W: Write>(mut writer: W, view: &MonthView<'_>) -> anyhow::Result<()> {
    let headers = view
        .weekday_labels
        .iter()
        .map(|label| label.chars().take(3).collect::<String>())
        .collect::<Vec<_>>();
    let rows = view
        .weeks()
        .map(|week| week.iter().map(day_label).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let width = headers
        .iter()
        .chain(rows.iter().flatten())
        .map(|cell| UnicodeWidthStr::width(cell.as_str()))
        .max()
        .unwrap_or(0);

    writeln!(writer, "{}", view.header)?;
    writeln!(writer)?;
    write_row(&mut writer, &headers, width)?;
    for row in &rows {
        write_row(&mut writer, row, width)?;
    }

    let busy = view
        .cells
        .iter()
        .filter(|cell| cell.has_events())
        .collect::<Vec<_>>();
    if !busy.is_empty() {
        writeln!(writer)?;
    }
    for cell in busy {
        let tooltip = cell.tooltip.as_deref().unwrap_or_default();
        writeln!(
            writer,
            "{}  {}  [{}]",
            cell.key,
            tooltip,
            cell.preview.join(", ")
        )?;
    }

    Ok(())
}

pub fn write_details<W: Write>(mut writer: W, details: &DayDetails<'_>) -> anyhow::Result<()> {
    writeln!(writer, "{}", details.heading)?;
    if let Some(name) = &details.period_name {
        writeln!(writer, "📅 {name}")?;
    }

    for item in &details.items {
        writeln!(writer)?;
        let mut headline = String::new();
        if !item.type_label.is_empty() {
            headline.push_str(&format!("[{}] ", item.type_label));
        }
        headline.push_str(&item.event.title);
        if item.special {
            headline.push_str(&format!("  ✨ {SPECIAL_EVENT_LABEL}"));
        }
        if item.cancelled {
            headline.push_str(&format!("  ❌ {CANCELLED_EVENT_LABEL}"));
        }
        writeln!(writer, "{headline}")?;
        writeln!(writer, "  Hora: {}", item.event.time)?;
        writeln!(writer, "  Ubicación: {}", item.event.location)?;
        if !item.event.description.is_empty() {
            writeln!(writer, "  {}", item.event.description)?;
        }
    }

    Ok(())
}

fn day_label(cell: &DayCell<'_>) -> String {
    let marker = if cell.has_class(&DayClass::CancelledEvent) {
        "!"
    } else if cell.has_events() {
        "*"
    } else {
        ""
    };

    if cell.in_month {
        format!("{}{marker}", cell.date.day())
    } else {
        format!("({}){marker}", cell.date.day())
    }
}

fn write_row<W: Write>(writer: &mut W, cells: &[String], width: usize) -> anyhow::Result<()> {
    let line = cells
        .iter()
        .map(|cell| {
            let padding = width.saturating_sub(UnicodeWidthStr::width(cell.as_str()));
            format!("{}{}", " ".repeat(padding), cell)
        })
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(writer, "{}", line.trim_end())?;
    Ok(())
}

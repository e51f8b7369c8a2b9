use chrono::{Datelike, NaiveDate, Weekday};

use crate::event::EventType;

pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Sunday first, matching `Weekday::num_days_from_sunday`.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

pub const SPECIAL_EVENT_LABEL: &str = "Evento Especial";
pub const CANCELLED_EVENT_LABEL: &str = "Evento Cancelado";
pub const TOOLTIP_SEPARATOR: &str = " • ";

/// Month name for a 0-based month index.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES
        .get(month0 as usize)
        .copied()
        .unwrap_or("")
}

pub fn weekday_labels(week_start: Weekday) -> Vec<&'static str> {
    let offset = week_start.num_days_from_sunday() as usize;
    (0..7)
        .map(|idx| WEEKDAY_NAMES[(offset + idx) % 7])
        .collect()
}

/// "4 de Marzo de 2024".
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        month_name(date.month0()),
        date.year()
    )
}

/// "1 evento", "3 eventos".
pub fn event_count_label(count: usize) -> String {
    let suffix = if count > 1 { "s" } else { "" };
    format!("{count} evento{suffix}")
}

/// "+2 más" line shown under the first preview title.
pub fn more_events_label(remaining: usize) -> String {
    format!("+{remaining} más")
}

pub fn event_type_label(kind: &EventType) -> &str {
    match kind {
        EventType::Workshop => "Taller",
        EventType::Competition => "Competencia",
        EventType::Lecture => "Charla",
        EventType::Hackathon => "Hackathon",
        EventType::Meeting => "Reunión",
        EventType::Presentation => "Presentación",
        EventType::Other(raw) => raw.as_str(),
    }
}

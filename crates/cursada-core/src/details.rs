use chrono::NaiveDate;

use crate::date::date_key;
use crate::event::{Event, events_on};
use crate::locale::{event_type_label, long_date};
use crate::period::{Period, resolve_period};

/// Content of the panel opened for a selected day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetails<'a> {
    pub date: NaiveDate,
    pub heading: String,
    pub period_name: Option<String>,
    pub items: Vec<DetailItem<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailItem<'a> {
    pub type_tag: &'a str,
    pub type_label: &'a str,
    pub special: bool,
    pub cancelled: bool,
    pub event: &'a Event,
}

/// Details for `date`, or `None` when no event falls on it.
pub fn day_details<'a>(
    date: NaiveDate,
    events: &'a [Event],
    periods: &[Period],
) -> Option<DayDetails<'a>> {
    let day_events = events_on(events, &date_key(date));
    if day_events.is_empty() {
        return None;
    }

    let period_name = resolve_period(date, periods).map(|period| period.name.clone());

    let items = day_events
        .into_iter()
        .map(|event| DetailItem {
            type_tag: event.kind.as_ref().map_or("", |kind| kind.as_tag()),
            type_label: event.kind.as_ref().map_or("", event_type_label),
            special: event.is_special(),
            cancelled: event.is_cancelled(),
            event,
        })
        .collect();

    Some(DayDetails {
        date,
        heading: format!("Eventos del {}", long_date(date)),
        period_name,
        items,
    })
}

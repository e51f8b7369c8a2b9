use std::borrow::Cow;

use chrono::NaiveDate;

use crate::date::date_key;
use crate::event::{Event, events_on};
use crate::locale::{
    CANCELLED_EVENT_LABEL, SPECIAL_EVENT_LABEL, TOOLTIP_SEPARATOR, event_count_label,
    more_events_label,
};
use crate::period::{Period, resolve_period};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayClass {
    OtherMonth,
    Period(String),
    HasEvent,
    SpecialEvent,
    CancelledEvent,
}

impl DayClass {
    pub fn as_class(&self) -> Cow<'_, str> {
        match self {
            DayClass::OtherMonth => Cow::Borrowed("other-month"),
            DayClass::Period(kind) => Cow::Owned(format!("period-{kind}")),
            DayClass::HasEvent => Cow::Borrowed("has-event"),
            DayClass::SpecialEvent => Cow::Borrowed("special-event"),
            DayClass::CancelledEvent => Cow::Borrowed("cancelled-event"),
        }
    }
}

/// Everything a renderer needs to paint one day cell.
#[derive(Debug, Clone)]
pub struct DayCell<'a> {
    pub date: NaiveDate,
    pub key: String,
    pub in_month: bool,
    pub classes: Vec<DayClass>,
    pub preview: Vec<String>,
    pub tooltip: Option<String>,
    pub period: Option<Cow<'a, Period>>,
    pub events: Vec<&'a Event>,
}

impl DayCell<'_> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn has_class(&self, class: &DayClass) -> bool {
        self.classes.contains(class)
    }

    /// Space separated class attribute, starting with `calendar-day`.
    pub fn class_attr(&self) -> String {
        let mut attr = String::from("calendar-day");
        for class in &self.classes {
            attr.push(' ');
            attr.push_str(&class.as_class());
        }
        attr
    }
}

/// Classifies `date` against already expanded events and the period list.
pub fn classify_day<'a>(
    date: NaiveDate,
    in_month: bool,
    events: &'a [Event],
    periods: &'a [Period],
) -> DayCell<'a> {
    let key = date_key(date);
    let day_events = events_on(events, &key);
    let period = resolve_period(date, periods);

    let any_special = day_events.iter().any(|event| event.is_special());
    let any_cancelled = day_events.iter().any(|event| event.is_cancelled());

    let mut classes = Vec::new();
    if !in_month {
        classes.push(DayClass::OtherMonth);
    }
    if let Some(period) = &period {
        classes.push(DayClass::Period(period.kind.clone()));
    }
    if !day_events.is_empty() {
        classes.push(DayClass::HasEvent);
        if any_special {
            classes.push(DayClass::SpecialEvent);
        }
        if any_cancelled {
            classes.push(DayClass::CancelledEvent);
        }
    }

    let preview = preview_lines(&day_events);
    let tooltip = compose_tooltip(period.as_deref(), &day_events);

    DayCell {
        date,
        key,
        in_month,
        classes,
        preview,
        tooltip,
        period,
        events: day_events,
    }
}

/// First title, then a "+N más" line when more events share the day.
pub fn preview_lines(events: &[&Event]) -> Vec<String> {
    let Some(first) = events.first() else {
        return Vec::new();
    };

    let mut lines = vec![first.title.clone()];
    if events.len() > 1 {
        lines.push(more_events_label(events.len() - 1));
    }
    lines
}

/// Hover text for a day.
///
/// With a period: its name, then the special/cancelled markers and the event
/// count when events exist. Without one: the markers alone, or the count when
/// no marker applies. `None` when neither a period nor an event matches.
pub fn compose_tooltip(period: Option<&Period>, events: &[&Event]) -> Option<String> {
    let any_special = events.iter().any(|event| event.is_special());
    let any_cancelled = events.iter().any(|event| event.is_cancelled());

    if let Some(period) = period {
        let mut text = period.name.clone();
        if !events.is_empty() {
            if any_special {
                text.push_str(TOOLTIP_SEPARATOR);
                text.push_str(SPECIAL_EVENT_LABEL);
            }
            if any_cancelled {
                text.push_str(TOOLTIP_SEPARATOR);
                text.push_str(CANCELLED_EVENT_LABEL);
            }
            text.push_str(TOOLTIP_SEPARATOR);
            text.push_str(&event_count_label(events.len()));
        }
        return Some(text).filter(|text| !text.is_empty());
    }

    if events.is_empty() {
        return None;
    }

    let mut info = Vec::new();
    if any_special {
        info.push(SPECIAL_EVENT_LABEL.to_string());
    }
    if any_cancelled {
        info.push(CANCELLED_EVENT_LABEL.to_string());
    }
    if info.is_empty() {
        info.push(event_count_label(events.len()));
    }
    Some(info.join(TOOLTIP_SEPARATOR))
}

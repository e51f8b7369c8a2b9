use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::parse_date_key;
use crate::event::null_as_empty;

/// Period type whose label is replaced by the running lecture week.
pub const LECTURES_PERIOD_TYPE: &str = "lectures";

/// A named, inclusive date range such as an exam window or the lecture term.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Period {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start_date: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub end_date: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Period {
    /// Parsed `[start, end]`; `None` when either bound is malformed.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((
            parse_date_key(&self.start_date)?,
            parse_date_key(&self.end_date)?,
        ))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.bounds()
            .is_some_and(|(start, end)| start <= date && date <= end)
    }

    pub fn is_lectures(&self) -> bool {
        self.kind == LECTURES_PERIOD_TYPE
    }

    pub fn css_class(&self) -> String {
        format!("period-{}", self.kind)
    }
}

/// 1-based week index of `date` counted from `start`.
pub fn lecture_week_number(start: NaiveDate, date: NaiveDate) -> i64 {
    (date - start).num_days().div_euclid(7) + 1
}

pub fn lecture_week_label(week: i64) -> String {
    format!("Semana {week} de cursada")
}

/// First period in input order containing `date`.
///
/// Overlapping ranges are not disambiguated beyond input order. A `lectures`
/// match comes back as an owned copy named after the running lecture week;
/// anything else is borrowed unchanged.
pub fn resolve_period(date: NaiveDate, periods: &[Period]) -> Option<Cow<'_, Period>> {
    let period = periods.iter().find(|period| period.contains(date))?;

    if !period.is_lectures() {
        return Some(Cow::Borrowed(period));
    }

    let (start, _) = period.bounds()?;
    let week = lecture_week_number(start, date);
    tracing::trace!(date = %date, week, "lecture week resolved");

    Some(Cow::Owned(Period {
        name: lecture_week_label(week),
        ..period.clone()
    }))
}

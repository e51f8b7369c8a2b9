use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::event::Event;
use crate::expand::expand_events;
use crate::period::Period;

/// Events and periods as loaded once at startup. Events are already expanded.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub events: Vec<Event>,
    pub periods: Vec<Period>,
}

impl Dataset {
    pub fn new(raw_events: &[Event], periods: Vec<Period>) -> Self {
        Self {
            events: expand_events(raw_events),
            periods,
        }
    }

    /// Reads both files; a path that is not configured yields an empty list.
    #[tracing::instrument(skip_all)]
    pub fn load(events_path: Option<&Path>, periods_path: Option<&Path>) -> anyhow::Result<Self> {
        let raw_events: Vec<Event> = load_optional(events_path, "events")?;
        let periods: Vec<Period> = load_optional(periods_path, "periods")?;

        let dataset = Self::new(&raw_events, periods);
        info!(
            raw_events = raw_events.len(),
            events = dataset.events.len(),
            periods = dataset.periods.len(),
            "calendar data loaded"
        );
        Ok(dataset)
    }
}

fn load_optional<T: DeserializeOwned>(path: Option<&Path>, what: &str) -> anyhow::Result<Vec<T>> {
    match path {
        Some(path) => load_json_array(path),
        None => {
            warn!(what, "no data file configured; starting empty");
            Ok(Vec::new())
        }
    }
}

#[tracing::instrument(skip(path), fields(file = %path.display()))]
pub fn load_json_array<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    debug!("loading json array");
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&raw).with_context(|| format!("failed parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_paths_load_as_empty() {
        let dataset = Dataset::load(None, None).expect("load");
        assert!(dataset.events.is_empty());
        assert!(dataset.periods.is_empty());
    }

    #[test]
    fn blank_file_is_an_empty_list() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("events.json");
        fs::write(&path, "\n").expect("write");
        let events: Vec<Event> = load_json_array(&path).expect("load blank");
        assert!(events.is_empty());
    }

    #[test]
    fn invalid_json_names_the_file() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("periods.json");
        fs::write(&path, "{not json").expect("write");
        let err = load_json_array::<Period>(&path).expect_err("invalid json");
        assert!(format!("{err:#}").contains("periods.json"));
    }

    #[test]
    fn null_fields_do_not_fail_the_load() {
        let temp = tempdir().expect("tempdir");
        let events_path = temp.path().join("events.json");
        let periods_path = temp.path().join("periods.json");
        fs::write(
            &events_path,
            r#"[{"title":"A","date":"2024-03-05","description":null},{"title":"B","date":"2024-03-06","location":null}]"#,
        )
        .expect("write events");
        fs::write(
            &periods_path,
            r#"[{"start_date":"2024-03-04","end_date":"2024-06-30","type":"exams","name":null}]"#,
        )
        .expect("write periods");

        let dataset = Dataset::load(Some(events_path.as_path()), Some(periods_path.as_path()))
            .expect("load with nulls");
        assert_eq!(dataset.events.len(), 2);
        assert!(dataset.events[0].description.is_empty());
        assert!(dataset.events[1].location.is_empty());
        assert_eq!(dataset.periods[0].kind, "exams");
        assert!(dataset.periods[0].name.is_empty());
    }

    #[test]
    fn loaded_events_are_expanded() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("events.json");
        fs::write(
            &path,
            r#"[{"title":"A","dates":["2024-03-04","2024-03-05"]},{"title":"B","date":"2024-03-06"}]"#,
        )
        .expect("write");

        let dataset = Dataset::load(Some(path.as_path()), None).expect("load");
        assert_eq!(dataset.events.len(), 3);
        assert!(dataset.events.iter().all(|event| event.dates.is_none()));
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Workshop,
    Competition,
    Lecture,
    Hackathon,
    Meeting,
    Presentation,
    #[serde(untagged)]
    Other(String),
}

impl EventType {
    /// Tag used for the `event-type {tag}` CSS hook.
    pub fn as_tag(&self) -> &str {
        match self {
            EventType::Workshop => "workshop",
            EventType::Competition => "competition",
            EventType::Lecture => "lecture",
            EventType::Hackathon => "hackathon",
            EventType::Meeting => "meeting",
            EventType::Presentation => "presentation",
            EventType::Other(raw) => raw.as_str(),
        }
    }
}

/// A calendar event as supplied by the site data.
///
/// An event either sits on a single `date` or spans an ordered `dates` list;
/// [`crate::expand::expand_events`] turns the latter into one record per date.
/// Fields the calendar does not know about are kept in `extra` so expansion
/// copies them through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<String>>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_event: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<bool>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Event {
    pub fn is_special(&self) -> bool {
        self.special_event.unwrap_or(false)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.unwrap_or(false)
    }

    /// Exact match against a canonical `YYYY-MM-DD` key.
    pub fn occurs_on(&self, key: &str) -> bool {
        self.date.as_deref() == Some(key)
    }
}

/// Reads an explicit `null` the same as a missing text field.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Events whose `date` equals `key`, in input order.
pub fn events_on<'a>(events: &'a [Event], key: &str) -> Vec<&'a Event> {
    events.iter().filter(|event| event.occurs_on(key)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_known_and_unknown_types() {
        let known: Event =
            serde_json::from_str(r#"{"title":"Rust 101","type":"workshop","date":"2024-03-04"}"#)
                .expect("parse known type");
        assert_eq!(known.kind, Some(EventType::Workshop));

        let unknown: Event =
            serde_json::from_str(r#"{"title":"Asado","type":"social","date":"2024-03-04"}"#)
                .expect("parse unknown type");
        assert_eq!(unknown.kind, Some(EventType::Other("social".to_string())));
        assert_eq!(unknown.kind.as_ref().map(EventType::as_tag), Some("social"));
    }

    #[test]
    fn absent_flags_read_as_false() {
        let event: Event = serde_json::from_str(r#"{"title":"Charla","date":"2024-03-04"}"#)
            .expect("parse event");
        assert!(!event.is_special());
        assert!(!event.is_cancelled());
        assert!(event.time.is_empty());
        assert!(event.kind.is_none());
    }

    #[test]
    fn null_text_fields_read_as_empty() {
        let event: Event = serde_json::from_str(
            r#"{"title":null,"type":null,"date":"2024-03-05","time":null,"location":null,"description":null}"#,
        )
        .expect("parse event with nulls");
        assert!(event.title.is_empty());
        assert!(event.kind.is_none());
        assert!(event.location.is_empty());
        assert!(event.description.is_empty());
    }

    #[test]
    fn keeps_unknown_fields() {
        let event: Event = serde_json::from_str(
            r#"{"title":"Hackatón","date":"2024-03-04","speaker":"Ada","cancelled":true}"#,
        )
        .expect("parse event");
        assert!(event.is_cancelled());
        assert_eq!(
            event.extra.get("speaker"),
            Some(&serde_json::Value::String("Ada".to_string()))
        );

        let out = serde_json::to_value(&event).expect("serialize event");
        assert_eq!(out["speaker"], "Ada");
        assert!(out.get("dates").is_none());
    }

    #[test]
    fn events_on_matches_exact_keys_in_order() {
        let events = vec![
            Event {
                title: "a".to_string(),
                date: Some("2024-03-04".to_string()),
                ..Event::default()
            },
            Event {
                title: "b".to_string(),
                date: Some("2024-03-05".to_string()),
                ..Event::default()
            },
            Event {
                title: "c".to_string(),
                date: Some("2024-03-04".to_string()),
                ..Event::default()
            },
            Event {
                title: "undated".to_string(),
                ..Event::default()
            },
        ];

        let titles = events_on(&events, "2024-03-04")
            .into_iter()
            .map(|event| event.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["a", "c"]);
        assert!(events_on(&events, "2024-3-4").is_empty());
    }
}

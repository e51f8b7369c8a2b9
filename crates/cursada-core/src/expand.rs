use crate::event::Event;

/// Replaces every multi-date event with one copy per entry of its `dates`
/// list. Each copy carries that single `date` and no `dates`; everything else
/// is cloned from the original. Events without `dates` pass through as-is,
/// including malformed ones that have neither field.
#[tracing::instrument(skip_all, fields(input = events.len()))]
pub fn expand_events(events: &[Event]) -> Vec<Event> {
    let mut expanded = Vec::with_capacity(events.len());

    for event in events {
        match &event.dates {
            Some(dates) => {
                for date in dates {
                    expanded.push(Event {
                        date: Some(date.clone()),
                        dates: None,
                        ..event.clone()
                    });
                }
            }
            None => expanded.push(event.clone()),
        }
    }

    tracing::debug!(output = expanded.len(), "expanded calendar events");
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn multi(title: &str, dates: &[&str]) -> Event {
        Event {
            title: title.to_string(),
            kind: Some(EventType::Hackathon),
            dates: Some(dates.iter().map(|d| d.to_string()).collect()),
            time: "18:00".to_string(),
            location: "Aula Magna".to_string(),
            special_event: Some(true),
            ..Event::default()
        }
    }

    #[test]
    fn multi_date_event_becomes_one_record_per_date() {
        let events = vec![multi("A", &["2024-03-04", "2024-03-05"])];
        let expanded = expand_events(&events);

        assert_eq!(expanded.len(), 2);
        assert_eq!(expanded[0].date.as_deref(), Some("2024-03-04"));
        assert_eq!(expanded[1].date.as_deref(), Some("2024-03-05"));
        for event in &expanded {
            assert_eq!(event.title, "A");
            assert!(event.dates.is_none());
            assert_eq!(event.kind, Some(EventType::Hackathon));
            assert_eq!(event.location, "Aula Magna");
            assert!(event.is_special());
        }
    }

    #[test]
    fn single_date_events_are_untouched() {
        let single = Event {
            title: "Charla".to_string(),
            date: Some("2024-04-01".to_string()),
            cancelled: Some(true),
            ..Event::default()
        };
        let expanded = expand_events(std::slice::from_ref(&single));
        assert_eq!(expanded, vec![single]);
    }

    #[test]
    fn preserves_input_order_around_expansions() {
        let events = vec![
            Event {
                title: "first".to_string(),
                date: Some("2024-05-10".to_string()),
                ..Event::default()
            },
            multi("middle", &["2024-05-03", "2024-05-01"]),
            Event {
                title: "last".to_string(),
                ..Event::default()
            },
        ];

        let expanded = expand_events(&events);
        let summary = expanded
            .iter()
            .map(|event| (event.title.as_str(), event.date.as_deref()))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("first", Some("2024-05-10")),
                ("middle", Some("2024-05-03")),
                ("middle", Some("2024-05-01")),
                ("last", None),
            ]
        );
    }

    #[test]
    fn empty_dates_list_yields_nothing() {
        let expanded = expand_events(&[multi("ghost", &[])]);
        assert!(expanded.is_empty());
    }
}

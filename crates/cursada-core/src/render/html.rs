use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::classify::DayCell;
use crate::date::date_key;
use crate::details::{DayDetails, day_details};
use crate::event::Event;
use crate::grid::MonthView;
use crate::locale::{CANCELLED_EVENT_LABEL, SPECIAL_EVENT_LABEL};
use crate::period::Period;

/// Standalone page: month header, weekday row, day grid and one hidden
/// detail panel per day that has events.
pub fn render_month_page(
    view: &MonthView<'_>,
    events: &[Event],
    periods: &[Period],
    title: &str,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · " (view.header) }
                style { (PreEscaped(CSS)) }
            }
            body {
                div.calendar-container {
                    div.calendar-header {
                        h2 id="current-month" { (view.header) }
                    }
                    (render_month(view))
                    div id="event-details" {
                        @for cell in view.cells.iter().filter(|cell| cell.has_events()) {
                            @if let Some(details) = day_details(cell.date, events, periods) {
                                (render_day_details(&details))
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_month(view: &MonthView<'_>) -> Markup {
    html! {
        div.calendar-weekdays {
            @for label in &view.weekday_labels {
                div.weekday { (label) }
            }
        }
        div.calendar-grid id="calendar-grid" {
            @for cell in &view.cells {
                (render_day_cell(cell))
            }
        }
    }
}

pub fn render_day_cell(cell: &DayCell<'_>) -> Markup {
    html! {
        div class=(cell.class_attr()) data-date=(cell.key) data-tooltip=[cell.tooltip.as_deref()] {
            @if cell.has_events() {
                a class="day-link" href={ "#" (details_anchor(&cell.key)) } {
                    (render_day_body(cell))
                }
            } @else {
                (render_day_body(cell))
            }
        }
    }
}

fn render_day_body(cell: &DayCell<'_>) -> Markup {
    html! {
        div.day-number { (cell.date.day()) }
        @for line in &cell.preview {
            div.event-preview { (line) }
        }
    }
}

/// Fragment id shared by a busy day's cell link and its detail section.
pub fn details_anchor(key: &str) -> String {
    format!("dia-{key}")
}

pub fn render_day_details(details: &DayDetails<'_>) -> Markup {
    html! {
        @let key = date_key(details.date);
        section class="event-details" id=(details_anchor(&key)) data-date=(key) {
            h3 { (details.heading) }
            @if let Some(name) = &details.period_name {
                div.period-info { strong { "📅 " (name) } }
                br;
            }
            @for item in &details.items {
                div.event-item {
                    div class={ "event-type " (item.type_tag) } { (item.type_label) }
                    @if item.special {
                        div.special-badge { "✨ " (SPECIAL_EVENT_LABEL) }
                    }
                    @if item.cancelled {
                        div.cancelled-badge { "❌ " (CANCELLED_EVENT_LABEL) }
                    }
                    h4 class=[item.cancelled.then_some("cancelled")] { (item.event.title) }
                    p { strong { "Hora:" } " " (item.event.time) }
                    p { strong { "Ubicación:" } " " (item.event.location) }
                    p { (item.event.description) }
                }
            }
        }
    }
}

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; padding: 24px; background: #fafafa; }
.calendar-container { max-width: 980px; margin: 0 auto; }
.calendar-header h2 { text-align: center; }
.calendar-weekdays, .calendar-grid { display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px; }
.weekday { font-weight: 700; text-align: center; padding: 6px 0; }
.calendar-day { min-height: 84px; padding: 6px; background: #fff; border: 1px solid #e3e3e3; border-radius: 6px; }
.calendar-day.other-month { opacity: 0.45; }
.calendar-day.has-event { border-color: #2f6fdf; }
.calendar-day.special-event { background: #fff6d6; }
.calendar-day.cancelled-event .event-preview { text-decoration: line-through; }
.calendar-day.period-lectures { box-shadow: inset 0 -3px 0 #4caf50; }
.day-number { font-weight: 700; }
.event-preview { font-size: 0.8em; overflow: hidden; white-space: nowrap; text-overflow: ellipsis; }
.event-details { display: none; }
.event-details:target { display: block; }
.day-link { display: block; color: inherit; text-decoration: none; }
.event-item { margin-bottom: 20px; border-bottom: 1px solid #eee; padding-bottom: 15px; }
.event-item h4.cancelled { text-decoration: line-through; opacity: 0.7; }
"#;

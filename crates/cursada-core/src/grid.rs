use chrono::{NaiveDate, Weekday};

use crate::classify::{DayCell, classify_day};
use crate::cursor::CalendarCursor;
use crate::date::{add_days, start_of_week};
use crate::event::Event;
use crate::locale::weekday_labels;
use crate::period::Period;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    pub in_month: bool,
}

/// Dates shown for a month: leading days back to the week start, the month
/// itself, then trailing days until the last week is complete.
pub fn month_grid(cursor: CalendarCursor, week_start: Weekday) -> Vec<GridDay> {
    let first = cursor.first_day();
    let last = cursor.last_day();
    let grid_start = start_of_week(first, week_start);

    let span = (last - grid_start).num_days() + 1;
    let trailing = (7 - span % 7) % 7;

    (0..span + trailing)
        .map(|offset| {
            let date = add_days(grid_start, offset);
            GridDay {
                date,
                in_month: cursor.contains(date),
            }
        })
        .collect()
}

/// A fully classified month, ready for a renderer.
#[derive(Debug, Clone)]
pub struct MonthView<'a> {
    pub cursor: CalendarCursor,
    pub header: String,
    pub weekday_labels: Vec<&'static str>,
    pub cells: Vec<DayCell<'a>>,
}

impl<'a> MonthView<'a> {
    #[tracing::instrument(skip(events, periods), fields(month = cursor.month(), year = cursor.year()))]
    pub fn build(
        cursor: CalendarCursor,
        week_start: Weekday,
        events: &'a [Event],
        periods: &'a [Period],
    ) -> Self {
        let cells = month_grid(cursor, week_start)
            .into_iter()
            .map(|day| classify_day(day.date, day.in_month, events, periods))
            .collect::<Vec<_>>();

        tracing::debug!(
            cells = cells.len(),
            busy_days = cells.iter().filter(|cell| cell.has_events()).count(),
            "month view built"
        );

        Self {
            cursor,
            header: cursor.header(),
            weekday_labels: weekday_labels(week_start),
            cells,
        }
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell<'a>]> {
        self.cells.chunks(7)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;
    use crate::date::days_in_month;

    fn cursor(month0: u32, year: i32) -> CalendarCursor {
        CalendarCursor::new(month0, year).expect("valid cursor")
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn march_2024_starts_on_the_last_sunday_of_february() {
        // 2024-03-01 is a Friday.
        let grid = month_grid(cursor(2, 2024), Weekday::Sun);
        assert_eq!(grid.len(), 42);
        assert_eq!(grid[0].date, ymd(2024, 2, 25));
        assert!(!grid[0].in_month);
        assert_eq!(grid[5].date, ymd(2024, 3, 1));
        assert!(grid[5].in_month);
        assert_eq!(grid[41].date, ymd(2024, 4, 6));
        assert!(!grid[41].in_month);
    }

    #[test]
    fn trailing_days_complete_the_last_week() {
        // 2024-08-31 is a Saturday under a Monday start.
        let grid = month_grid(cursor(7, 2024), Weekday::Mon);
        let last = grid.last().expect("non-empty grid");
        assert_eq!(last.date, ymd(2024, 9, 1));
        assert!(!last.in_month);
    }

    #[test]
    fn month_starting_on_week_start_has_no_leading_days() {
        // 2024-09-01 is a Sunday.
        let grid = month_grid(cursor(8, 2024), Weekday::Sun);
        assert_eq!(grid[0].date, ymd(2024, 9, 1));
        assert!(grid[0].in_month);
    }

    #[test]
    fn every_grid_is_whole_weeks_of_ascending_days() {
        for year in [2023, 2024, 2025] {
            for month0 in 0..12 {
                for week_start in [Weekday::Sun, Weekday::Mon] {
                    let c = cursor(month0, year);
                    let grid = month_grid(c, week_start);
                    assert_eq!(grid.len() % 7, 0);
                    assert!(grid.windows(2).all(|pair| {
                        pair[0].date.succ_opt() == Some(pair[1].date)
                    }));
                    let in_month = grid.iter().filter(|day| day.in_month).count();
                    assert_eq!(in_month as u32, days_in_month(year, c.month()));
                    assert_eq!(grid[0].date.weekday(), week_start);
                }
            }
        }
    }

    #[test]
    fn month_view_classifies_every_cell() {
        let events = vec![Event {
            title: "Taller".to_string(),
            date: Some("2024-02-26".to_string()),
            ..Event::default()
        }];
        let view = MonthView::build(cursor(2, 2024), Weekday::Sun, &events, &[]);
        assert_eq!(view.header, "Marzo 2024");
        assert_eq!(view.weekday_labels[0], "Domingo");
        assert_eq!(view.weeks().count(), 6);

        let leading = &view.cells[1];
        assert_eq!(leading.key, "2024-02-26");
        assert_eq!(
            leading.class_attr(),
            "calendar-day other-month has-event"
        );
    }
}

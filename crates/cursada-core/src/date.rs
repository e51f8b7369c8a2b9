use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Canonical text form of a calendar date, as found in event and period records.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as its `YYYY-MM-DD` key. Every grid path goes through here.
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` key. Malformed input yields `None` and never matches a day.
#[must_use]
pub fn parse_date_key(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_KEY_FORMAT).ok()
}

pub fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month >= 12 {
        (year.saturating_add(1), 1_u32)
    } else {
        (year, month + 1)
    };
    add_days(first_day_of_month(next_year, next_month), -1)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    last_day_of_month(year, month).day()
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(date)
}

/// Walks back from `day` to the closest `week_start`.
pub fn start_of_week(day: NaiveDate, week_start: Weekday) -> NaiveDate {
    let day_idx = day.weekday().num_days_from_monday() as i64;
    let start_idx = week_start.num_days_from_monday() as i64;
    let diff = (7 + day_idx - start_idx) % 7;
    add_days(day, -diff)
}

pub fn parse_week_start(raw: &str) -> Option<Weekday> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "sunday" | "sun" | "domingo" => Some(Weekday::Sun),
        "monday" | "mon" | "lunes" => Some(Weekday::Mon),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn date_key_zero_pads_month_and_day() {
        assert_eq!(date_key(ymd(2024, 3, 4)), "2024-03-04");
        assert_eq!(date_key(ymd(2024, 11, 30)), "2024-11-30");
    }

    #[test]
    fn parse_date_key_rejects_garbage() {
        assert_eq!(parse_date_key("2024-03-04"), Some(ymd(2024, 3, 4)));
        assert_eq!(parse_date_key("not a date"), None);
        assert_eq!(parse_date_key("2024-02-30"), None);
        assert_eq!(parse_date_key(""), None);
    }

    #[test]
    fn month_bounds_handle_leap_years_and_december() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(last_day_of_month(2024, 12), ymd(2024, 12, 31));
    }

    #[test]
    fn start_of_week_respects_configured_start() {
        // 2024-03-06 is a Wednesday.
        let day = ymd(2024, 3, 6);
        assert_eq!(start_of_week(day, Weekday::Sun), ymd(2024, 3, 3));
        assert_eq!(start_of_week(day, Weekday::Mon), ymd(2024, 3, 4));
        assert_eq!(start_of_week(ymd(2024, 3, 3), Weekday::Sun), ymd(2024, 3, 3));
    }

    #[test]
    fn parses_week_start_names() {
        assert_eq!(parse_week_start("Monday"), Some(Weekday::Mon));
        assert_eq!(parse_week_start(" domingo "), Some(Weekday::Sun));
        assert_eq!(parse_week_start("friday"), None);
    }
}

use anyhow::anyhow;
use chrono::{Datelike, Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::date::{first_day_of_month, last_day_of_month};
use crate::locale::month_name;

/// The month being displayed. Navigation hands back a new cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    month0: u32,
    year: i32,
}

impl CalendarCursor {
    /// Builds a cursor from a 0-based month.
    pub fn new(month0: u32, year: i32) -> anyhow::Result<Self> {
        if month0 > 11 {
            return Err(anyhow!("month index out of range (0-11): {month0}"));
        }
        if !Self::supported_years().contains(&year) {
            let range = Self::supported_years();
            return Err(anyhow!(
                "year out of range ({}-{}): {year}",
                range.start(),
                range.end()
            ));
        }
        Ok(Self { month0, year })
    }

    /// Years whose whole padded grid stays inside chrono's date range.
    pub fn supported_years() -> std::ops::RangeInclusive<i32> {
        (NaiveDate::MIN.year() + 1)..=(NaiveDate::MAX.year() - 1)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month0: date.month0(),
            year: date.year(),
        }
    }

    /// Cursor for today's month, in `timezone` when given, else the local clock.
    pub fn today(timezone: Option<Tz>) -> Self {
        let today = match timezone {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        };
        Self::from_date(today)
    }

    pub fn month0(self) -> u32 {
        self.month0
    }

    /// 1-based month, as chrono counts them.
    pub fn month(self) -> u32 {
        self.month0 + 1
    }

    pub fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn advance(self) -> Self {
        if self.month0 == 11 {
            Self {
                month0: 0,
                year: self.year.saturating_add(1),
            }
        } else {
            Self {
                month0: self.month0 + 1,
                ..self
            }
        }
    }

    #[must_use]
    pub fn retreat(self) -> Self {
        if self.month0 == 0 {
            Self {
                month0: 11,
                year: self.year.saturating_sub(1),
            }
        } else {
            Self {
                month0: self.month0 - 1,
                ..self
            }
        }
    }

    /// Applies `steps` advances (positive) or retreats (negative).
    #[must_use]
    pub fn shift(self, steps: i32) -> Self {
        let mut cursor = self;
        for _ in 0..steps.unsigned_abs() {
            cursor = if steps > 0 {
                cursor.advance()
            } else {
                cursor.retreat()
            };
        }
        cursor
    }

    pub fn first_day(self) -> NaiveDate {
        first_day_of_month(self.year, self.month())
    }

    pub fn last_day(self) -> NaiveDate {
        last_day_of_month(self.year, self.month())
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// "Marzo 2024".
    pub fn header(self) -> String {
        format!("{} {}", month_name(self.month0), self.year)
    }
}

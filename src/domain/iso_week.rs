use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use serde::{Serialize, Serializer};
use std::fmt;

use super::date_key::parse_local_date;

/// ISO-8601 week number paired with its week-year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IsoWeek {
    pub year: i32,
    pub week: u32,
}

/// Compute the ISO week of a calendar date.
///
/// Weeks start on Monday. A week belongs to the year holding most of its
/// days, which is always the year of its Thursday: late-December dates can
/// land in week 1 of the next year and early-January dates in week 52/53 of
/// the previous one.
pub fn iso_week(date: NaiveDate) -> IsoWeek {
    let day_of_week = i64::from(date.weekday().num_days_from_monday());
    let monday = date - TimeDelta::days(day_of_week);
    let thursday = monday + TimeDelta::days(3);

    IsoWeek {
        year: thursday.year(),
        week: thursday.ordinal0() / 7 + 1,
    }
}

pub fn current_week() -> IsoWeek {
    iso_week(Local::now().date_naive())
}

pub fn is_current_week(week: u32, year: i32) -> bool {
    current_week() == IsoWeek { year, week }
}

/// Sortable bucket key for a week, rendered as `{year}-W{week:02}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    /// Bucket for tournaments whose date could not be read
    pub const UNKNOWN: WeekKey = WeekKey { year: 0, week: 0 };

    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl From<IsoWeek> for WeekKey {
    fn from(iso: IsoWeek) -> Self {
        Self {
            year: iso.year,
            week: iso.week,
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl Serialize for WeekKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Week of a tournament's `YYYY/MM/DD HH:mm` date; week 0 of year 0 when unreadable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekInfo {
    pub week: u32,
    pub year: i32,
}

impl WeekInfo {
    pub fn key(&self) -> WeekKey {
        WeekKey {
            year: self.year,
            week: self.week,
        }
    }

    pub fn is_known(&self) -> bool {
        self.week != 0
    }

    /// Heading such as `2026. 3. hét`; empty for an unreadable date
    pub fn display(&self, week_word: &str) -> String {
        if !self.is_known() {
            return String::new();
        }
        format!("{}. {}. {}", self.year, self.week, week_word)
    }

    pub fn is_current(&self) -> bool {
        self.is_known() && is_current_week(self.week, self.year)
    }
}

pub fn week_info(local_date: &str) -> WeekInfo {
    match parse_local_date(local_date) {
        Some(date) => {
            let iso = iso_week(date);
            WeekInfo {
                week: iso.week,
                year: iso.year,
            }
        }
        None => WeekInfo { week: 0, year: 0 },
    }
}

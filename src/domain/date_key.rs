use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;

const LOCAL_DATE_FORMAT: &str = "%Y/%m/%d";
const LOCAL_DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Calendar-day bucket key, rendered as `YYYY-MM-DD`
///
/// Built from a local calendar date, so a tournament at 00:30 never shifts
/// into the previous day the way a UTC conversion would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl From<NaiveDateTime> for DateKey {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime.date())
    }
}

/// Format any local date or date-time as its `YYYY-MM-DD` key
pub fn date_key(date: impl Into<DateKey>) -> String {
    date.into().to_string()
}

pub fn today_date_key() -> String {
    DateKey::today().to_string()
}

/// Parse the date part of a `YYYY/MM/DD HH:mm` string
pub fn parse_local_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split_whitespace().next()?;
    NaiveDate::parse_from_str(date_part, LOCAL_DATE_FORMAT).ok()
}

pub fn parse_local_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), LOCAL_DATETIME_FORMAT).ok()
}

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use std::fmt::Display;

use crate::domain::TournamentSearchRequest;

const ATOM_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
const GPS_RANGE: &str = "10000";

/// Search for tournaments from today onwards in the given nations.
///
/// `startDate` is today's midnight and `webOpenDate` yesterday 23:00, both
/// in the time zone of `now`.
pub fn build_search_request<Tz>(
    now: &DateTime<Tz>,
    nation_codes: &[String],
    index_start: usize,
    index_count: usize,
) -> TournamentSearchRequest
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let today = now.date_naive();
    let start_of_day = today.and_time(NaiveTime::MIN);
    let web_open = start_of_day - TimeDelta::hours(1);

    TournamentSearchRequest {
        keyword: String::new(),
        nation_codes: nation_codes.to_vec(),
        state_codes: None,
        s_date: format_atom(now),
        start_date: format_atom(&in_zone(now, start_of_day)),
        e_date: None,
        end_date: None,
        start_time: None,
        start_time_select: None,
        end_time: None,
        end_time_select: None,
        start_seats: None,
        event_type: None,
        structure: None,
        reserveable: false,
        gps_search: false,
        gps_range: GPS_RANGE.to_string(),
        latitude: None,
        longitude: None,
        age_limits: None,
        web_open_date: format_atom(&in_zone(now, web_open)),
        index_start,
        index_count,
        event_grp_id: 0,
    }
}

/// Same search, moved to another result window
pub fn with_window(request: &TournamentSearchRequest, index_start: usize, index_count: usize) -> TournamentSearchRequest {
    TournamentSearchRequest {
        index_start,
        index_count,
        ..request.clone()
    }
}

/// Attach `now`'s zone to a wall-clock time; a time skipped by a DST jump falls back to `now`
fn in_zone<Tz: TimeZone>(now: &DateTime<Tz>, local: NaiveDateTime) -> DateTime<Tz> {
    now.timezone()
        .from_local_datetime(&local)
        .earliest()
        .unwrap_or_else(|| now.clone())
}

fn format_atom<Tz>(value: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.format(ATOM_FORMAT).to_string()
}

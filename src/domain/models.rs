use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::date_key::{parse_local_date, parse_local_datetime};

/// Tournament record as returned by the tournament search API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub tournament_no: String,
    #[serde(default)]
    pub tournament_name: String,
    #[serde(default)]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub event_url: Option<String>,
    #[serde(default)]
    pub structure: Structure,
    #[serde(default)]
    pub reserve_state: ReserveState,
    #[serde(default)]
    pub age_limit: Option<String>,
    #[serde(default)]
    pub store_code: Option<String>,
    #[serde(default)]
    pub store_name: String,
    #[serde(default)]
    pub store_address: Option<String>,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub nation_code: Option<String>,
    #[serde(default)]
    pub forecast_player_number: i32,
    #[serde(default)]
    pub local_player_number: i32,
    #[serde(default)]
    pub rest_reserve_player_number: i32,
    #[serde(default)]
    pub rest_reserved_all_player_number: i32,
    #[serde(default)]
    pub tournament_status: Option<String>,
    #[serde(default)]
    pub information: Option<String>,
    /// Local start, formatted `YYYY/MM/DD HH:mm`
    pub local_tournament_date: String,
    #[serde(default)]
    pub local_tournament_date_end: Option<String>,
    #[serde(default)]
    pub local_entry_start_date: Option<String>,
    #[serde(default)]
    pub local_entry_end_date: Option<String>,
}

/// Venue details nested in a tournament record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub address1: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub state_name: String,
    #[serde(default)]
    pub tel_no: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Structure {
    Free,
    #[serde(rename = "SWISSDRAW")]
    SwissDraw,
    SingleElimination,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReserveState {
    Reserveable,
    #[default]
    #[serde(other)]
    Disabled,
}

impl Tournament {
    /// Store name shown in filters; the location name stands in when the store name is blank
    pub fn display_store_name(&self) -> Option<&str> {
        [self.store_name.as_str(), self.location_name.as_str()]
            .into_iter()
            .map(str::trim)
            .find(|name| !name.is_empty())
    }

    pub fn local_date(&self) -> Option<NaiveDate> {
        parse_local_date(&self.local_tournament_date)
    }

    pub fn local_start(&self) -> Option<NaiveDateTime> {
        parse_local_datetime(&self.local_tournament_date)
    }

    pub fn phone(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.tel_no.as_deref())
    }

    pub fn has_open_spots(&self) -> bool {
        self.reserve_state == ReserveState::Reserveable && self.rest_reserve_player_number > 0
    }
}

// --- API Request/Response Structures ---

/// Body posted to the tournament search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSearchRequest {
    pub keyword: String,
    pub nation_codes: Vec<String>,
    pub state_codes: Option<Vec<String>>,
    #[serde(rename = "sDate")]
    pub s_date: String,
    pub start_date: String,
    #[serde(rename = "eDate")]
    pub e_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<i64>,
    pub start_time_select: Option<i64>,
    pub end_time: Option<i64>,
    pub end_time_select: Option<i64>,
    pub start_seats: Option<i64>,
    pub event_type: Option<i64>,
    pub structure: Option<String>,
    pub reserveable: bool,
    pub gps_search: bool,
    pub gps_range: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub age_limits: Option<Vec<i64>>,
    pub web_open_date: String,
    pub index_start: usize,
    pub index_count: usize,
    pub event_grp_id: i64,
}

/// Search endpoint response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentSearchResponse {
    #[serde(default)]
    pub result: Vec<Tournament>,
    #[serde(default)]
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "tournamentNo": "HU-0001",
        "tournamentName": "Weekly Locals",
        "eventId": 12,
        "eventName": "Local Event",
        "eventUrl": null,
        "structure": "SWISSDRAW",
        "reserveState": "RESERVEABLE",
        "storeName": "",
        "locationName": "Metagame Budapest",
        "address": "Budapest, Example utca 1.",
        "location": { "locationName": "Metagame", "telNo": "+36 1 234 5678" },
        "localPlayerNumber": 8,
        "forecastPlayerNumber": 16,
        "restReservePlayerNumber": 4,
        "localTournamentDate": "2026/01/15 15:00",
        "localTournamentDateEnd": "",
        "someFieldWeIgnore": [1, 2, 3]
    }"#;

    #[test]
    fn test_tournament_deserialization() {
        let tournament: Tournament = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(tournament.tournament_no, "HU-0001");
        assert_eq!(tournament.structure, Structure::SwissDraw);
        assert_eq!(tournament.reserve_state, ReserveState::Reserveable);
        assert_eq!(tournament.phone(), Some("+36 1 234 5678"));
        assert!(tournament.has_open_spots());
        assert_eq!(tournament.local_date(), NaiveDate::from_ymd_opt(2026, 1, 15));
    }

    #[test]
    fn test_store_name_falls_back_to_location() {
        let tournament: Tournament = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(tournament.display_store_name(), Some("Metagame Budapest"));
    }

    #[test]
    fn test_unknown_enum_values_are_tolerated() {
        let json = r#"{
            "tournamentNo": "X",
            "structure": "ROUND_ROBIN",
            "reserveState": "SOMETHING_NEW",
            "localTournamentDate": "2026/02/01 10:00"
        }"#;
        let tournament: Tournament = serde_json::from_str(json).unwrap();

        assert_eq!(tournament.structure, Structure::Unknown);
        assert_eq!(tournament.reserve_state, ReserveState::Disabled);
        assert_eq!(tournament.display_store_name(), None);
    }
}

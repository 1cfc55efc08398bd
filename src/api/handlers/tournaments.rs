use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::SystemTime;

use super::{AppState, SelectionParams, error_response, internal_error};
use crate::api::models::{category_views, day_groups, week_groups};
use crate::api::parsers::parse_selection;
use crate::domain::stores::store_overview;
use crate::domain::{FilterSelection, Tournament, group_by_day, group_by_week};
use crate::i18n::Language;
use crate::services::fetch::{TOURNAMENTS_KEY, load_cached_tournaments};

const DATA_MISSING: &str = "Tournaments data not available. Run the fetch command.";
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// The cached search response, byte for byte
pub async fn get_tournaments(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let modified = match state.cache.last_modified(TOURNAMENTS_KEY) {
        Ok(Some(modified)) => modified,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, DATA_MISSING),
        Err(e) => return internal_error(e),
    };
    let last_modified = http_date(modified);

    if not_modified_since(&headers, modified) {
        return (StatusCode::NOT_MODIFIED, [(header::LAST_MODIFIED, last_modified)]).into_response();
    }

    let body = match state.cache.read_bytes(TOURNAMENTS_KEY) {
        Ok(Some(body)) => body,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, DATA_MISSING),
        Err(e) => return internal_error(e),
    };

    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::LAST_MODIFIED, last_modified),
        ],
        body,
    )
        .into_response()
}

pub async fn get_weeks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
    headers: HeaderMap,
) -> Response {
    let (tournaments, selection, language) = match prepare(&state, &params, &headers) {
        Ok(prepared) => prepared,
        Err(response) => return response,
    };

    let filtered = selection.apply(&tournaments);
    Json(week_groups(group_by_week(filtered), language)).into_response()
}

pub async fn get_days(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
    headers: HeaderMap,
) -> Response {
    let (tournaments, selection, language) = match prepare(&state, &params, &headers) {
        Ok(prepared) => prepared,
        Err(response) => return response,
    };

    let filtered = selection.apply(&tournaments);
    Json(day_groups(group_by_day(filtered), language)).into_response()
}

pub async fn get_stores(State(state): State<Arc<AppState>>) -> Response {
    match load_cached_tournaments(&state.cache) {
        Ok(tournaments) => Json(store_overview(&tournaments)).into_response(),
        Err(e) => internal_error(e),
    }
}

pub async fn get_categories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectionParams>,
    headers: HeaderMap,
) -> Response {
    let language = language_for(&state, &params, &headers);
    match load_cached_tournaments(&state.cache) {
        Ok(tournaments) => Json(category_views(&tournaments, language)).into_response(),
        Err(e) => internal_error(e),
    }
}

// --- Helper Methods ---

fn prepare(
    state: &AppState,
    params: &SelectionParams,
    headers: &HeaderMap,
) -> Result<(Vec<Tournament>, FilterSelection, Language), Response> {
    let selection = parse_selection(params.stores.as_deref(), params.categories.as_deref())
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;
    let tournaments = load_cached_tournaments(&state.cache).map_err(internal_error)?;
    let language = language_for(state, params, headers);
    Ok((tournaments, selection, language))
}

fn language_for(state: &AppState, params: &SelectionParams, headers: &HeaderMap) -> Language {
    let (saved, fallback) = state
        .preferences
        .lock()
        .map(|prefs| (prefs.stored_language(), prefs.language()))
        .unwrap_or_default();
    params.language(headers, saved, fallback)
}

fn http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(HTTP_DATE_FORMAT).to_string()
}

/// True when the client copy is at least as new as the file, at one-second precision
fn not_modified_since(headers: &HeaderMap, modified: SystemTime) -> bool {
    let Some(since) = headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| DateTime::parse_from_rfc2822(h).ok())
    else {
        return false;
    };
    DateTime::<Utc>::from(modified).timestamp() <= since.timestamp()
}

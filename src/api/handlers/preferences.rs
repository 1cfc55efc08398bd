use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{AppState, error_response, internal_error};
use crate::preferences::PreferenceSnapshot;

pub async fn get_preferences(State(state): State<Arc<AppState>>) -> Response {
    match state.preferences.lock() {
        Ok(prefs) => Json(prefs.snapshot()).into_response(),
        Err(_) => error_response(StatusCode::INTERNAL_SERVER_ERROR, "Preferences unavailable"),
    }
}

pub async fn put_preferences(
    State(state): State<Arc<AppState>>,
    Json(snapshot): Json<PreferenceSnapshot>,
) -> Response {
    let mut prefs = match state.preferences.lock() {
        Ok(prefs) => prefs,
        Err(_) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Preferences unavailable"),
    };

    match prefs.apply(snapshot) {
        Ok(()) => Json(prefs.snapshot()).into_response(),
        Err(e) => internal_error(e),
    }
}

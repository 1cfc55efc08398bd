use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    admin::admin_refresh,
    preferences::{get_preferences, put_preferences},
    tournaments::{get_categories, get_days, get_stores, get_tournaments, get_weeks},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/tournaments", get(get_tournaments))
        .route("/api/tournaments/weeks", get(get_weeks))
        .route("/api/tournaments/days", get(get_days))
        .route("/api/stores", get(get_stores))
        .route("/api/categories", get(get_categories))
        .route("/api/preferences", get(get_preferences).put(put_preferences))
        .route("/api/admin/refresh", post(admin_refresh))
        .with_state(state)
}

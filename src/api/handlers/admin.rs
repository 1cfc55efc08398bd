use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use log::{error, info, warn};
use std::sync::Arc;

use super::{AppState, error_response};
use crate::services::fetch::FetchService;

pub async fn admin_refresh(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let Some(token) = state.config.server.admin_token.as_deref() else {
        warn!("Refresh requested but no admin token is configured");
        return error_response(StatusCode::UNAUTHORIZED, "Refresh is disabled");
    };

    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());
    if auth_header != Some(format!("Bearer {}", token).as_str()) {
        return error_response(StatusCode::UNAUTHORIZED, "Invalid admin token");
    }

    let Some(guard) = state.begin_refresh() else {
        return error_response(StatusCode::CONFLICT, "A refresh is already running");
    };

    tokio::spawn(async move {
        info!("Admin triggered refresh started");
        let result = async {
            let mut service = FetchService::new(&guard.state().config)?;
            service.run().await
        }
        .await;

        match result {
            Ok(count) => info!("Admin triggered refresh stored {} tournaments", count),
            Err(e) => error!("Refresh failed: {:?}", e),
        }
    });

    (StatusCode::ACCEPTED, "Refresh triggered").into_response()
}

use axum::Json;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::models::ErrorResponse;
use crate::cache::Cache;
use crate::config::settings::AppConfig;
use crate::i18n::Language;
use crate::preferences::{JsonFileStore, Preferences};

pub mod admin;
pub mod preferences;
pub mod tournaments;

pub struct AppState {
    pub config: AppConfig,
    pub cache: Cache,
    pub preferences: Mutex<Preferences<JsonFileStore>>,
    refreshing: AtomicBool,
}

impl AppState {
    pub fn new(config: AppConfig, cache: Cache, preferences: Preferences<JsonFileStore>) -> Self {
        Self {
            config,
            cache,
            preferences: Mutex::new(preferences),
            refreshing: AtomicBool::new(false),
        }
    }

    /// Claim the refresh slot; `None` while another refresh is still running
    pub fn begin_refresh(self: &Arc<Self>) -> Option<RefreshGuard> {
        self.refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RefreshGuard {
                state: Arc::clone(self),
            })
    }
}

/// Holds the refresh slot and releases it when dropped
pub struct RefreshGuard {
    state: Arc<AppState>,
}

impl RefreshGuard {
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.state.refreshing.store(false, Ordering::Release);
    }
}

/// Query shared by the filtered views: comma-separated store names and categories
#[derive(Debug, Default, Deserialize)]
pub struct SelectionParams {
    pub stores: Option<String>,
    pub categories: Option<String>,
    pub lang: Option<String>,
}

impl SelectionParams {
    /// Explicit `lang` first, then the saved preference, then `Accept-Language`, then `fallback`
    pub fn language(&self, headers: &HeaderMap, saved: Option<Language>, fallback: Language) -> Language {
        if let Some(lang) = self.lang.as_deref() {
            return Language::detect(Some(lang));
        }
        if let Some(saved) = saved {
            return saved;
        }
        match headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|h| h.to_str().ok())
        {
            Some(tag) => Language::detect(Some(tag)),
            None => fallback,
        }
    }
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

pub(crate) fn internal_error(e: anyhow::Error) -> Response {
    log::error!("Request failed: {:?}", e);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

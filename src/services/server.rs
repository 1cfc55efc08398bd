use anyhow::{Context, Result};
use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::cache::Cache;
use crate::config::settings::AppConfig;
use crate::i18n::Language;
use crate::preferences::{JsonFileStore, Preferences};
use crate::services::fetch::FetchService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(self) -> Result<()> {
        let cache = Cache::new(&self.config.storage.cache_dir)?;
        let store = JsonFileStore::open(&self.config.storage.preferences_path)?;
        let default_language = Language::detect(std::env::var("LANG").ok().as_deref());
        let preferences = Preferences::load(store, default_language);

        let refresh_minutes = self.config.server.refresh_minutes;
        let state = Arc::new(AppState::new(self.config, cache, preferences));

        if let Some(minutes) = refresh_minutes.filter(|m| *m > 0) {
            spawn_periodic_refresh(state.clone(), minutes);
        }

        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

fn spawn_periodic_refresh(state: Arc<AppState>, minutes: u64) {
    info!("Refreshing tournaments every {} minutes", minutes);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_period(minutes));
        loop {
            interval.tick().await;
            let Some(guard) = state.begin_refresh() else {
                warn!("Skipping scheduled refresh: another refresh is still running");
                continue;
            };
            let result = async {
                let mut service = FetchService::new(&guard.state().config)?;
                service.run().await
            }
            .await;

            match result {
                Ok(count) => info!("Scheduled refresh stored {} tournaments", count),
                Err(e) => error!("Scheduled refresh failed: {:?}", e),
            }
        }
    });
}

fn refresh_period(minutes: u64) -> Duration {
    Duration::from_secs(minutes.saturating_mul(60))
}

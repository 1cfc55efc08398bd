use anyhow::{Context, Result};
use log::{info, warn};
use serde_json::{Value, json};

use crate::api::KonamiClient;
use crate::cache::Cache;
use crate::config::settings::AppConfig;
use crate::domain::{Tournament, TournamentCollection, TournamentSearchResponse};

/// Cache key of the stored search response
pub const TOURNAMENTS_KEY: &str = "tournaments";

pub struct FetchService {
    cache: Cache,
    api_client: KonamiClient,
}

impl FetchService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            cache: Cache::new(&config.storage.cache_dir)?,
            api_client: KonamiClient::new(&config.fetch)?,
        })
    }

    /// Fetch upcoming tournaments and replace the cached listing; returns the stored count
    pub async fn run(&mut self) -> Result<usize> {
        info!("=== Fetching Tournaments ===");

        let search = self.api_client.fetch_upcoming().await?;
        info!(
            "  → API reported {} tournaments, received {}",
            search.reported_count,
            search.items.len()
        );

        let (items, collection) = collect_unique(search.items);
        let count = collection.len();

        self.cache
            .save_raw(TOURNAMENTS_KEY, &json!({ "result": items, "count": count }))?;
        info!(
            "Saved {} tournaments to {}",
            count,
            self.cache.path(TOURNAMENTS_KEY).display()
        );
        Ok(count)
    }
}

/// Drop entries that do not parse or repeat a `tournamentNo`, keeping the raw JSON of the rest
fn collect_unique(raw_items: Vec<Value>) -> (Vec<Value>, TournamentCollection) {
    let mut collection = TournamentCollection::new();
    let mut kept = Vec::with_capacity(raw_items.len());

    for raw in raw_items {
        match serde_json::from_value::<Tournament>(raw.clone()) {
            Ok(tournament) => {
                if collection.add(tournament) {
                    kept.push(raw);
                }
            }
            Err(e) => warn!("Skipping unreadable tournament entry: {}", e),
        }
    }

    (kept, collection)
}

/// Tournaments from the cached search response; empty when nothing was fetched yet
pub fn load_cached_tournaments(cache: &Cache) -> Result<Vec<Tournament>> {
    let response: Option<TournamentSearchResponse> = cache
        .load_parsed(TOURNAMENTS_KEY)
        .context("Failed to load cached tournaments")?;
    Ok(response.map(|r| r.result).unwrap_or_default())
}

use anyhow::{Context, Result, bail};
use chrono::Local;
use log::{info, warn};
use serde_json::Value;

use crate::api::parsers;
use crate::api::search_request::{build_search_request, with_window};
use crate::config::settings::FetchSettings;
use crate::domain::{FetchProgress, TournamentSearchRequest};
use crate::http::RateLimitedClient;
use crate::pagination::{PageIterator, PaginationConfig};

/// Raw search results gathered across all pages
#[derive(Debug, Default)]
pub struct SearchResult {
    pub items: Vec<Value>,
    pub reported_count: usize,
}

/// Client for the card-game network tournament search
pub struct KonamiClient {
    client: RateLimitedClient,
    api_url: String,
    nation_codes: Vec<String>,
    pagination: PaginationConfig,
}

impl KonamiClient {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )?;

        let mut pagination = PaginationConfig::new(settings.page_size);
        if let Some(max) = settings.max_pages {
            pagination = pagination.with_max_pages(max);
        }

        Ok(Self {
            client,
            api_url: settings.api_url.clone(),
            nation_codes: settings.nation_codes.clone(),
            pagination,
        })
    }

    /// Fetch every upcoming tournament, starting from today
    pub async fn fetch_upcoming(&mut self) -> Result<SearchResult> {
        let template = build_search_request(
            &Local::now(),
            &self.nation_codes,
            0,
            self.pagination.page_size,
        );
        self.fetch_all(&template).await
    }

    /// Walk the result windows of `template` until the reported count is reached
    pub async fn fetch_all(&mut self, template: &TournamentSearchRequest) -> Result<SearchResult> {
        info!("Calling tournament search API: {}", self.api_url);

        let mut pages = PageIterator::new(self.pagination.clone());
        let mut progress = FetchProgress::new();
        let mut result = SearchResult::default();

        loop {
            if pages.has_reached_max() {
                warn!(
                    "Stopping after {} pages with {}/{} tournaments",
                    pages.current_page(),
                    progress.collected(),
                    result.reported_count
                );
                break;
            }

            let request = with_window(template, pages.index_start(), pages.index_count());
            let data = self.search_page(&request).await?;

            let items = parsers::result_items(&data)?;
            let page_len = items.len();
            result.reported_count = parsers::reported_count(&data, progress.collected() + page_len);
            progress.record_page(page_len, result.reported_count);
            result.items.extend(items);

            if Self::is_last_page(&progress, page_len, pages.index_count()) {
                break;
            }

            pages.advance();
        }

        info!(
            "Fetched {} tournaments in {} pages",
            result.items.len(),
            progress.pages()
        );
        Ok(result)
    }

    /// Post one search request and return the decoded body
    pub async fn search_page(&mut self, request: &TournamentSearchRequest) -> Result<Value> {
        let response = self.client.post_json(&self.api_url, request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Tournament API error: {} {}", status, body);
        }

        response
            .json()
            .await
            .context("Invalid JSON response from tournament API")
    }

    // --- Helper Methods ---

    fn is_last_page(progress: &FetchProgress, page_len: usize, page_size: usize) -> bool {
        page_len == 0 || page_len < page_size || progress.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer, page_size: usize) -> FetchSettings {
        FetchSettings {
            api_url: format!("{}/tournament_gsearch", server.uri()),
            page_size,
            rate_limit_ms: 0,
            ..FetchSettings::default()
        }
    }

    fn item(no: &str) -> Value {
        json!({ "tournamentNo": no, "localTournamentDate": "2026/01/15 15:00" })
    }

    #[tokio::test]
    async fn test_single_page() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tournament_gsearch"))
            .and(header_exists("accept"))
            .and(body_partial_json(json!({ "nationCodes": ["HU"], "indexStart": 0 })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "result": [item("1"), item("2")], "count": 2 })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut client = KonamiClient::new(&settings_for(&server, 50)).unwrap();
        let result = client.fetch_upcoming().await.unwrap();

        assert_eq!(result.items.len(), 2);
        assert_eq!(result.reported_count, 2);
    }

    #[tokio::test]
    async fn test_follows_pages_until_count_reached() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "indexStart": 0, "indexCount": 2 })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "result": [item("1"), item("2")], "count": 4 })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "indexStart": 2, "indexCount": 2 })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "result": [item("3"), item("4")], "count": 4 })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut client = KonamiClient::new(&settings_for(&server, 2)).unwrap();
        let result = client.fetch_upcoming().await.unwrap();

        let numbers: Vec<&str> = result
            .items
            .iter()
            .filter_map(|i| i["tournamentNo"].as_str())
            .collect();
        assert_eq!(numbers, vec!["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let mut client = KonamiClient::new(&settings_for(&server, 50)).unwrap();
        let err = client.fetch_upcoming().await.unwrap_err();

        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("maintenance"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let mut client = KonamiClient::new(&settings_for(&server, 50)).unwrap();
        assert!(client.fetch_upcoming().await.is_err());
    }
}

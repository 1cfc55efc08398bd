use std::env;
use std::path::PathBuf;

pub struct FetchSettings {
    pub api_url: String,
    pub nation_codes: Vec<String>,
    pub page_size: usize,
    pub max_pages: Option<usize>,
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_url: "https://cardgame-network.konami.net/mt/user/rest/tournament/EU/tournament_gsearch"
                .to_string(),
            nation_codes: vec!["HU".to_string()],
            page_size: 50,
            max_pages: Some(20),
            rate_limit_ms: 500,
            user_agent: "TournamentCalendar/1.0",
            timeout_secs: 30,
        }
    }
}

pub struct StorageSettings {
    pub cache_dir: PathBuf,
    pub preferences_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("cache"),
            preferences_path: PathBuf::from("preferences.json"),
        }
    }
}

#[derive(Default)]
pub struct ServerSettings {
    /// Bearer token for the refresh endpoint; refresh is refused when unset
    pub admin_token: Option<String>,
    pub refresh_minutes: Option<u64>,
}

pub struct AppConfig {
    pub fetch: FetchSettings,
    pub storage: StorageSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            fetch: FetchSettings::default(),
            storage: StorageSettings::default(),
            server: ServerSettings::default(),
        }
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(url) = value("TOURNAMENTS_API_URL") {
            config.fetch.api_url = url;
        }
        if let Some(codes) = value("TOURNAMENTS_NATION_CODES") {
            config.fetch.nation_codes = parse_list(&codes);
        }
        if let Some(dir) = value("TOURNAMENTS_CACHE_DIR") {
            config.storage.cache_dir = PathBuf::from(dir);
        }
        if let Some(path) = value("PREFERENCES_PATH") {
            config.storage.preferences_path = PathBuf::from(path);
        }
        config.server.admin_token = value("TOURNAMENTS_ADMIN_TOKEN");
        config
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.fetch.nation_codes, vec!["HU"]);
        assert_eq!(config.fetch.page_size, 50);
        assert_eq!(config.storage.cache_dir, PathBuf::from("cache"));
        assert!(config.server.admin_token.is_none());
    }

    #[test]
    fn test_environment_overrides() {
        let config = config_from(&[
            ("TOURNAMENTS_API_URL", "http://localhost:9999/search"),
            ("TOURNAMENTS_NATION_CODES", "hu, at ,"),
            ("TOURNAMENTS_CACHE_DIR", "/tmp/tournaments"),
            ("TOURNAMENTS_ADMIN_TOKEN", "s3cret"),
        ]);

        assert_eq!(config.fetch.api_url, "http://localhost:9999/search");
        assert_eq!(config.fetch.nation_codes, vec!["HU", "AT"]);
        assert_eq!(config.storage.cache_dir, PathBuf::from("/tmp/tournaments"));
        assert_eq!(config.server.admin_token.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = config_from(&[("TOURNAMENTS_ADMIN_TOKEN", "  "), ("TOURNAMENTS_API_URL", "")]);

        assert!(config.server.admin_token.is_none());
        assert!(config.fetch.api_url.starts_with("https://"));
    }
}

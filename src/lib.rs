pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod http;
pub mod i18n;
pub mod pagination;
pub mod preferences;
pub mod rate_limiter;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cache::Cache;
use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::{EventCategory, FilterSelection};
use crate::i18n::Language;
use crate::preferences::{JsonFileStore, Preferences};
use crate::services::fetch::FetchService;
use crate::services::listing::{ListView, print_listing};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_fetch() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let mut service = FetchService::new(&config)?;
        service.run().await?;
        Ok(())
    })
}

pub fn handle_serve(port: u16, refresh_minutes: Option<u64>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut config = AppConfig::from_env();
        if refresh_minutes.is_some() {
            config.server.refresh_minutes = refresh_minutes;
        }
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_list(
    view: ListView,
    stores: &[String],
    categories: &[EventCategory],
    lang: Option<&str>,
) -> Result<()> {
    let config = AppConfig::from_env();
    let cache = Cache::new(&config.storage.cache_dir)?;

    let language = match lang {
        Some(code) => code.parse()?,
        None => {
            let store = JsonFileStore::open(&config.storage.preferences_path)?;
            let system = Language::detect(std::env::var("LANG").ok().as_deref());
            Preferences::load(store, system).language()
        }
    };

    let selection = FilterSelection::new()
        .with_stores(stores.iter().cloned())
        .with_categories(categories.iter().copied());

    print_listing(&cache, view, &selection, language)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

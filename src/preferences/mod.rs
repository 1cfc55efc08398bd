//! User preferences (view mode and language) behind an injected key-value store.
//!
//! Values are read once when [`Preferences::load`] runs and written through
//! to the store on every change.

mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

use anyhow::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::i18n::Language;

const VIEW_MODE_KEY: &str = "viewMode";
const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Calendar,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Calendar => "calendar",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::List => ViewMode::Calendar,
            ViewMode::Calendar => ViewMode::List,
        }
    }
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(ViewMode::List),
            "calendar" => Ok(ViewMode::Calendar),
            other => anyhow::bail!("Unknown view mode: {}", other),
        }
    }
}

/// Plain copy of the current preferences, as exchanged over the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSnapshot {
    pub view_mode: ViewMode,
    pub language: Language,
}

pub struct Preferences<S: KeyValueStore> {
    store: S,
    view_mode: ViewMode,
    language: Language,
    /// Language the user chose explicitly, as opposed to the startup default
    stored_language: Option<Language>,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Read stored values, falling back to list view and `default_language`
    pub fn load(store: S, default_language: Language) -> Self {
        let view_mode = read_value(&store, VIEW_MODE_KEY).unwrap_or_default();
        let stored_language = read_value(&store, LANGUAGE_KEY);

        Self {
            store,
            view_mode,
            language: stored_language.unwrap_or(default_language),
            stored_language,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn stored_language(&self) -> Option<Language> {
        self.stored_language
    }

    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            view_mode: self.view_mode,
            language: self.language,
        }
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) -> Result<()> {
        self.store.set(VIEW_MODE_KEY, view_mode.as_str())?;
        self.view_mode = view_mode;
        Ok(())
    }

    pub fn toggle_view_mode(&mut self) -> Result<ViewMode> {
        let next = self.view_mode.toggled();
        self.set_view_mode(next)?;
        Ok(next)
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.store.set(LANGUAGE_KEY, language.code())?;
        self.language = language;
        self.stored_language = Some(language);
        Ok(())
    }

    pub fn apply(&mut self, snapshot: PreferenceSnapshot) -> Result<()> {
        if snapshot.view_mode != self.view_mode {
            self.set_view_mode(snapshot.view_mode)?;
        }
        if self.stored_language != Some(snapshot.language) {
            self.set_language(snapshot.language)?;
        }
        Ok(())
    }
}

fn read_value<S, T>(store: &S, key: &str) -> Option<T>
where
    S: KeyValueStore,
    T: FromStr<Err = anyhow::Error>,
{
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("Failed to read preference {}: {:?}", key, e);
            return None;
        }
    };

    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring stored preference {}: {}", key, e);
            None
        }
    }
}

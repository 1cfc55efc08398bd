use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::models::Tournament;
use crate::config::stores::{PermanentStore, permanent_stores};

/// Number of stores shown individually before the rest collapse into "other stores"
pub const MAIN_STORE_LIMIT: usize = 8;

/// Known retailer brands hosting tournaments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreType {
    Metagame,
    Remetebarlang,
    SasEsKos,
    PottyosZebra,
    SportKartya,
    JatekCeh,
    Ratmayer,
    Other,
}

/// How a rule combines its substrings
#[derive(Debug, Clone, Copy)]
enum Match {
    Any(&'static [&'static str]),
    All(&'static [&'static str]),
}

impl Match {
    fn matches(&self, name: &str) -> bool {
        match self {
            Match::Any(patterns) => patterns.iter().any(|p| name.contains(p)),
            Match::All(patterns) => patterns.iter().all(|p| name.contains(p)),
        }
    }
}

const STORE_RULES: &[(Match, StoreType)] = &[
    (Match::Any(&["metagame"]), StoreType::Metagame),
    (Match::Any(&["remete", "remetebarlang"]), StoreType::Remetebarlang),
    (Match::Any(&["sas és kos", "bar of legends"]), StoreType::SasEsKos),
    (Match::Any(&["pöttyös", "zebra"]), StoreType::PottyosZebra),
    (Match::Any(&["sport", "kártya"]), StoreType::SportKartya),
    (Match::All(&["játék", "céh"]), StoreType::JatekCeh),
    (Match::Any(&["ratmayer"]), StoreType::Ratmayer),
];

impl StoreType {
    pub fn classify(store_name: &str) -> Self {
        let name = store_name.to_lowercase();
        STORE_RULES
            .iter()
            .find(|(rule, _)| rule.matches(&name))
            .map(|(_, store_type)| *store_type)
            .unwrap_or(StoreType::Other)
    }

    pub fn of(tournament: &Tournament) -> Self {
        tournament
            .display_store_name()
            .map(Self::classify)
            .unwrap_or(StoreType::Other)
    }

    /// Lower sorts first; everything but the two anchor stores shares a rank
    pub fn priority(&self) -> u8 {
        match self {
            StoreType::Metagame => 1,
            StoreType::Remetebarlang => 2,
            _ => 100,
        }
    }

    pub fn is_permanent(&self) -> bool {
        *self != StoreType::Other
    }
}

/// One store as seen in the current tournament list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreEntry {
    pub name: String,
    pub count: usize,
    pub store_type: StoreType,
}

/// A permanent retailer with its current tournament count, zero included
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermanentStoreEntry {
    pub name: &'static str,
    pub city: &'static str,
    pub store_type: StoreType,
    pub count: usize,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreOverview {
    pub main: Vec<StoreEntry>,
    pub others: Vec<StoreEntry>,
    pub permanent: Vec<PermanentStoreEntry>,
    /// Distinct stores that match no known retailer
    pub other_store_count: usize,
}

/// Stores with tournament counts, sorted for display.
///
/// Metagame first, Remetebarlang second, then by descending count. The sort
/// is stable, so equal counts keep first-encounter order.
pub fn sorted_stores(tournaments: &[Tournament]) -> Vec<StoreEntry> {
    let mut stores: Vec<StoreEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for name in tournaments.iter().filter_map(Tournament::display_store_name) {
        match index.get(name) {
            Some(&i) => stores[i].count += 1,
            None => {
                index.insert(name, stores.len());
                stores.push(StoreEntry {
                    name: name.to_string(),
                    count: 1,
                    store_type: StoreType::classify(name),
                });
            }
        }
    }

    stores.sort_by(|a, b| {
        a.store_type
            .priority()
            .cmp(&b.store_type.priority())
            .then_with(|| b.count.cmp(&a.count))
    });
    stores
}

/// Names of the stores that fall outside the main list for these tournaments
pub fn other_store_names(tournaments: &[Tournament]) -> Vec<String> {
    sorted_stores(tournaments)
        .into_iter()
        .skip(MAIN_STORE_LIMIT)
        .map(|store| store.name)
        .collect()
}

pub fn store_overview(tournaments: &[Tournament]) -> StoreOverview {
    let mut main = sorted_stores(tournaments);
    let others = main.split_off(main.len().min(MAIN_STORE_LIMIT));

    let all = main.iter().chain(others.iter());
    let other_store_count = all
        .clone()
        .filter(|store| !store.store_type.is_permanent())
        .count();

    let permanent = permanent_stores()
        .iter()
        .map(|store| permanent_entry(store, all.clone()))
        .collect();

    StoreOverview {
        main,
        others,
        permanent,
        other_store_count,
    }
}

fn permanent_entry<'a>(
    store: &PermanentStore,
    seen: impl Iterator<Item = &'a StoreEntry>,
) -> PermanentStoreEntry {
    let count = seen
        .filter(|entry| entry.store_type == store.store_type)
        .map(|entry| entry.count)
        .sum();

    PermanentStoreEntry {
        name: store.name,
        city: store.city,
        store_type: store.store_type,
        count,
        disabled: count == 0,
    }
}

use std::collections::HashSet;

use super::category::EventCategory;
use super::grouping::filter_tournaments;
use super::models::Tournament;
use super::stores::other_store_names;

/// Store and category selections driving the tournament filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub stores: HashSet<String>,
    pub categories: HashSet<EventCategory>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stores<I, S>(mut self, stores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stores.extend(stores.into_iter().map(Into::into));
        self
    }

    pub fn with_categories<I>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = EventCategory>,
    {
        self.categories.extend(categories);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty() && self.categories.is_empty()
    }

    pub fn toggle_store(&mut self, store: &str) {
        if !self.stores.remove(store) {
            self.stores.insert(store.to_string());
        }
    }

    pub fn toggle_category(&mut self, category: EventCategory) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    /// Select or deselect every store outside the main list as one unit.
    ///
    /// The set of "other" stores is worked out from `tournaments` at call
    /// time. If any of them is selected they are all deselected, otherwise
    /// all of them are selected.
    pub fn toggle_other_stores(&mut self, tournaments: &[Tournament]) {
        let others = other_store_names(tournaments);
        if others.iter().any(|name| self.stores.contains(name)) {
            for name in &others {
                self.stores.remove(name);
            }
        } else {
            self.stores.extend(others);
        }
    }

    pub fn has_other_selected(&self, tournaments: &[Tournament]) -> bool {
        other_store_names(tournaments)
            .iter()
            .any(|name| self.stores.contains(name))
    }

    pub fn clear(&mut self) {
        self.stores.clear();
        self.categories.clear();
    }

    pub fn apply<'a>(&self, tournaments: &'a [Tournament]) -> Vec<&'a Tournament> {
        filter_tournaments(tournaments, &self.stores, &self.categories)
    }
}

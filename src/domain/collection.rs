use log::debug;
use std::collections::HashSet;

use super::models::Tournament;

/// Tournaments keyed by `tournamentNo`, in the order they were first seen
pub struct TournamentCollection {
    tournaments: Vec<Tournament>,
    seen: HashSet<String>,
}

impl TournamentCollection {
    pub fn new() -> Self {
        Self {
            tournaments: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Add a tournament; returns false when its number was already collected
    pub fn add(&mut self, tournament: Tournament) -> bool {
        if !self.seen.insert(tournament.tournament_no.clone()) {
            debug!("Skipping duplicate tournament {}", tournament.tournament_no);
            return false;
        }
        self.tournaments.push(tournament);
        true
    }

    pub fn extend(&mut self, tournaments: impl IntoIterator<Item = Tournament>) -> usize {
        tournaments
            .into_iter()
            .map(|t| self.add(t))
            .filter(|added| *added)
            .count()
    }

    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    pub fn get(&self, tournament_no: &str) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.tournament_no == tournament_no)
    }

    pub fn into_vec(self) -> Vec<Tournament> {
        self.tournaments
    }
}

impl Default for TournamentCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::tournament_at;

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let mut collection = TournamentCollection::new();

        assert!(collection.add(tournament_at("A", "First", "2026/01/12 10:00")));
        assert!(collection.add(tournament_at("B", "Other", "2026/01/12 10:00")));
        assert!(!collection.add(tournament_at("A", "Second", "2026/01/13 10:00")));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get("A").unwrap().store_name, "First");
    }

    #[test]
    fn test_extend_preserves_order_and_counts_new_entries() {
        let mut collection = TournamentCollection::new();
        collection.add(tournament_at("2", "Shop", "2026/01/12 10:00"));

        let added = collection.extend(vec![
            tournament_at("3", "Shop", "2026/01/12 10:00"),
            tournament_at("2", "Shop", "2026/01/12 10:00"),
            tournament_at("1", "Shop", "2026/01/12 10:00"),
        ]);

        assert_eq!(added, 2);
        let order: Vec<String> = collection.into_vec().into_iter().map(|t| t.tournament_no).collect();
        assert_eq!(order, vec!["2", "3", "1"]);
    }
}

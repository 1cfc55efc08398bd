use log::debug;
use std::collections::{BTreeMap, HashSet};

use super::category::EventCategory;
use super::date_key::DateKey;
use super::iso_week::{WeekKey, week_info};
use super::models::Tournament;

/// Keep tournaments matching both selections; an empty selection matches everything
pub fn filter_tournaments<'a>(
    tournaments: &'a [Tournament],
    stores: &HashSet<String>,
    categories: &HashSet<EventCategory>,
) -> Vec<&'a Tournament> {
    tournaments
        .iter()
        .filter(|t| matches_stores(t, stores) && matches_categories(t, categories))
        .collect()
}

fn matches_stores(tournament: &Tournament, stores: &HashSet<String>) -> bool {
    stores.is_empty()
        || tournament
            .display_store_name()
            .is_some_and(|name| stores.contains(name))
}

fn matches_categories(tournament: &Tournament, categories: &HashSet<EventCategory>) -> bool {
    categories.is_empty() || categories.contains(&EventCategory::of(tournament))
}

/// Partition by ISO week, buckets in ascending key order.
///
/// Input order is kept inside each bucket. A tournament with an unreadable
/// date stays in the listing under [`WeekKey::UNKNOWN`].
pub fn group_by_week<'a, I>(tournaments: I) -> BTreeMap<WeekKey, Vec<&'a Tournament>>
where
    I: IntoIterator<Item = &'a Tournament>,
{
    let mut grouped: BTreeMap<WeekKey, Vec<&'a Tournament>> = BTreeMap::new();
    for tournament in tournaments {
        let key = week_info(&tournament.local_tournament_date).key();
        grouped.entry(key).or_default().push(tournament);
    }
    grouped
}

/// Partition by calendar day for the calendar view.
///
/// Tournaments whose date cannot be read are left out.
pub fn group_by_day<'a, I>(tournaments: I) -> BTreeMap<DateKey, Vec<&'a Tournament>>
where
    I: IntoIterator<Item = &'a Tournament>,
{
    let mut grouped: BTreeMap<DateKey, Vec<&'a Tournament>> = BTreeMap::new();
    for tournament in tournaments {
        match tournament.local_date() {
            Some(date) => grouped.entry(DateKey::new(date)).or_default().push(tournament),
            None => debug!(
                "Skipping tournament {} in calendar: unreadable date {:?}",
                tournament.tournament_no, tournament.local_tournament_date
            ),
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::{tournament_at, tournament_with_event};
    use chrono::NaiveDate;

    fn sample_list() -> Vec<Tournament> {
        vec![
            tournament_with_event("1", "Metagame Budapest", "2026/01/12 10:00", "Local Event"),
            tournament_with_event("2", "Remetebarlang", "2026/01/13 18:00", "OTS Championship"),
            tournament_with_event("3", "Metagame Budapest", "2026/01/19 09:00", "2026 Regional Qualifier"),
            tournament_with_event("4", "Corner Shop", "2026/01/14 16:00", "Local Event"),
            tournament_with_event("5", "Metagame Budapest Buda", "2026/01/15 16:00", "Local Event"),
            tournament_with_event("6", "Metagame Budapest", "2026/01/16 16:00", "Open Dueling"),
            tournament_with_event("7", "Pöttyös Zebra", "2026/01/17 16:00", "Local Event"),
            tournament_with_event("8", "Metagame Budapest", "2026/01/18 16:00", "Local Event"),
            tournament_with_event("9", "Sport Kártya", "2026/01/20 16:00", "National Finals"),
            tournament_with_event("10", "Corner Shop", "2026/01/21 16:00", "Local Event"),
        ]
    }

    fn numbers(list: &[&Tournament]) -> Vec<String> {
        list.iter().map(|t| t.tournament_no.clone()).collect()
    }

    #[test]
    fn test_empty_selection_is_pass_through() {
        let tournaments = sample_list();
        let filtered = filter_tournaments(&tournaments, &HashSet::new(), &HashSet::new());

        assert_eq!(filtered.len(), tournaments.len());
        assert!(filtered.iter().zip(tournaments.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_filter_by_store_is_exact_match() {
        let tournaments = sample_list();
        let stores = HashSet::from(["Metagame Budapest".to_string()]);

        let filtered = filter_tournaments(&tournaments, &stores, &HashSet::new());

        assert_eq!(numbers(&filtered), vec!["1", "3", "6", "8"]);
        assert!(filtered.iter().all(|t| t.store_name == "Metagame Budapest"));
    }

    #[test]
    fn test_filter_by_category() {
        let tournaments = sample_list();
        let categories = HashSet::from([EventCategory::Regional, EventCategory::National]);

        let filtered = filter_tournaments(&tournaments, &HashSet::new(), &categories);

        assert_eq!(numbers(&filtered), vec!["3", "9"]);
    }

    #[test]
    fn test_filter_combines_store_and_category() {
        let tournaments = sample_list();
        let stores = HashSet::from(["Metagame Budapest".to_string(), "Corner Shop".to_string()]);
        let categories = HashSet::from([EventCategory::Local]);

        let filtered = filter_tournaments(&tournaments, &stores, &categories);

        assert_eq!(numbers(&filtered), vec!["1", "4", "8", "10"]);
    }

    #[test]
    fn test_store_filter_excludes_tournaments_without_store() {
        let tournaments = vec![tournament_at("1", "", "2026/01/12 10:00")];
        let stores = HashSet::from(["Metagame".to_string()]);

        assert!(filter_tournaments(&tournaments, &stores, &HashSet::new()).is_empty());
    }

    #[test]
    fn test_same_iso_week_shares_a_bucket() {
        let tournaments = vec![
            tournament_at("b", "Shop", "2026/01/19 09:00"),
            tournament_at("a1", "Shop", "2026/01/12 10:00"),
            tournament_at("a2", "Shop", "2026/01/18 18:00"),
        ];

        let grouped = group_by_week(&tournaments);
        let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();

        assert_eq!(keys, vec!["2026-W03", "2026-W04"]);
        assert_eq!(numbers(&grouped[&WeekKey { year: 2026, week: 3 }]), vec!["a1", "a2"]);
        assert_eq!(numbers(&grouped[&WeekKey { year: 2026, week: 4 }]), vec!["b"]);
    }

    #[test]
    fn test_week_grouping_is_a_stable_partition() {
        let tournaments = sample_list();
        let grouped = group_by_week(&tournaments);

        let flattened: Vec<&Tournament> = grouped.values().flatten().copied().collect();
        assert_eq!(flattened.len(), tournaments.len());

        for bucket in grouped.values() {
            let positions: Vec<usize> = bucket
                .iter()
                .map(|t| tournaments.iter().position(|o| o == *t).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_week_grouping_across_year_boundary() {
        let tournaments = vec![
            tournament_at("new", "Shop", "2026/01/02 10:00"),
            tournament_at("old", "Shop", "2025/12/20 10:00"),
            tournament_at("edge", "Shop", "2025/12/31 10:00"),
        ];

        let grouped = group_by_week(&tournaments);
        let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();

        assert_eq!(keys, vec!["2025-W51", "2026-W01"]);
        assert_eq!(numbers(&grouped[&WeekKey { year: 2026, week: 1 }]), vec!["new", "edge"]);
    }

    #[test]
    fn test_malformed_dates_stay_in_week_listing() {
        let tournaments = vec![
            tournament_at("ok", "Shop", "2026/01/12 10:00"),
            tournament_at("bad", "Shop", "TBA"),
        ];

        let grouped = group_by_week(&tournaments);
        let first = grouped.iter().next().unwrap();

        assert!(first.0.is_unknown());
        assert_eq!(numbers(first.1), vec!["bad"]);
        assert_eq!(grouped.values().map(Vec::len).sum::<usize>(), 2);
    }

    #[test]
    fn test_day_grouping_drops_malformed_dates() {
        let tournaments = vec![
            tournament_at("1", "Shop", "2026/01/12 10:00"),
            tournament_at("2", "Shop", "2026/01/12 18:30"),
            tournament_at("3", "Shop", "2026/01/13 00:15"),
            tournament_at("4", "Shop", "13/01/2026"),
        ];

        let grouped = group_by_day(&tournaments);
        let jan12 = DateKey::new(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
        let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();

        assert_eq!(keys, vec!["2026-01-12", "2026-01-13"]);
        assert_eq!(numbers(&grouped[&jan12]), vec!["1", "2"]);
        assert_eq!(grouped.values().map(Vec::len).sum::<usize>(), 3);
    }

    #[test]
    fn test_grouping_filtered_references() {
        let tournaments = sample_list();
        let stores = HashSet::from(["Corner Shop".to_string()]);
        let filtered = filter_tournaments(&tournaments, &stores, &HashSet::new());

        let grouped = group_by_week(filtered.iter().copied());

        assert_eq!(grouped.len(), 2);
        assert_eq!(tournaments.len(), 10);
    }
}

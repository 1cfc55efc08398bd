use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::category::count_by_category;
use crate::domain::{DateKey, EventCategory, StoreType, Tournament, WeekInfo, WeekKey, today_date_key};
use crate::i18n::Language;

/// Tournament with the values the views derive from it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentView<'a> {
    #[serde(flatten)]
    pub tournament: &'a Tournament,
    pub category: EventCategory,
    pub category_color: &'static str,
    pub category_label: &'static str,
    pub display_store_name: Option<&'a str>,
    pub store_type: StoreType,
    pub store_type_label: &'static str,
    pub structure_label: Option<&'static str>,
}

impl<'a> TournamentView<'a> {
    pub fn new(tournament: &'a Tournament, language: Language) -> Self {
        let labels = language.translations();
        let category = EventCategory::of(tournament);
        let store_type = StoreType::of(tournament);

        Self {
            tournament,
            category,
            category_color: category.color(),
            category_label: labels.category(category),
            display_store_name: tournament.display_store_name(),
            store_type,
            store_type_label: labels.store_type(store_type),
            structure_label: labels.structure(tournament.structure),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGroupView<'a> {
    pub key: WeekKey,
    pub week: u32,
    pub year: i32,
    pub display: String,
    pub is_current_week: bool,
    pub tournaments: Vec<TournamentView<'a>>,
}

pub fn week_groups<'a>(
    grouped: BTreeMap<WeekKey, Vec<&'a Tournament>>,
    language: Language,
) -> Vec<WeekGroupView<'a>> {
    let week_word = language.translations().week;

    grouped
        .into_iter()
        .map(|(key, tournaments)| {
            let info = WeekInfo {
                week: key.week,
                year: key.year,
            };

            WeekGroupView {
                key,
                week: key.week,
                year: key.year,
                display: info.display(week_word),
                is_current_week: info.is_current(),
                tournaments: tournaments
                    .into_iter()
                    .map(|t| TournamentView::new(t, language))
                    .collect(),
            }
        })
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGroupView<'a> {
    pub date: DateKey,
    pub is_today: bool,
    pub tournaments: Vec<TournamentView<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaysResponse<'a> {
    pub today: String,
    pub days: Vec<DayGroupView<'a>>,
}

pub fn day_groups<'a>(
    grouped: BTreeMap<DateKey, Vec<&'a Tournament>>,
    language: Language,
) -> DaysResponse<'a> {
    let today = today_date_key();

    let days = grouped
        .into_iter()
        .map(|(date, tournaments)| DayGroupView {
            date,
            is_today: date.to_string() == today,
            tournaments: tournaments
                .into_iter()
                .map(|t| TournamentView::new(t, language))
                .collect(),
        })
        .collect();

    DaysResponse { today, days }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub category: EventCategory,
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
    pub disabled: bool,
}

/// Every category in display order, with zero-count ones marked disabled
pub fn category_views(tournaments: &[Tournament], language: Language) -> Vec<CategoryView> {
    let labels = language.translations();

    count_by_category(tournaments)
        .into_iter()
        .map(|(category, count)| CategoryView {
            category,
            label: labels.category(category),
            color: category.color(),
            count,
            disabled: count == 0,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

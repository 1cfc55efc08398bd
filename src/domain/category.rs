use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

use super::models::Tournament;

/// Competitive tier of a tournament, derived from its event name and URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventCategory {
    Local,
    #[serde(rename = "OTS")]
    Ots,
    Regional,
    National,
    FreePlay,
}

/// Where a rule looks for its substring
#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Url,
}

/// Ordered classification rules; the first match wins, `Local` otherwise
const CATEGORY_RULES: &[(Field, &str, EventCategory)] = &[
    (Field::Name, "open dueling", EventCategory::FreePlay),
    (Field::Url, "opens", EventCategory::Regional),
    (Field::Name, "regional", EventCategory::Regional),
    (Field::Name, "national", EventCategory::National),
    (Field::Name, "nemzeti", EventCategory::National),
    (Field::Name, "ots", EventCategory::Ots),
];

impl EventCategory {
    /// Order in which the category filter lists the categories
    pub const DISPLAY_ORDER: [EventCategory; 5] = [
        EventCategory::FreePlay,
        EventCategory::Local,
        EventCategory::Ots,
        EventCategory::Regional,
        EventCategory::National,
    ];

    pub fn of(tournament: &Tournament) -> Self {
        Self::classify(&tournament.event_name, tournament.event_url.as_deref())
    }

    pub fn classify(event_name: &str, event_url: Option<&str>) -> Self {
        let name = event_name.to_lowercase();
        let url = event_url.unwrap_or_default().to_lowercase();

        CATEGORY_RULES
            .iter()
            .find(|(field, pattern, _)| match field {
                Field::Name => name.contains(pattern),
                Field::Url => url.contains(pattern),
            })
            .map(|(_, _, category)| *category)
            .unwrap_or(EventCategory::Local)
    }

    pub fn color(&self) -> &'static str {
        match self {
            EventCategory::Local => "#3b82f6",
            EventCategory::Ots => "#a855f7",
            EventCategory::Regional => "#f59e0b",
            EventCategory::National => "#ef4444",
            EventCategory::FreePlay => "#10b981",
        }
    }

    /// Stable identifier used in query strings and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Local => "Local",
            EventCategory::Ots => "OTS",
            EventCategory::Regional => "Regional",
            EventCategory::National => "National",
            EventCategory::FreePlay => "FreePlay",
        }
    }
}

impl FromStr for EventCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCategory::DISPLAY_ORDER
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown event category: {}", s))
    }
}

/// Tournament count per category, in display order
pub fn count_by_category(tournaments: &[Tournament]) -> Vec<(EventCategory, usize)> {
    let mut counts: HashMap<EventCategory, usize> = HashMap::new();
    for tournament in tournaments {
        *counts.entry(EventCategory::of(tournament)).or_default() += 1;
    }

    EventCategory::DISPLAY_ORDER
        .into_iter()
        .map(|category| (category, counts.get(&category).copied().unwrap_or(0)))
        .collect()
}

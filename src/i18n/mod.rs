use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{EventCategory, StoreType, Structure};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hu,
    #[default]
    En,
}

impl Language {
    /// Pick a language from a locale tag such as `hu-HU` or an `Accept-Language` value
    pub fn detect(tag: Option<&str>) -> Self {
        match tag {
            Some(tag) if tag.trim().to_lowercase().starts_with("hu") => Language::Hu,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Hu => "hu",
            Language::En => "en",
        }
    }

    pub fn translations(&self) -> &'static Translations {
        match self {
            Language::Hu => &HU,
            Language::En => &EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hu" => Ok(Language::Hu),
            "en" => Ok(Language::En),
            other => anyhow::bail!("Unsupported language: {}", other),
        }
    }
}

/// Labels used by the list and calendar views
pub struct Translations {
    pub week: &'static str,
    pub today: &'static str,
    pub other_stores: &'static str,
    pub no_tournaments_on_date: &'static str,
    pub no_tournaments_filtered: &'static str,

    pub category_local: &'static str,
    pub category_ots: &'static str,
    pub category_regional: &'static str,
    pub category_national: &'static str,
    pub category_free_play: &'static str,

    pub store_type_metagame: &'static str,
    pub store_type_remetebarlang: &'static str,
    pub store_type_sas_kos: &'static str,
    pub store_type_pottyos_zebra: &'static str,
    pub store_type_sport_kartya: &'static str,
    pub store_type_jatek_ceh: &'static str,
    pub store_type_ratmayer: &'static str,
    pub store_type_other: &'static str,

    pub free_play: &'static str,
    pub swiss_draw: &'static str,
    pub single_elimination: &'static str,
}

static HU: Translations = Translations {
    week: "hét",
    today: "Mai nap",
    other_stores: "Egyéb boltok",
    no_tournaments_on_date: "Nincs verseny ezen a napon.",
    no_tournaments_filtered: "Nincs verseny a kiválasztott szűrőkhöz.",
    category_local: "Local",
    category_ots: "OTSC",
    category_regional: "Regional",
    category_national: "Nemzeti",
    category_free_play: "Szabad Játék",
    store_type_metagame: "Metagame",
    store_type_remetebarlang: "Remetebarlang",
    store_type_sas_kos: "SAS és KOS",
    store_type_pottyos_zebra: "Pöttyös Zebra",
    store_type_sport_kartya: "Sport Kártya",
    store_type_jatek_ceh: "Játék Céh",
    store_type_ratmayer: "Ratmayer",
    store_type_other: "Egyéb",
    free_play: "Szabad játék",
    swiss_draw: "Svájci rendszer",
    single_elimination: "Egyenes kiesés",
};

static EN: Translations = Translations {
    week: "week",
    today: "Today",
    other_stores: "Other stores",
    no_tournaments_on_date: "No tournaments on this date.",
    no_tournaments_filtered: "No tournaments match the selected filters.",
    category_local: "Local",
    category_ots: "OTSC",
    category_regional: "Regional",
    category_national: "National",
    category_free_play: "Free Play",
    store_type_metagame: "Metagame",
    store_type_remetebarlang: "Remetebarlang",
    store_type_sas_kos: "SAS és KOS",
    store_type_pottyos_zebra: "Pöttyös Zebra",
    store_type_sport_kartya: "Sport Kártya",
    store_type_jatek_ceh: "Játék Céh",
    store_type_ratmayer: "Ratmayer",
    store_type_other: "Other",
    free_play: "Free Play",
    swiss_draw: "Swiss Draw",
    single_elimination: "Single Elimination",
};

impl Translations {
    pub fn category(&self, category: EventCategory) -> &'static str {
        match category {
            EventCategory::Local => self.category_local,
            EventCategory::Ots => self.category_ots,
            EventCategory::Regional => self.category_regional,
            EventCategory::National => self.category_national,
            EventCategory::FreePlay => self.category_free_play,
        }
    }

    pub fn store_type(&self, store_type: StoreType) -> &'static str {
        match store_type {
            StoreType::Metagame => self.store_type_metagame,
            StoreType::Remetebarlang => self.store_type_remetebarlang,
            StoreType::SasEsKos => self.store_type_sas_kos,
            StoreType::PottyosZebra => self.store_type_pottyos_zebra,
            StoreType::SportKartya => self.store_type_sport_kartya,
            StoreType::JatekCeh => self.store_type_jatek_ceh,
            StoreType::Ratmayer => self.store_type_ratmayer,
            StoreType::Other => self.store_type_other,
        }
    }

    /// `None` for structures the API added after this table was written
    pub fn structure(&self, structure: Structure) -> Option<&'static str> {
        match structure {
            Structure::Free => Some(self.free_play),
            Structure::SwissDraw => Some(self.swiss_draw),
            Structure::SingleElimination => Some(self.single_elimination),
            Structure::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language() {
        assert_eq!(Language::detect(Some("hu-HU")), Language::Hu);
        assert_eq!(Language::detect(Some("HU")), Language::Hu);
        assert_eq!(Language::detect(Some("hu-HU,hu;q=0.9,en;q=0.8")), Language::Hu);
        assert_eq!(Language::detect(Some("en-GB")), Language::En);
        assert_eq!(Language::detect(Some("de")), Language::En);
        assert_eq!(Language::detect(None), Language::En);
    }

    #[test]
    fn test_parse_language_code() {
        assert_eq!("hu".parse::<Language>().unwrap(), Language::Hu);
        assert_eq!(" EN ".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_category_labels_per_language() {
        assert_eq!(Language::Hu.translations().category(EventCategory::National), "Nemzeti");
        assert_eq!(Language::En.translations().category(EventCategory::National), "National");
        assert_eq!(Language::Hu.translations().category(EventCategory::FreePlay), "Szabad Játék");
        assert_eq!(Language::En.translations().category(EventCategory::Ots), "OTSC");
    }

    #[test]
    fn test_store_and_structure_labels() {
        let en = Language::En.translations();
        assert_eq!(en.store_type(StoreType::Other), "Other");
        assert_eq!(Language::Hu.translations().store_type(StoreType::Other), "Egyéb");
        assert_eq!(en.structure(Structure::SwissDraw), Some("Swiss Draw"));
        assert_eq!(en.structure(Structure::Unknown), None);
    }
}

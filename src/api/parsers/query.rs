use anyhow::Result;

use crate::domain::{EventCategory, FilterSelection};

/// Build a selection from comma-separated `stores` and `categories` query values
pub fn parse_selection(stores: Option<&str>, categories: Option<&str>) -> Result<FilterSelection> {
    let categories = split_list(categories)
        .map(str::parse::<EventCategory>)
        .collect::<Result<Vec<_>>>()?;

    Ok(FilterSelection::new()
        .with_stores(split_list(stores))
        .with_categories(categories))
}

fn split_list(value: Option<&str>) -> impl Iterator<Item = &str> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_empty_selection() {
        assert!(parse_selection(None, None).unwrap().is_empty());
        assert!(parse_selection(Some(""), Some(" , ")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_lists() {
        let selection =
            parse_selection(Some("Metagame Budapest, Remetebarlang"), Some("Local,ots")).unwrap();

        assert_eq!(selection.stores.len(), 2);
        assert!(selection.stores.contains("Metagame Budapest"));
        assert!(selection.categories.contains(&EventCategory::Ots));
        assert!(selection.categories.contains(&EventCategory::Local));
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!(parse_selection(None, Some("Local,Casual")).is_err());
    }
}

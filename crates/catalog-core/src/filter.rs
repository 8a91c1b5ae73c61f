//! Search Filter
//!
//! Derives the visible list from the loaded items and the search box.

use crate::domain::CatalogItem;

/// Items whose title, description or any ingredient contains `search`,
/// ignoring case. An empty search returns every item, in order.
pub fn filter_items(items: &[CatalogItem], search: &str) -> Vec<CatalogItem> {
    if search.is_empty() {
        return items.to_vec();
    }
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new(1u64, "Latte")
                .with_description("Milky")
                .with_ingredients(["milk", "espresso"]),
            CatalogItem::new(2u64, "Americano")
                .with_description("Espresso topped up with hot water")
                .with_ingredients(["Espresso", "Water"]),
            CatalogItem::new(3u64, "Chai Latte")
                .with_description("Spiced tea")
                .with_ingredients(["Tea", "Cinnamon", "Milk"]),
        ]
    }

    fn ids(items: &[CatalogItem]) -> Vec<String> {
        items.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn test_filter_scenario() {
        let items = vec![catalog().remove(0)];
        assert_eq!(ids(&filter_items(&items, "milk")), vec!["1"]);
        assert!(filter_items(&items, "mocha").is_empty());
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let items = catalog();
        assert_eq!(filter_items(&items, ""), items);
    }

    #[test]
    fn test_case_insensitive_across_fields() {
        let items = catalog();
        assert_eq!(ids(&filter_items(&items, "LATTE")), vec!["1", "3"]);
        assert_eq!(ids(&filter_items(&items, "espresso")), vec!["1", "2"]);
        assert_eq!(ids(&filter_items(&items, "cinna")), vec!["3"]);
        assert_eq!(ids(&filter_items(&items, "hot water")), vec!["2"]);
    }

    #[test]
    fn test_results_are_subset_and_match() {
        let items = catalog();
        for search in ["a", "MILK", "e", "zzz", " "] {
            let filtered = filter_items(&items, search);
            let needle = search.to_lowercase();
            for item in &filtered {
                assert!(items.contains(item));
                assert!(item.matches_lowercase(&needle));
            }
        }
    }

    #[test]
    fn test_whitespace_search_is_not_trimmed() {
        let items = catalog();
        // Only multi-word fields contain a space
        assert_eq!(ids(&filter_items(&items, " ")), vec!["2", "3"]);
    }
}

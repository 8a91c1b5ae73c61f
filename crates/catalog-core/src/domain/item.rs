//! Catalog Item Entity
//!
//! One coffee entry as served by the remote catalog.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::entity::Entity;

/// Rating shown when the remote entry has none
pub const DEFAULT_RATING: &str = "4.5";
/// Price shown when the remote entry has none
pub const DEFAULT_PRICE: &str = "4.99";

/// Server-assigned identifier
///
/// The remote store hands out numbers today, but nothing on this side relies
/// on that; string ids round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl ItemId {
    /// Numeric value of the id, if it has one
    pub fn as_number(&self) -> Option<u64> {
        match self {
            ItemId::Number(n) => Some(*n),
            ItemId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// A coffee entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub image: String,
    /// Display only
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Display only
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl CatalogItem {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            ingredients: Vec::new(),
            image: String::new(),
            rating: None,
            price: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn rating_label(&self) -> String {
        self.rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| DEFAULT_RATING.to_string())
    }

    pub fn price_label(&self) -> String {
        self.price
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| DEFAULT_PRICE.to_string())
    }

    /// Odd numeric ids get the "Popular" badge on their card
    pub fn is_popular(&self) -> bool {
        self.id.as_number().map_or(false, |n| n % 2 == 1)
    }

    /// Case-insensitive substring match over title, description and ingredients.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(needle))
    }
}

impl Entity for CatalogItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Accepts a JSON number or a numeric string; anything else becomes `None`
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_sample_entry() {
        let json = r#"{
            "title": "Black Coffee",
            "description": "Svart kaffe var nog den första typen.",
            "ingredients": ["Coffee"],
            "image": "https://images.unsplash.com/photo-1.jpg",
            "id": 1
        }"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::Number(1));
        assert_eq!(item.ingredients, vec!["Coffee"]);
        assert_eq!(item.rating, None);
        assert_eq!(item.rating_label(), "4.5");
        assert_eq!(item.price_label(), "4.99");
    }

    #[test]
    fn test_decode_missing_optional_fields() {
        let item: CatalogItem = serde_json::from_str(r#"{"id":"abc","title":"Cortado"}"#).unwrap();
        assert_eq!(item.id, ItemId::Text("abc".into()));
        assert!(item.description.is_empty());
        assert!(item.ingredients.is_empty());
    }

    #[test]
    fn test_lenient_rating_and_price() {
        let item: CatalogItem =
            serde_json::from_str(r#"{"id":2,"title":"Mocha","rating":"4.8","price":3.5}"#).unwrap();
        assert_eq!(item.rating, Some(4.8));
        assert_eq!(item.price_label(), "3.50");

        let json = r#"{"id":2,"title":"Mocha","rating":"great","price":null}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.rating, None);
        assert_eq!(item.price, None);
    }

    #[test]
    fn test_popular_badge() {
        assert!(CatalogItem::new(1u64, "A").is_popular());
        assert!(!CatalogItem::new(2u64, "B").is_popular());
        assert!(CatalogItem::new("7", "C").is_popular());
        assert!(!CatalogItem::new("x7", "D").is_popular());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ItemId::from(5u64).to_string(), "5");
        assert_eq!(ItemId::from("a b").to_string(), "a b");
    }
}

//! Editor Draft
//!
//! Raw text collected by the editor form, and the payload it turns into.

use serde::{Deserialize, Serialize};

use super::item::CatalogItem;

/// Separator between ingredients in the editor's single text field
pub const INGREDIENT_SEPARATOR: char = ',';

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub image: String,
}

/// Editable, unvalidated form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
    /// Comma-separated while being edited
    pub ingredients: String,
    pub image: String,
}

/// Split on the separator, trim each token, drop empty ones
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    raw.split(INGREDIENT_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(", ")
}

impl FormDraft {
    /// Draft pre-populated from an existing item (edit mode)
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            ingredients: join_ingredients(&item.ingredients),
            image: item.image.clone(),
        }
    }

    /// True when every field has content after trimming
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.description, &self.ingredients, &self.image]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// True when the draft differs from `original` in at least one field.
    ///
    /// Text fields compare trimmed; ingredients compare as the parsed token
    /// list, so `"milk,espresso"` equals an original of `["milk", "espresso"]`.
    pub fn differs_from(&self, original: &CatalogItem) -> bool {
        self.title.trim() != original.title.trim()
            || self.description.trim() != original.description.trim()
            || join_ingredients(&parse_ingredients(&self.ingredients))
                != join_ingredients(&parse_ingredients(&join_ingredients(&original.ingredients)))
            || self.image.trim() != original.image.trim()
    }

    /// Whether the editor may submit this draft.
    ///
    /// Create mode (`original == None`) needs all four fields; edit mode
    /// needs any change at all.
    pub fn can_submit(&self, original: Option<&CatalogItem>) -> bool {
        match original {
            Some(item) => self.differs_from(item),
            None => self.is_complete(),
        }
    }

    pub fn to_payload(&self) -> ItemPayload {
        ItemPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: parse_ingredients(&self.ingredients),
            image: self.image.clone(),
        }
    }
}

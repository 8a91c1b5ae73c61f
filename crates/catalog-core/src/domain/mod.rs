//! Domain Layer
//!
//! Catalog entities, editor drafts and the shared error type.
//! This layer has no I/O; serde is only used for the wire shape.

mod draft;
mod entity;
mod item;

pub use draft::{parse_ingredients, FormDraft, ItemPayload, INGREDIENT_SEPARATOR};
pub use entity::{CatalogError, CatalogResult, Entity};
pub use item::{CatalogItem, ItemId, DEFAULT_PRICE, DEFAULT_RATING};

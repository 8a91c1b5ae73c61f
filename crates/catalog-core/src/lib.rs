//! Coffee Catalog Core
//!
//! Layered architecture:
//! - domain: catalog entities, drafts and validation rules
//! - repository: remote catalog client abstraction and its HTTP implementation
//! - controller: page state, events, effects and effect execution
//!
//! Nothing in here touches the DOM, so the whole crate runs (and is tested)
//! natively as well as on wasm32.

pub mod config;
pub mod controller;
pub mod domain;
pub mod filter;
pub mod notification;
pub mod repository;

pub use config::{CatalogConfig, ConfirmStyle, DEFAULT_API_URL};
pub use controller::{
    perform, ConfirmationProvider, Driver, DraftField, Effect, Event, PageState, SaveKind,
    DELETE_PROMPT,
};
pub use domain::{CatalogError, CatalogItem, CatalogResult, Entity, FormDraft, ItemId, ItemPayload};
pub use filter::filter_items;
pub use notification::{Notification, NotificationKind, Notifier};
pub use repository::{CatalogRepository, HttpCatalogRepository};

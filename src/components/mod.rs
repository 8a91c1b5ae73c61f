//! UI Components
//!
//! Reusable Leptos components for the catalog page.

mod confirm_modal;
mod empty_state;
mod item_card;
mod item_editor;
mod loader;
mod search_bar;
mod toast_stack;

pub use confirm_modal::ConfirmModal;
pub use empty_state::EmptyState;
pub use item_card::ItemCard;
pub use item_editor::ItemEditor;
pub use loader::Loader;
pub use search_bar::SearchBar;
pub use toast_stack::ToastStack;

//! Catalog Page Controller
//!
//! The page is an explicit `PageState` advanced by events. A transition
//! never performs I/O; it returns `Effect`s, and whoever owns the state runs
//! them (`perform`) and feeds the resulting events back in.
//!
//! ```text
//! Event -> PageState::apply -> [Effect] -> perform -> Option<Event> -> ...
//! ```

mod driver;
mod effects;
mod state;


pub use driver::Driver;
pub use effects::{perform, ConfirmationProvider};
pub use state::{DraftField, Effect, Event, PageState, SaveKind, DELETE_PROMPT};

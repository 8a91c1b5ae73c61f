//! Repository Layer
//!
//! Remote catalog client abstraction and its HTTP implementation.

mod http;
mod traits;

pub use http::HttpCatalogRepository;
pub use traits::CatalogRepository;

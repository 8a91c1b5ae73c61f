//! Domain Layer - Core Entity Trait
//!
//! Basic contract for remote-store entities plus the catalog error type.

use thiserror::Error;

/// Core trait for entities whose identity is assigned by the remote store
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level errors
///
/// Validation problems are not represented here: an invalid draft simply
/// cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request never produced a response (network unreachable, CORS, ...)
    #[error("Transport error: {0}")]
    Transport(String),
    /// The remote store answered with a non-2xx status
    #[error("HTTP error: status {status}")]
    Http { status: u16 },
    /// The response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
    /// Configuration could not be read
    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            CatalogError::Http { status: status.as_u16() }
        } else if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CatalogError::Http { status: 404 }.to_string(), "HTTP error: status 404");
        assert_eq!(
            CatalogError::Transport("offline".into()).to_string(),
            "Transport error: offline"
        );
    }

    #[test]
    fn test_json_error_maps_to_decode() {
        let err = serde_json::from_str::<u32>("nope").unwrap_err();
        assert!(matches!(CatalogError::from(err), CatalogError::Decode(_)));
    }
}

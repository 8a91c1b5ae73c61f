//! Repository Layer - Core Trait
//!
//! Defines the remote catalog contract. Implementations: `reqwest` over
//! HTTP, and recording fakes in tests.

use async_trait::async_trait;

use crate::domain::{CatalogItem, CatalogResult, ItemId, ItemPayload};

/// Remote catalog CRUD
///
/// Every call is exactly one round trip. No retries, no caching; callers
/// reload the list after a successful mutation instead of trusting the
/// response body.
#[async_trait(?Send)]
pub trait CatalogRepository {
    /// Full list as currently known to the remote store
    async fn list(&self) -> CatalogResult<Vec<CatalogItem>>;

    /// Create an entry; the store assigns the id.
    ///
    /// `None` when the response body is not a recognizable item; the create
    /// itself still succeeded.
    async fn create(&self, payload: &ItemPayload) -> CatalogResult<Option<CatalogItem>>;

    /// Replace the entry with the given id
    async fn update(&self, id: &ItemId, payload: &ItemPayload) -> CatalogResult<()>;

    /// Remove the entry with the given id
    async fn delete(&self, id: &ItemId) -> CatalogResult<()>;
}

#[async_trait(?Send)]
impl<R: CatalogRepository + ?Sized> CatalogRepository for &R {
    async fn list(&self) -> CatalogResult<Vec<CatalogItem>> {
        (**self).list().await
    }

    async fn create(&self, payload: &ItemPayload) -> CatalogResult<Option<CatalogItem>> {
        (**self).create(payload).await
    }

    async fn update(&self, id: &ItemId, payload: &ItemPayload) -> CatalogResult<()> {
        (**self).update(id, payload).await
    }

    async fn delete(&self, id: &ItemId) -> CatalogResult<()> {
        (**self).delete(id).await
    }
}

//! HTTP Catalog Repository
//!
//! `reqwest` client for the REST collection: `GET /`, `POST /`,
//! `PUT /{id}`, `DELETE /{id}`, JSON in and out.

use async_trait::async_trait;
use tracing::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Response};

use super::traits::CatalogRepository;
use crate::domain::{CatalogError, CatalogItem, CatalogResult, ItemId, ItemPayload};

/// Unreserved characters stay as-is in the id path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone)]
pub struct HttpCatalogRepository {
    client: Client,
    base_url: String,
}

impl HttpCatalogRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn item_url(&self, id: &ItemId) -> String {
        let segment = utf8_percent_encode(&id.to_string(), PATH_SEGMENT).to_string();
        format!("{}/{}", self.base_url, segment)
    }
}

/// Turn a non-2xx response into `CatalogError::Http`
fn check_status(response: Response) -> CatalogResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!("[HTTP] {} answered {}", response.url(), status);
        Err(CatalogError::Http { status: status.as_u16() })
    }
}

pub(crate) fn decode_items(body: &str) -> CatalogResult<Vec<CatalogItem>> {
    Ok(serde_json::from_str(body)?)
}

pub(crate) fn decode_created(body: &str) -> Option<CatalogItem> {
    match serde_json::from_str(body) {
        Ok(item) => Some(item),
        Err(e) => {
            debug!("[HTTP] create response is not an item: {}", e);
            None
        }
    }
}

#[async_trait(?Send)]
impl CatalogRepository for HttpCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<CatalogItem>> {
        let url = self.collection_url();
        debug!("[HTTP] GET {}", url);
        let response = check_status(self.client.get(&url).send().await?)?;
        let body = response.text().await?;
        decode_items(&body)
    }

    async fn create(&self, payload: &ItemPayload) -> CatalogResult<Option<CatalogItem>> {
        let url = self.collection_url();
        debug!("[HTTP] POST {}", url);
        let response = check_status(self.client.post(&url).json(payload).send().await?)?;
        let body = response.text().await?;
        Ok(decode_created(&body))
    }

    async fn update(&self, id: &ItemId, payload: &ItemPayload) -> CatalogResult<()> {
        let url = self.item_url(id);
        debug!("[HTTP] PUT {}", url);
        check_status(self.client.put(&url).json(payload).send().await?)?;
        Ok(())
    }

    async fn delete(&self, id: &ItemId) -> CatalogResult<()> {
        let url = self.item_url(id);
        debug!("[HTTP] DELETE {}", url);
        check_status(self.client.delete(&url).send().await?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let repo = HttpCatalogRepository::new("https://api.example.com/coffee/hot/");
        assert_eq!(repo.collection_url(), "https://api.example.com/coffee/hot");
    }

    #[test]
    fn test_item_url() {
        let repo = HttpCatalogRepository::new("https://api.example.com/coffee/hot");
        assert_eq!(repo.item_url(&ItemId::from(5u64)), "https://api.example.com/coffee/hot/5");
        assert_eq!(
            repo.item_url(&ItemId::from("a b/c")),
            "https://api.example.com/coffee/hot/a%20b%2Fc"
        );
        assert_eq!(
            repo.item_url(&ItemId::from("x-1_y.z~")),
            "https://api.example.com/coffee/hot/x-1_y.z~"
        );
    }

    #[test]
    fn test_decode_items() {
        let items = decode_items(r#"[{"id":1,"title":"Latte"},{"id":2,"title":"Mocha"}]"#).unwrap();
        assert_eq!(items.len(), 2);
        assert!(matches!(decode_items(r#"{"error":"nope"}"#), Err(CatalogError::Decode(_))));
    }

    #[test]
    fn test_decode_created_is_lenient() {
        assert!(decode_created(r#"{"id":9,"title":"Flat White"}"#).is_some());
        assert!(decode_created("").is_none());
        assert!(decode_created(r#"{"ok":true}"#).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 on localhost is the discard port; nothing listens there in CI
        let repo = HttpCatalogRepository::new("http://127.0.0.1:9/coffee");
        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)), "got {:?}", err);
    }
}

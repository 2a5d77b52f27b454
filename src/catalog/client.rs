//! HTTP client for the remote product catalog.
//!
//! Speaks the fakestore-style REST contract relative to a base URL:
//! `GET /`, `GET /?limit=N`, `GET /?category=C`, `POST /`, `PUT /{id}` and
//! `DELETE /{id}`, all exchanging JSON product records.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Instant;

use crate::config::CatalogConfig;

use super::api::CatalogApi;
use super::error::{CatalogError, CatalogOperation, RemoteCause};
use super::model::Item;

const USER_AGENT: &str = concat!("storefront/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed implementation of [`CatalogApi`].
///
/// Constructed explicitly and shared by reference; there is no process-wide
/// instance.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the endpoint named in the config.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::with_base_url(&config.base_url)
    }

    /// Create a client for an explicit base URL (e.g. `https://fakestoreapi.com/products`).
    pub fn with_base_url(base_url: &str) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(CatalogError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Send one request and return the body of a successful response.
    async fn send(
        &self,
        operation: CatalogOperation,
        builder: RequestBuilder,
    ) -> Result<String, CatalogError> {
        let request = builder
            .build()
            .map_err(|e| CatalogError::remote(operation, e))?;

        tracing::debug!(
            operation = %operation,
            method = %request.method(),
            url = %request.url(),
            "Sending catalog request"
        );

        let start = Instant::now();
        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!(operation = %operation, error = %e, "Catalog request failed");
            CatalogError::remote(operation, e)
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::remote(operation, e))?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            tracing::error!(
                operation = %operation,
                status = %status,
                latency_ms,
                body = %body,
                "Catalog returned an error status"
            );
            return Err(CatalogError::remote(
                operation,
                RemoteCause::Status {
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        tracing::debug!(operation = %operation, status = %status, latency_ms, "Catalog request completed");
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: CatalogOperation,
        builder: RequestBuilder,
    ) -> Result<T, CatalogError> {
        let body = self.send(operation, builder).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(operation = %operation, error = %e, "Malformed catalog response");
            CatalogError::remote(operation, e)
        })
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch_all(&self) -> Result<Vec<Item>, CatalogError> {
        self.send_json(CatalogOperation::FetchAll, self.client.get(&self.base_url))
            .await
    }

    async fn fetch_limited(&self, limit: u32) -> Result<Vec<Item>, CatalogError> {
        let builder = self.client.get(&self.base_url).query(&[("limit", limit)]);
        self.send_json(CatalogOperation::FetchLimited, builder).await
    }

    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Item>, CatalogError> {
        let builder = self
            .client
            .get(&self.base_url)
            .query(&[("category", category)]);
        self.send_json(CatalogOperation::FetchByCategory, builder)
            .await
    }

    async fn create(&self, item: &Item) -> Result<Item, CatalogError> {
        // The server assigns ids; never send one on create.
        let body = Item {
            id: None,
            ..item.clone()
        };
        let builder = self.client.post(&self.base_url).json(&body);
        self.send_json(CatalogOperation::Create, builder).await
    }

    async fn update(&self, id: u64, item: &Item) -> Result<Item, CatalogError> {
        let builder = self.client.put(self.item_url(id)).json(item);
        self.send_json(CatalogOperation::Update, builder).await
    }

    async fn delete(&self, id: u64) -> Result<(), CatalogError> {
        self.send(CatalogOperation::Delete, self.client.delete(self.item_url(id)))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = CatalogClient::with_base_url("https://fakestoreapi.com/products/").unwrap();
        assert_eq!(client.base_url(), "https://fakestoreapi.com/products");
        assert_eq!(client.item_url(3), "https://fakestoreapi.com/products/3");
    }

    #[test]
    fn new_uses_configured_base_url() {
        let config = CatalogConfig::default();
        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(client.base_url(), config.base_url);
    }
}

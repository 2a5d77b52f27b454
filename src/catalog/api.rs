//! The seam between the list view and the remote catalog.

use async_trait::async_trait;

use super::error::CatalogError;
use super::model::Item;

/// Operations offered by the remote product catalog.
///
/// Every method issues exactly one outbound request. Implementations do not
/// retry, batch or cache; a failure of any kind is reported as
/// [`CatalogError::RemoteCallFailed`].
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch every product in the catalog.
    async fn fetch_all(&self) -> Result<Vec<Item>, CatalogError>;

    /// Fetch the first `limit` products.
    async fn fetch_limited(&self, limit: u32) -> Result<Vec<Item>, CatalogError>;

    /// Fetch the products of one category, as the server understands it.
    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Item>, CatalogError>;

    /// Create a product. The returned item carries the id assigned by the server.
    async fn create(&self, item: &Item) -> Result<Item, CatalogError>;

    /// Replace the product with the given id.
    async fn update(&self, id: u64, item: &Item) -> Result<Item, CatalogError>;

    /// Delete the product with the given id.
    async fn delete(&self, id: u64) -> Result<(), CatalogError>;
}

//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use storefront::catalog::{CatalogApi, CatalogError, CatalogOperation, Item, RemoteCause};
use storefront::config::CatalogConfig;
use storefront::ui::products::ProductListView;

/// Build an item with the fields tests usually care about.
pub fn item(id: u64, category: &str, price: f64) -> Item {
    Item {
        id: Some(id),
        title: format!("Product {}", id),
        price,
        description: format!("Description of product {}", id),
        category: category.to_string(),
        image: format!("https://example.com/{}.jpg", id),
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Fake catalog -------------------------------------------------------------

/// A call received by [`FakeCatalog`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchAll,
    FetchLimited(u32),
    FetchByCategory(String),
    Create(Item),
    Update(u64, Item),
    Delete(u64),
}

struct FakeInner {
    products: Vec<Item>,
    next_id: u64,
    failing: HashSet<CatalogOperation>,
    calls: Vec<Call>,
}

/// In-memory catalog that records every call.
///
/// Behaves like the public fakestore service: creates get a fresh id,
/// updates echo the submitted item, and nothing is actually persisted.
pub struct FakeCatalog {
    inner: Mutex<FakeInner>,
}

impl FakeCatalog {
    pub fn new(products: Vec<Item>) -> Arc<Self> {
        let next_id = products.iter().filter_map(|p| p.id).max().unwrap_or(0) + 1;
        Arc::new(Self {
            inner: Mutex::new(FakeInner {
                products,
                next_id,
                failing: HashSet::new(),
                calls: Vec::new(),
            }),
        })
    }

    /// Make every future call of `operation` fail with a 500.
    pub fn fail(&self, operation: CatalogOperation) {
        self.inner.lock().failing.insert(operation);
    }

    pub fn recover(&self, operation: CatalogOperation) {
        self.inner.lock().failing.remove(&operation);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().calls.clear();
    }

    fn record(&self, operation: CatalogOperation, call: Call) -> Result<(), CatalogError> {
        let mut inner = self.inner.lock();
        inner.calls.push(call);
        if inner.failing.contains(&operation) {
            return Err(CatalogError::remote(
                operation,
                RemoteCause::Status {
                    status: 500,
                    body: "internal error".to_string(),
                },
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApi for FakeCatalog {
    async fn fetch_all(&self) -> Result<Vec<Item>, CatalogError> {
        self.record(CatalogOperation::FetchAll, Call::FetchAll)?;
        Ok(self.inner.lock().products.clone())
    }

    async fn fetch_limited(&self, limit: u32) -> Result<Vec<Item>, CatalogError> {
        self.record(CatalogOperation::FetchLimited, Call::FetchLimited(limit))?;
        Ok(self
            .inner
            .lock()
            .products
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Item>, CatalogError> {
        self.record(
            CatalogOperation::FetchByCategory,
            Call::FetchByCategory(category.to_string()),
        )?;
        Ok(self
            .inner
            .lock()
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn create(&self, item: &Item) -> Result<Item, CatalogError> {
        self.record(CatalogOperation::Create, Call::Create(item.clone()))?;
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        Ok(item.clone().with_id(id))
    }

    async fn update(&self, id: u64, item: &Item) -> Result<Item, CatalogError> {
        self.record(CatalogOperation::Update, Call::Update(id, item.clone()))?;
        Ok(item.clone().with_id(id))
    }

    async fn delete(&self, id: u64) -> Result<(), CatalogError> {
        self.record(CatalogOperation::Delete, Call::Delete(id))
    }
}

/// A view wired to a fake catalog holding `products`.
pub fn make_view(products: Vec<Item>) -> (ProductListView, Arc<FakeCatalog>) {
    let catalog = FakeCatalog::new(products);
    let view = ProductListView::new(catalog.clone(), &CatalogConfig::default());
    (view, catalog)
}

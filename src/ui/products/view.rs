//! The product list controller.
//!
//! Owns the list state, performs remote calls through an injected
//! [`CatalogApi`], and feeds every outcome back through the reducer.

use std::sync::Arc;

use crate::catalog::{CatalogApi, Item, ItemField};
use crate::config::CatalogConfig;
use crate::ui::mvi::Reducer;

use super::error::ViewError;
use super::intent::ProductIntent;
use super::reducer::ProductListReducer;
use super::state::{ProductListState, SortOrder};

/// Which list query to issue.
#[derive(Debug, Clone)]
enum LoadSource {
    All,
    Limited(u32),
    Category(String),
}

/// List view state machine driven by a display surface.
///
/// Every operation takes `&mut self`, so operations on one view run one at a
/// time. Failures are logged, recorded in [`ProductListState::last_error`]
/// and returned; the list itself is left untouched.
pub struct ProductListView {
    client: Arc<dyn CatalogApi>,
    state: ProductListState,
    default_limit: u32,
    categories: Vec<String>,
}

impl ProductListView {
    pub fn new(client: Arc<dyn CatalogApi>, config: &CatalogConfig) -> Self {
        Self {
            client,
            state: ProductListState::default(),
            default_limit: config.default_limit,
            categories: config.categories.clone(),
        }
    }

    pub fn state(&self) -> &ProductListState {
        &self.state
    }

    /// The products to display, already filtered and sorted.
    pub fn items(&self) -> &[Item] {
        &self.state.items
    }

    /// Categories offered for filtering.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Run an intent through the reducer and store the result.
    pub fn dispatch(&mut self, intent: ProductIntent) {
        self.state = ProductListReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Initial load: the first `default_limit` products.
    pub async fn start(&mut self) -> Result<(), ViewError> {
        self.load(LoadSource::Limited(self.default_limit)).await
    }

    pub async fn load_all(&mut self) -> Result<(), ViewError> {
        self.load(LoadSource::All).await
    }

    pub async fn load_limited(&mut self, limit: u32) -> Result<(), ViewError> {
        self.load(LoadSource::Limited(limit)).await
    }

    pub async fn load_by_category(&mut self, category: &str) -> Result<(), ViewError> {
        self.load(LoadSource::Category(category.to_string())).await
    }

    /// Re-run the filter and sort pass on the current list.
    pub fn apply_filters(&mut self) {
        self.dispatch(ProductIntent::ApplyFilters);
    }

    // -- Form lifecycle -------------------------------------------------------

    pub fn toggle_form(&mut self) {
        self.dispatch(ProductIntent::ToggleForm);
    }

    pub fn begin_edit(&mut self, item: Item) {
        self.dispatch(ProductIntent::BeginEdit { item });
    }

    pub fn cancel_form(&mut self) {
        self.dispatch(ProductIntent::CancelForm);
    }

    pub fn set_field(&mut self, field: ItemField, value: impl Into<String>) {
        self.dispatch(ProductIntent::EditField {
            field,
            value: value.into(),
        });
    }

    /// Submit the form: update when editing, create otherwise.
    pub async fn submit(&mut self) -> Result<Item, ViewError> {
        if self.state.is_editing() {
            self.submit_update().await
        } else {
            self.submit_create().await
        }
    }

    /// Create a product from the form values.
    ///
    /// On success the returned item is appended and the form closes. On
    /// failure the form stays open so the user can retry.
    pub async fn submit_create(&mut self) -> Result<Item, ViewError> {
        let draft = match self.state.form.validate() {
            Ok(draft) => draft,
            Err(e) => return Err(self.fail("Invalid product form", e)),
        };

        match self.client.create(&draft).await {
            Ok(created) => {
                tracing::info!(id = ?created.id, title = %created.title, "Product added");
                self.dispatch(ProductIntent::ItemCreated {
                    item: created.clone(),
                });
                Ok(created)
            }
            Err(e) => Err(self.fail("Error adding product", e)),
        }
    }

    /// Update the edited product with the form values.
    ///
    /// The form values are laid over the edit target and sent under the
    /// target's id. On success the matching entry is replaced in place.
    pub async fn submit_update(&mut self) -> Result<Item, ViewError> {
        let Some(target) = self.state.edit_target().cloned() else {
            return Err(self.fail("Cannot update product", ViewError::NotEditing));
        };

        let merged = match self.state.form.merge_over(&target) {
            Ok(merged) => merged,
            Err(e) => return Err(self.fail("Invalid product form", e)),
        };

        let Some(id) = target.id else {
            return Err(self.fail("Cannot update product", ViewError::MissingId));
        };

        tracing::debug!(id, "Sending update request for product");
        match self.client.update(id, &merged).await {
            Ok(updated) => {
                tracing::info!(id, "Product updated");
                self.dispatch(ProductIntent::ItemUpdated {
                    id,
                    item: updated.clone(),
                });
                Ok(updated)
            }
            Err(e) => Err(self.fail("Error updating product", e)),
        }
    }

    /// Delete a product. A missing id fails without contacting the catalog.
    pub async fn remove(&mut self, id: Option<u64>) -> Result<(), ViewError> {
        let Some(id) = id else {
            return Err(self.fail("Error deleting product", ViewError::MissingId));
        };

        match self.client.delete(id).await {
            Ok(()) => {
                tracing::info!(id, "Product deleted");
                self.dispatch(ProductIntent::ItemDeleted { id });
                Ok(())
            }
            Err(e) => Err(self.fail("Error deleting product", e)),
        }
    }

    // -- Filtering and sorting ------------------------------------------------

    /// Select a category (empty clears the filter) and reload.
    ///
    /// A category loads that category from the catalog. With no category the
    /// full catalog is loaded while a sort order is active, otherwise the
    /// default-limited page.
    /// If the load fails, the previous category is restored.
    pub async fn set_category(&mut self, category: impl Into<String>) -> Result<(), ViewError> {
        let previous = self.state.selected_category.clone();
        self.dispatch(ProductIntent::CategorySelected {
            category: category.into(),
        });
        let source = self.current_source();
        let result = self.load(source).await;
        if result.is_err() {
            self.dispatch(ProductIntent::CategorySelected { category: previous });
        }
        result
    }

    /// Select a sort order and reload.
    ///
    /// An active order loads the full catalog and sorts it; clearing the
    /// order reloads whatever the category selection implies.
    /// If the load fails, the previous order is restored.
    pub async fn set_sort_order(&mut self, order: SortOrder) -> Result<(), ViewError> {
        let previous = self.state.sort_order;
        self.dispatch(ProductIntent::SortOrderSelected { order });
        let source = if order.is_active() {
            LoadSource::All
        } else {
            self.current_source()
        };
        let result = self.load(source).await;
        if result.is_err() {
            self.dispatch(ProductIntent::SortOrderSelected { order: previous });
        }
        result
    }

    fn current_source(&self) -> LoadSource {
        if let Some(category) = self.state.category_filter() {
            LoadSource::Category(category.to_string())
        } else if self.state.sort_order.is_active() {
            LoadSource::All
        } else {
            LoadSource::Limited(self.default_limit)
        }
    }

    async fn load(&mut self, source: LoadSource) -> Result<(), ViewError> {
        self.dispatch(ProductIntent::LoadStarted);
        let generation = self.state.load_generation;

        let result = match &source {
            LoadSource::All => self.client.fetch_all().await,
            LoadSource::Limited(limit) => self.client.fetch_limited(*limit).await,
            LoadSource::Category(category) => self.client.fetch_by_category(category).await,
        };

        match result {
            Ok(items) => {
                tracing::debug!(?source, count = items.len(), "Products loaded");
                self.dispatch(ProductIntent::ItemsLoaded { generation, items });
                Ok(())
            }
            Err(e) => Err(self.fail("Error loading products", e)),
        }
    }

    fn fail(&mut self, context: &str, err: impl Into<ViewError>) -> ViewError {
        let err = err.into();
        tracing::error!(error = %err, "{}", context);
        self.dispatch(ProductIntent::OperationFailed {
            message: err.to_string(),
        });
        err
    }
}

//! Intents for the product list view.

use crate::catalog::{Item, ItemField};
use crate::ui::mvi::Intent;

use super::state::SortOrder;

/// User actions and remote completions that change the list view.
#[derive(Debug, Clone)]
pub enum ProductIntent {
    /// Open the form for a new product, or close whatever form is open.
    ToggleForm,

    /// Open the form pre-populated with an existing product.
    BeginEdit { item: Item },

    /// Close the form and discard its values.
    CancelForm,

    /// User typed into one form field.
    EditField { field: ItemField, value: String },

    /// User picked a category filter. Empty clears it.
    CategorySelected { category: String },

    /// User picked a sort order.
    SortOrderSelected { order: SortOrder },

    /// A list load is about to be issued. Starts a new load generation.
    LoadStarted,

    /// A list load completed.
    ItemsLoaded {
        /// Generation the load was issued under.
        generation: u64,
        items: Vec<Item>,
    },

    /// Re-run the filter and sort pass on the current items.
    ApplyFilters,

    /// The catalog acknowledged a create.
    ItemCreated { item: Item },

    /// The catalog acknowledged an update of the product with `id`.
    ItemUpdated { id: u64, item: Item },

    /// The catalog acknowledged a delete.
    ItemDeleted { id: u64 },

    /// An operation failed; nothing else changes.
    OperationFailed { message: String },
}

impl Intent for ProductIntent {}

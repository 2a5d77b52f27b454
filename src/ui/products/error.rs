use thiserror::Error;

use crate::catalog::{CatalogError, ValidationError};

/// Errors reported by [`ProductListView`](super::ProductListView) operations.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The form failed validation; no remote call was made.
    #[error("Invalid product: {0}")]
    Validation(#[from] ValidationError),

    /// The remote call failed; the list is unchanged.
    #[error(transparent)]
    Remote(#[from] CatalogError),

    /// The operation needs a product id and none was given.
    #[error("Product ID is undefined")]
    MissingId,

    /// An update was submitted while no product is being edited.
    #[error("No product is being edited")]
    NotEditing,
}

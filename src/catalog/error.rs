//! Error types for catalog calls and item validation.

use std::fmt;
use thiserror::Error;

use super::model::ItemField;

/// The remote operations the catalog client can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOperation {
    FetchAll,
    FetchLimited,
    FetchByCategory,
    Create,
    Update,
    Delete,
}

impl CatalogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogOperation::FetchAll => "fetch_all",
            CatalogOperation::FetchLimited => "fetch_limited",
            CatalogOperation::FetchByCategory => "fetch_by_category",
            CatalogOperation::Create => "create",
            CatalogOperation::Update => "update",
            CatalogOperation::Delete => "delete",
        }
    }
}

impl fmt::Display for CatalogOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by the catalog client.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A remote call failed. Callers treat every cause the same way.
    #[error("Catalog call '{operation}' failed: {cause}")]
    RemoteCallFailed {
        operation: CatalogOperation,
        #[source]
        cause: RemoteCause,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl CatalogError {
    pub fn remote(operation: CatalogOperation, cause: impl Into<RemoteCause>) -> Self {
        CatalogError::RemoteCallFailed {
            operation,
            cause: cause.into(),
        }
    }

    /// The failed operation, if this error came from a remote call.
    pub fn operation(&self) -> Option<CatalogOperation> {
        match self {
            CatalogError::RemoteCallFailed { operation, .. } => Some(*operation),
            CatalogError::ClientBuild(_) => None,
        }
    }
}

/// Why a remote call failed. Opaque to the list view.
#[derive(Debug, Error)]
pub enum RemoteCause {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Local validation failure. Detected before any remote call is issued.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{0}' is required")]
    MissingField(ItemField),

    #[error("Price '{0}' is not a valid number")]
    InvalidPrice(String),

    #[error("Price must not be negative (got {0})")]
    NegativePrice(f64),
}

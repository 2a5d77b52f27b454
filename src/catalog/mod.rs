//! Remote product catalog: the shared item record and the client boundary.

mod api;
mod client;
mod error;
mod model;

pub use api::CatalogApi;
pub use client::CatalogClient;
pub use error::{CatalogError, CatalogOperation, RemoteCause, ValidationError};
pub use model::{Item, ItemField};

//! Configuration loading for the catalog endpoint and list defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config};

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Settings for the remote catalog and the list view built on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the products resource (e.g., "https://fakestoreapi.com/products").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of products loaded when no filter or sort is active (default: 10).
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    /// Categories offered to the user for filtering.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

fn default_base_url() -> String {
    "https://fakestoreapi.com/products".to_string()
}

fn default_limit() -> u32 {
    10
}

fn default_categories() -> Vec<String> {
    ["Electronics", "Clothing", "Books", "Home"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_limit: default_limit(),
            categories: default_categories(),
        }
    }
}

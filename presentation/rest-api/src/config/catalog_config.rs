use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use business::domain::product::model::Product;
use persistence::catalog::load_products;

/// Where the startup product catalog comes from
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub products_file: Option<PathBuf>,
}

impl CatalogConfig {
    /// Environment variables:
    /// - PRODUCTS_FILE: path to a JSON array of products (optional, empty catalog when unset)
    pub fn from_env() -> Self {
        Self {
            products_file: env::var_os("PRODUCTS_FILE").map(PathBuf::from),
        }
    }

    /// Reads the configured catalog.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not hold a valid catalog
    pub fn load_products(&self) -> anyhow::Result<HashMap<i64, Product>> {
        match &self.products_file {
            Some(path) => Ok(load_products(path)?),
            None => {
                tracing::warn!("PRODUCTS_FILE not set, starting with an empty catalog");
                Ok(HashMap::new())
            }
        }
    }
}

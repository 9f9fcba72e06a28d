use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::query::ProductQuery;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns the products matching `query`, keyed by id.
    ///
    /// An id filter yields at most one entry. No match is an empty map, not an error.
    async fn search_products(
        &self,
        query: &ProductQuery,
    ) -> Result<HashMap<i64, Product>, RepositoryError>;
}

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::ProductQuery;

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, query: ProductQuery) -> Result<HashMap<i64, Product>, ProductError>;
}

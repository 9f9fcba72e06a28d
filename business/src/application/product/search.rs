use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::query::ProductQuery;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::SearchProductsUseCase;

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, query: ProductQuery) -> Result<HashMap<i64, Product>, ProductError> {
        match query.id {
            Some(id) => self.logger.info(&format!("Searching products by id: {}", id)),
            None => self.logger.info("Searching all products"),
        }

        let products = self.repository.search_products(&query).await.map_err(|e| {
            self.logger
                .error(&format!("Product search failed: {}", e));
            ProductError::Repository(e)
        })?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

use std::collections::HashMap;
use std::sync::Arc;

use business::application::product::search::SearchProductsUseCaseImpl;
use business::domain::product::model::Product;
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryMap;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(products: HashMap<i64, Product>) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryMap::new(products));
        tracing::info!(
            products = product_repository.len(),
            "In-memory product repository ready"
        );

        // Product use cases
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository,
            logger,
        });

        Self {
            health_api: HealthApi::new(),
            product_api: ProductApi::new(search_use_case),
        }
    }
}

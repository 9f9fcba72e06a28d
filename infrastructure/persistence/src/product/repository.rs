use std::collections::HashMap;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::query::ProductQuery;
use business::domain::product::repository::ProductRepository;

/// In-memory product store. The map is fixed at construction and only read afterwards.
pub struct ProductRepositoryMap {
    products: HashMap<i64, Product>,
}

impl ProductRepositoryMap {
    pub fn new(products: HashMap<i64, Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryMap {
    async fn search_products(
        &self,
        query: &ProductQuery,
    ) -> Result<HashMap<i64, Product>, RepositoryError> {
        let Some(id) = query.id else {
            return Ok(self.products.clone());
        };

        Ok(self
            .products
            .get(&id)
            .map(|product| HashMap::from([(id, product.clone())]))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn product(id: i64, description: &str, price: f64, seller_id: i64) -> Product {
        Product::from_repository(id, description.to_string(), price, seller_id)
    }

    #[tokio::test]
    async fn should_return_the_product_matching_the_id() {
        // Arrange
        let expected = product(1, "product 1", 100.0, 1);
        let repository = ProductRepositoryMap::new(HashMap::from([(1, expected.clone())]));

        // Act
        let result = repository.search_products(&ProductQuery::by_id(1)).await;

        // Assert
        let products = result.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[&1], expected);
    }

    #[tokio::test]
    async fn should_return_empty_when_store_is_empty() {
        let repository = ProductRepositoryMap::new(HashMap::new());

        let products = repository
            .search_products(&ProductQuery::by_id(1))
            .await
            .unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn should_return_empty_when_no_product_has_the_id() {
        let repository =
            ProductRepositoryMap::new(HashMap::from([(2, product(2, "product 1", 100.0, 1))]));

        let products = repository
            .search_products(&ProductQuery::by_id(1))
            .await
            .unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn should_return_empty_for_negative_id() {
        let repository =
            ProductRepositoryMap::new(HashMap::from([(1, product(1, "product 1", 100.0, 1))]));

        let products = repository
            .search_products(&ProductQuery::by_id(-1))
            .await
            .unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn should_return_whole_store_without_filter() {
        let store = HashMap::from([
            (1, product(1, "product 1", 100.0, 1)),
            (2, product(2, "product 2", 12.5, 7)),
            (3, product(3, "product 3", 0.0, 1)),
        ]);
        let repository = ProductRepositoryMap::new(store.clone());

        let products = repository
            .search_products(&ProductQuery::all())
            .await
            .unwrap();

        assert_eq!(products, store);
    }

    fn arb_store() -> impl Strategy<Value = HashMap<i64, Product>> {
        prop::collection::hash_map(
            0i64..1_000,
            ("[a-z ]{0,20}", 0.0f64..10_000.0, 0i64..100),
            0..20,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(id, (description, price, seller_id))| {
                    (id, Product::from_repository(id, description, price, seller_id))
                })
                .collect()
        })
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    proptest! {
        #[test]
        fn id_filter_returns_exactly_the_stored_entry(store in arb_store(), pick in any::<prop::sample::Index>()) {
            prop_assume!(!store.is_empty());
            let keys: Vec<i64> = store.keys().copied().collect();
            let id = keys[pick.index(keys.len())];
            let repository = ProductRepositoryMap::new(store.clone());

            let products = block_on(repository.search_products(&ProductQuery::by_id(id))).unwrap();

            prop_assert_eq!(products, HashMap::from([(id, store[&id].clone())]));
        }

        #[test]
        fn id_filter_for_absent_key_returns_empty(store in arb_store(), id in -1_000i64..2_000) {
            prop_assume!(!store.contains_key(&id));
            let repository = ProductRepositoryMap::new(store);

            let products = block_on(repository.search_products(&ProductQuery::by_id(id))).unwrap();

            prop_assert!(products.is_empty());
        }

        #[test]
        fn no_filter_returns_the_full_store(store in arb_store()) {
            let repository = ProductRepositoryMap::new(store.clone());

            let products = block_on(repository.search_products(&ProductQuery::all())).unwrap();

            prop_assert_eq!(products, store);
        }
    }
}

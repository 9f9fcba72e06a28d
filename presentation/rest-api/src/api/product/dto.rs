use std::collections::HashMap;

use poem_openapi::Object;

use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::query::ProductQuery;

/// Builds a search query from the raw `id` query parameter.
///
/// A missing parameter matches every product. A present one must be a
/// decimal integer, optionally signed.
pub fn parse_product_query(raw_id: Option<&str>) -> Result<ProductQuery, ProductError> {
    match raw_id {
        None => Ok(ProductQuery::all()),
        Some(raw) => raw
            .parse::<i64>()
            .map(ProductQuery::by_id)
            .map_err(|_| ProductError::InvalidId),
    }
}

#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: i64,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Identifier of the seller offering the product
    pub seller_id: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            description: product.description,
            price: product.price,
            seller_id: product.seller_id,
        }
    }
}

/// Search result envelope
#[derive(Debug, Clone, Object)]
pub struct ProductSearchResponse {
    /// Always "success"
    pub message: String,
    /// Matching products keyed by their identifier
    pub data: HashMap<String, ProductResponse>,
}

impl From<HashMap<i64, Product>> for ProductSearchResponse {
    fn from(products: HashMap<i64, Product>) -> Self {
        Self {
            message: "success".to_string(),
            data: products
                .into_iter()
                .map(|(id, product)| (id.to_string(), product.into()))
                .collect(),
        }
    }
}

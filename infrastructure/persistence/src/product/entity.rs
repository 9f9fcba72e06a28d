use serde::Deserialize;

use business::domain::product::model::Product;

/// On-disk shape of a catalog record.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEntity {
    pub id: i64,
    pub description: String,
    pub price: f64,
    pub seller_id: i64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(self.id, self.description, self.price, self.seller_id)
    }
}

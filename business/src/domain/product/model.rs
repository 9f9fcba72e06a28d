/// A catalog entry. Stored products are never mutated; the repository owns them.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub description: String,
    pub price: f64,
    pub seller_id: i64,
}

impl Product {
    /// Constructor for data already held by a repository (no validation).
    pub fn from_repository(id: i64, description: String, price: f64, seller_id: i64) -> Self {
        Self {
            id,
            description,
            price,
            seller_id,
        }
    }
}

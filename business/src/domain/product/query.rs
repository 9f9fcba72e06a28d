/// Filter for product searches.
///
/// `id: None` matches every product. `id: Some(v)` matches only the product
/// keyed `v`; any integer is accepted, including zero and negatives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub id: Option<i64>,
}

impl ProductQuery {
    pub fn all() -> Self {
        Self { id: None }
    }

    pub fn by_id(id: i64) -> Self {
        Self { id: Some(id) }
    }
}

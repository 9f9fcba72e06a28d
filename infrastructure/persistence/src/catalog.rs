use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;

use thiserror::Error;

use business::domain::product::model::Product;

use crate::product::entity::ProductEntity;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog.read_error: {0}")]
    Read(#[from] std::io::Error),
    #[error("catalog.parse_error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog.duplicated_id: {0}")]
    DuplicatedId(i64),
}

/// Loads the startup catalog from a JSON array of product records.
pub fn load_products(path: impl AsRef<Path>) -> Result<HashMap<i64, Product>, CatalogError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let products = parse_products(&raw)?;
    tracing::info!(
        path = %path.display(),
        count = products.len(),
        "Product catalog loaded"
    );
    Ok(products)
}

/// Parses a JSON array of product records, rejecting repeated ids.
pub fn parse_products(raw: &str) -> Result<HashMap<i64, Product>, CatalogError> {
    let entities: Vec<ProductEntity> = serde_json::from_str(raw)?;

    let mut products = HashMap::with_capacity(entities.len());
    for entity in entities {
        match products.entry(entity.id) {
            Entry::Occupied(_) => return Err(CatalogError::DuplicatedId(entity.id)),
            Entry::Vacant(slot) => {
                slot.insert(entity.into_domain());
            }
        }
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn should_key_loaded_products_by_id() {
        let raw = r#"[
            {"id": 1, "description": "product 1", "price": 100, "seller_id": 1},
            {"id": 7, "description": "product 7", "price": 12.5, "seller_id": 3}
        ]"#;

        let products = parse_products(raw).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(
            products[&1],
            Product::from_repository(1, "product 1".to_string(), 100.0, 1)
        );
        assert_eq!(products[&7].seller_id, 3);
    }

    #[test]
    fn should_accept_empty_array() {
        let products = parse_products("[]").unwrap();

        assert!(products.is_empty());
    }

    #[test]
    fn should_reject_duplicated_ids() {
        let raw = r#"[
            {"id": 1, "description": "a", "price": 1, "seller_id": 1},
            {"id": 1, "description": "b", "price": 2, "seller_id": 2}
        ]"#;

        let result = parse_products(raw);

        assert!(matches!(result, Err(CatalogError::DuplicatedId(1))));
    }

    #[test]
    fn should_reject_records_missing_fields() {
        let raw = r#"[{"id": 1, "description": "a", "price": 1}]"#;

        let result = parse_products(raw);

        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn should_load_products_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 3, "description": "product 3", "price": 9.99, "seller_id": 2}}]"#
        )
        .unwrap();

        let products = load_products(file.path()).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[&3].description, "product 3");
    }

    #[test]
    fn should_fail_when_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();

        let result = load_products(dir.path().join("missing.json"));

        assert!(matches!(result, Err(CatalogError::Read(_))));
    }
}

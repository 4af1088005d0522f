//! JSON catalog data source
//!
//! The catalog ships as a JSON array of product records (camelCase fields,
//! the format the front end consumes). A default dataset is embedded in the
//! binary; a `[catalog] data_file` config entry points at an external file
//! that takes precedence.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{DomainError, DomainResult, Product};

/// Default dataset compiled into the binary.
const EMBEDDED_PRODUCTS: &str = include_str!("../../../data/products.json");

/// External (file/wire) representation of a product record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: String,
    name: String,
    description: String,
    price: f64,
    available: bool,
    category: String,
    image_url: String,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            available: record.available,
            category: record.category,
            image_url: record.image_url,
        }
    }
}

/// Loads the embedded default dataset.
pub fn load_default() -> DomainResult<Vec<Product>> {
    parse_products(EMBEDDED_PRODUCTS)
}

/// Loads the catalog from an external JSON file.
pub fn load_from_file(path: &Path) -> DomainResult<Vec<Product>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        DomainError::DataSource(format!("failed to read {}: {}", path.display(), e))
    })?;
    parse_products(&raw)
}

fn parse_products(json: &str) -> DomainResult<Vec<Product>> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)
        .map_err(|e| DomainError::DataSource(format!("invalid product data: {e}")))?;

    // The catalog contract requires unique ids; refuse to serve a broken one.
    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            return Err(DomainError::DataSource(format!(
                "duplicate product id: {}",
                record.id
            )));
        }
    }

    Ok(records.into_iter().map(Product::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_records() {
        let json = r#"[
            {
                "id": "p-1",
                "name": "Desk Lamp",
                "description": "Adjustable LED lamp",
                "price": 24.5,
                "available": true,
                "category": "Lighting",
                "imageUrl": "https://cdn.example.com/lamp.jpg"
            }
        ]"#;
        let products = parse_products(json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "p-1");
        assert_eq!(products[0].image_url, "https://cdn.example.com/lamp.jpg");
        assert!(products[0].available);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_products("not json").unwrap_err();
        assert!(matches!(err, DomainError::DataSource(_)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id": "p-1", "name": "A", "description": "", "price": 1.0,
             "available": true, "category": "", "imageUrl": ""},
            {"id": "p-1", "name": "B", "description": "", "price": 2.0,
             "available": false, "category": "", "imageUrl": ""}
        ]"#;
        let err = parse_products(json).unwrap_err();
        assert!(err.to_string().contains("duplicate product id"));
    }

    #[test]
    fn embedded_dataset_is_valid() {
        let products = load_default().unwrap();
        assert!(!products.is_empty());
    }
}

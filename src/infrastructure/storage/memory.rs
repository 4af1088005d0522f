//! In-memory catalog storage

use async_trait::async_trait;

use crate::domain::product::{find_by_id, Product, ProductRepository};
use crate::domain::DomainResult;

/// Immutable in-memory product catalog.
///
/// Holds the startup snapshot in its original data source order. There is
/// no write path, so readers share it via `Arc` without locking.
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
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
impl ProductRepository for InMemoryCatalog {
    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Product>> {
        Ok(find_by_id(&self.products, id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product {
                id: "1".into(),
                name: "Apple".into(),
                description: "Crisp red apple".into(),
                price: 10.0,
                available: true,
                category: "Fruit".into(),
                image_url: String::new(),
            },
            Product {
                id: "2".into(),
                name: "Banana".into(),
                description: "Ripe banana".into(),
                price: 5.0,
                available: false,
                category: "Fruit".into(),
                image_url: String::new(),
            },
        ]
    }

    #[tokio::test]
    async fn find_all_preserves_order() {
        let catalog = InMemoryCatalog::new(sample());
        let products = catalog.find_all().await.unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn find_by_id_hits_and_misses() {
        let catalog = InMemoryCatalog::new(sample());
        assert_eq!(
            catalog.find_by_id("2").await.unwrap().map(|p| p.name),
            Some("Banana".to_string())
        );
        assert!(catalog.find_by_id("99").await.unwrap().is_none());
    }
}

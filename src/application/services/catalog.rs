//! Catalog business logic service

use std::sync::Arc;

use tracing::debug;

use crate::domain::product::{
    average_price_available, evaluate, top_cheapest_available, DEFAULT_TOP_CHEAPEST,
};
use crate::domain::{DomainError, DomainResult, PageResult, Product, ProductQuery, ProductRepository};

/// Aggregate catalog figures for the stats endpoint.
#[derive(Debug, Clone)]
pub struct CatalogSummary {
    pub total_products: u64,
    pub available_products: u64,
    /// Mean price of available products, 2 decimal places, 0 when none.
    pub average_price_available: f64,
    /// Cheapest available products, ascending by price.
    pub top_cheapest: Vec<Product>,
}

/// Service for catalog queries
pub struct CatalogService {
    repository: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Run a catalog query: filter, sort, paginate.
    pub async fn search(&self, query: &ProductQuery) -> DomainResult<PageResult<Product>> {
        let products = self.repository.find_all().await?;
        let page = evaluate(&products, query);
        debug!(
            total = page.total,
            page = page.page,
            limit = page.limit,
            "catalog query evaluated"
        );
        Ok(page)
    }

    /// Fetch a single product, failing with `NotFound` when absent.
    pub async fn get(&self, id: &str) -> DomainResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "product",
                field: "id",
                value: id.to_string(),
            })
    }

    /// Aggregate figures over the whole catalog.
    pub async fn summary(&self) -> DomainResult<CatalogSummary> {
        let products = self.repository.find_all().await?;
        let available = products.iter().filter(|p| p.available).count() as u64;
        Ok(CatalogSummary {
            total_products: products.len() as u64,
            available_products: available,
            average_price_available: average_price_available(&products),
            top_cheapest: top_cheapest_available(&products, DEFAULT_TOP_CHEAPEST),
        })
    }

    /// Number of products in the catalog.
    pub async fn count(&self) -> DomainResult<u64> {
        Ok(self.repository.find_all().await?.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryCatalog;

    fn product(id: &str, name: &str, price: f64, available: bool) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: format!("{} description", name),
            price,
            available,
            category: "Test".into(),
            image_url: String::new(),
        }
    }

    fn service() -> CatalogService {
        let catalog = InMemoryCatalog::new(vec![
            product("1", "Apple", 10.0, true),
            product("2", "Banana", 5.0, false),
            product("3", "apricot", 7.0, true),
        ]);
        CatalogService::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn search_applies_the_engine() {
        let query = ProductQuery {
            search: Some("ap".into()),
            available: Some(true),
            sort: Some(crate::domain::SortKey::Price),
            ..Default::default()
        };
        let page = service().search(&query).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.data[0].id, "3");
        assert_eq!(page.data[1].id, "1");
    }

    #[tokio::test]
    async fn get_maps_missing_product_to_not_found() {
        let svc = service();
        assert_eq!(svc.get("2").await.unwrap().name, "Banana");

        let err = svc.get("99").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.to_string(), "Not found: product with id=99");
    }

    #[tokio::test]
    async fn summary_aggregates_the_catalog() {
        let summary = service().summary().await.unwrap();
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.available_products, 2);
        // (10 + 7) / 2
        assert_eq!(summary.average_price_available, 8.5);
        let ids: Vec<&str> = summary.top_cheapest.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }
}

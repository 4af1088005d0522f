//! Product repository interface

use async_trait::async_trait;

use super::model::Product;
use crate::domain::DomainResult;

/// Read-only access to the product catalog.
///
/// The catalog is initialized once before any query is served and never
/// reloaded, so implementations need no locking for readers.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in their original (data source) order.
    async fn find_all(&self) -> DomainResult<Vec<Product>>;

    /// A single product by exact `id` match, if present.
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Product>>;
}

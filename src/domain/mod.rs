pub mod error;
pub mod product;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use product::{
    evaluate, find_by_id, PageResult, Product, ProductQuery, ProductRepository, SortKey, SortOrder,
};

//! Product aggregate
//!
//! Contains the Product entity, the query engine, catalog statistics,
//! and the repository interface.

pub mod model;
pub mod query;
pub mod repository;
pub mod stats;

pub use model::Product;
pub use query::{
    evaluate, find_by_id, parse_bool_literal, PageResult, ProductQuery, SortKey, SortOrder,
    DEFAULT_LIMIT, DEFAULT_PAGE,
};
pub use repository::ProductRepository;
pub use stats::{average_price_available, top_cheapest_available, DEFAULT_TOP_CHEAPEST};

//! Application services

pub mod catalog;

pub use catalog::{CatalogService, CatalogSummary};

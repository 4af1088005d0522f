//! # Product Catalog Service
//!
//! REST API serving a read-only product catalog with case-insensitive
//! search, availability filtering, single-key sorting, and page-based
//! pagination.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: product entity, query engine, catalog statistics, errors
//! - **application**: catalog service (use cases over the repository)
//! - **infrastructure**: JSON data source and in-memory catalog storage
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;

pub use config::{default_config_path, AppConfig};

// Re-export API router
pub use interfaces::http::create_api_router;

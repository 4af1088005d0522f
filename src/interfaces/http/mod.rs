//! HTTP REST API interfaces
//!
//! - `modules`: per-resource handlers and DTOs plus shared middleware
//! - `router`: API router with Swagger documentation

pub mod modules;
pub mod router;

pub use router::create_api_router;

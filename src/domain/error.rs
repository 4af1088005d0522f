//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Data source error: {0}")]
    DataSource(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

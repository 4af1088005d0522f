//! Product domain entity

/// A single catalog entry.
///
/// The collection of products is loaded once at startup and is read-only
/// for the lifetime of the process; `id` is unique across the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Non-negative price, used for numeric sorting and display
    pub price: f64,
    /// Whether the product can currently be purchased
    pub available: bool,
    pub category: String,
    pub image_url: String,
}

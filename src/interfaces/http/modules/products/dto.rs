//! Product API DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::CatalogSummary;
use crate::domain::product::parse_bool_literal;
use crate::domain::{PageResult, Product, ProductQuery, SortKey, SortOrder};

/// Product as serialized on the wire (and in the data file).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub available: bool,
    pub category: String,
    pub image_url: String,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            available: p.available,
            category: p.category,
            image_url: p.image_url,
        }
    }
}

/// Raw query parameters for `GET /api/products`.
///
/// Everything arrives as untyped text. Malformed values never produce a 400:
/// they degrade to the documented defaults when the parameters are turned
/// into a typed [`ProductQuery`].
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductListParams {
    /// Case-insensitive substring matched against name or description.
    pub search: Option<String>,
    /// Sort key: `price` or `name`. Anything else leaves the catalog order.
    pub sort: Option<String>,
    /// Sort direction: `asc` (default) or `desc`.
    pub order: Option<String>,
    /// 1-based page number. Default: 1.
    pub page: Option<String>,
    /// Page size. Default: 10.
    pub limit: Option<String>,
    /// Availability filter: exactly `true` or `false`.
    pub available: Option<String>,
}

impl ProductListParams {
    /// Normalize the raw text parameters into a typed query descriptor.
    pub fn into_query(self) -> ProductQuery {
        ProductQuery {
            search: self.search.filter(|s| !s.is_empty()),
            available: self.available.as_deref().and_then(parse_bool_literal),
            sort: self.sort.as_deref().and_then(SortKey::parse),
            order: self
                .order
                .as_deref()
                .map(SortOrder::parse)
                .unwrap_or_default(),
            page: parse_positive(self.page.as_deref()),
            limit: parse_positive(self.limit.as_deref()),
        }
    }
}

/// `"abc"`, `"-3"`, `"0"`, `"1.5"` all normalize to "not provided".
fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.parse::<u32>().ok()).filter(|n| *n > 0)
}

/// One page of products plus pagination metadata.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PageResponse<T> {
    /// Count of records matching the filters, across all pages.
    pub total: u64,
    /// Page number actually applied (1-based).
    pub page: u32,
    /// Page size actually applied.
    pub limit: u32,
    /// Records on the current page.
    pub data: Vec<T>,
}

impl PageResponse<ProductDto> {
    pub fn from_page(page: PageResult<Product>) -> Self {
        Self {
            total: page.total,
            page: page.page,
            limit: page.limit,
            data: page.data.into_iter().map(ProductDto::from).collect(),
        }
    }
}

/// Error payload for failed requests.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Aggregate catalog figures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummaryDto {
    pub total_products: u64,
    pub available_products: u64,
    /// Mean price of available products, rounded to 2 decimals.
    pub average_price_available: f64,
    /// Cheapest available products, ascending by price.
    pub top_cheapest: Vec<ProductDto>,
}

impl From<CatalogSummary> for CatalogSummaryDto {
    fn from(s: CatalogSummary) -> Self {
        Self {
            total_products: s.total_products,
            available_products: s.available_products,
            average_price_available: s.average_price_available,
            top_cheapest: s.top_cheapest.into_iter().map(ProductDto::from).collect(),
        }
    }
}

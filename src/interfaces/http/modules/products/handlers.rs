//! Product REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CatalogSummaryDto, ErrorResponse, PageResponse, ProductDto, ProductListParams,
};
use crate::application::CatalogService;
use crate::domain::DomainError;

/// Product handler state
#[derive(Clone)]
pub struct ProductsState {
    pub service: Arc<CatalogService>,
}

/// List products with search, filtering, sorting and pagination.
///
/// Malformed parameter values are not errors; each one falls back to its
/// default, so this endpoint always answers 200 for a loaded catalog.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ProductListParams),
    responses(
        (status = 200, description = "Page of matching products", body = PageResponse<ProductDto>)
    )
)]
pub async fn list_products(
    State(state): State<ProductsState>,
    Query(params): Query<ProductListParams>,
) -> Result<Json<PageResponse<ProductDto>>, (StatusCode, Json<ErrorResponse>)> {
    let query = params.into_query();
    match state.service.search(&query).await {
        Ok(page) => Ok(Json(PageResponse::from_page(page))),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )),
    }
}

/// Aggregate catalog figures: counts, average price, cheapest products.
#[utoipa::path(
    get,
    path = "/api/products/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Catalog summary", body = CatalogSummaryDto)
    )
)]
pub async fn catalog_stats(
    State(state): State<ProductsState>,
) -> Result<Json<CatalogSummaryDto>, (StatusCode, Json<ErrorResponse>)> {
    match state.service.summary().await {
        Ok(summary) => Ok(Json(summary.into())),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )),
    }
}

/// Fetch a single product by id.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductDto),
        (status = 404, description = "No product with this id", body = ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<ProductsState>,
    Path(id): Path<String>,
) -> Result<Json<ProductDto>, (StatusCode, Json<ErrorResponse>)> {
    match state.service.get(&id).await {
        Ok(product) => Ok(Json(product.into())),
        Err(e @ DomainError::NotFound { .. }) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(e.to_string())),
        )),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.to_string())),
        )),
    }
}

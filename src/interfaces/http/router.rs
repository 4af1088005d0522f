//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::modules::{health, metrics, products, request_id};
use crate::application::CatalogService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Products
        products::list_products,
        products::catalog_stats,
        products::get_product,
    ),
    components(
        schemas(
            products::ProductDto,
            products::PageResponse<products::ProductDto>,
            products::ErrorResponse,
            products::CatalogSummaryDto,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Products", description = "Read-only product catalog: search, filter, sort, paginate"),
    ),
    info(
        title = "Product Catalog API",
        version = "1.0.0",
        description = "REST API for browsing a read-only product catalog",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
///
/// Pass the Prometheus handle installed at startup to expose `/metrics`;
/// `None` (used by tests) leaves the route out.
pub fn create_api_router(
    service: Arc<CatalogService>,
    metrics_handle: Option<PrometheusHandle>,
) -> Router {
    let products_state = products::ProductsState {
        service: service.clone(),
    };
    let health_state = health::HealthState {
        service,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration (the catalog front end is served from another origin)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The "/stats" literal must be declared alongside "/{id}"; axum prefers
    // the literal segment over the capture.
    let product_routes = Router::new()
        .route("/", get(products::list_products))
        .route("/stats", get(products::catalog_stats))
        .route("/{id}", get(products::get_product))
        .with_state(products_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    let mut app = Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .merge(health_routes)
        // Products
        .nest("/api/products", product_routes);

    if let Some(handle) = metrics_handle {
        let metrics_routes = Router::new()
            .route("/metrics", get(metrics::prometheus_metrics))
            .with_state(metrics::MetricsState { handle });
        app = app.merge(metrics_routes);
    }

    // Middleware
    app.layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::Product;
    use crate::infrastructure::InMemoryCatalog;
    use crate::interfaces::http::modules::products::{ErrorResponse, PageResponse, ProductDto};

    fn product(id: &str, name: &str, price: f64, available: bool) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: format!("{} description", name),
            price,
            available,
            category: "Fruit".into(),
            image_url: String::new(),
        }
    }

    fn test_router() -> Router {
        let catalog = InMemoryCatalog::new(vec![
            product("1", "Apple", 10.0, true),
            product("2", "Banana", 5.0, false),
            product("3", "apricot", 7.0, true),
        ]);
        let service = Arc::new(CatalogService::new(Arc::new(catalog)));
        create_api_router(service, None)
    }

    async fn get_json<T: DeserializeOwned>(uri: &str) -> (StatusCode, T) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn list_endpoint_filters_and_sorts() {
        let (status, page) = get_json::<PageResponse<ProductDto>>(
            "/api/products?search=ap&available=true&sort=price&order=asc&page=1&limit=10",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page.total, 2);
        let ids: Vec<&str> = page.data.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[tokio::test]
    async fn list_endpoint_coerces_junk_parameters() {
        let (status, page) =
            get_json::<PageResponse<ProductDto>>("/api/products?page=abc&limit=-5&available=maybe")
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn detail_endpoint_returns_the_product() {
        let (status, dto) = get_json::<ProductDto>("/api/products/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dto.name, "Banana");
    }

    #[tokio::test]
    async fn detail_endpoint_reports_missing_products() {
        let (status, err) = get_json::<ErrorResponse>("/api/products/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Not found: product with id=99");
    }

    #[tokio::test]
    async fn stats_route_wins_over_the_id_capture() {
        let (status, json) = get_json::<serde_json::Value>("/api/products/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalProducts"], 3);
        assert_eq!(json["availableProducts"], 2);
    }

    #[tokio::test]
    async fn health_reports_catalog_size() {
        let (status, json) = get_json::<serde_json::Value>("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["products"], 3);
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }
}

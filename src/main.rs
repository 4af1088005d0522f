//!
//! Product catalog REST API server.
//! Reads configuration from TOML file (~/.config/catalog-service/config.toml).

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn};

use catalog_service::application::CatalogService;
use catalog_service::config::AppConfig;
use catalog_service::infrastructure::storage::json;
use catalog_service::infrastructure::InMemoryCatalog;
use catalog_service::server::{self, init_tracing};
use catalog_service::{create_api_router, default_config_path};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("CATALOG_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            let cfg = AppConfig::default();
            init_tracing(&cfg);
            warn!(
                "Failed to load config from {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            cfg
        }
    };

    info!("Starting product catalog service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");

    // ── Catalog (loaded once, immutable afterwards) ────────────
    let products = match &config.catalog.data_file {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            match json::load_from_file(path) {
                Ok(products) => products,
                Err(e) => {
                    error!("Failed to load product catalog: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => json::load_default()?,
    };
    info!("Catalog loaded: {} products", products.len());

    let catalog = Arc::new(InMemoryCatalog::new(products));
    let service = Arc::new(CatalogService::new(catalog));

    // ── REST API ───────────────────────────────────────────────
    let router = create_api_router(service, Some(prometheus_handle));
    server::run(&config, router).await?;

    info!("Server stopped");
    Ok(())
}

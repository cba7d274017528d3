//! Server-rendered web server for Ezma library pages
//!
//! Serves the library detail pages, the matching JSON API and the static
//! library images.

use std::path::{Path, PathBuf};

use axum::Router;
use axum::routing::get;
use ezma_catalog::CatalogService;
use ezma_core::EzmaConfig;
use ezma_core::config::{MapConfig, ServerConfig};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::errors::WebError;
use crate::handlers::api_library;
use crate::pages::library_detail_page;

/// Library images shipped with this crate, served when no directory is configured.
pub const BUNDLED_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static/images");

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog lookups behind every page
    pub catalog: CatalogService,
    /// Map zoom levels for the page widgets
    pub map: MapConfig,
}

impl AppState {
    /// Creates state from a catalog service and map settings.
    pub fn new(catalog: CatalogService, map: MapConfig) -> Self {
        Self { catalog, map }
    }
}

/// Builds the application router.
pub fn router(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        // Pages
        .route("/libraries/{id}", get(library_detail_page))
        // JSON API endpoints (for external clients)
        .route("/api/libraries/{id}", get(api_library))
        // Static assets
        .nest_service("/images", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Directory served under `/images`: the configured one, else the bundled images.
pub fn assets_dir(server: &ServerConfig) -> PathBuf {
    server
        .assets_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(BUNDLED_ASSETS_DIR))
}

/// Runs the web server until it fails.
///
/// # Errors
/// - `WebError::Bind` - Configured address is unavailable
/// - `WebError::Serve` - Server stopped with an I/O error
pub async fn run_server(config: EzmaConfig, catalog: CatalogService) -> Result<(), WebError> {
    let state = AppState::new(catalog, config.map.clone());
    let app = router(state, &assets_dir(&config.server));

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| WebError::Bind {
            address: address.clone(),
            source,
        })?;

    info!("Ezma library pages running on http://{address}/libraries/1");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_images_used_by_default() {
        let dir = assets_dir(&ServerConfig::default());

        assert_eq!(dir, PathBuf::from(BUNDLED_ASSETS_DIR));
        assert!(dir.join("library-shelves.png").is_file());
    }

    #[test]
    fn test_configured_assets_dir_wins() {
        let server = ServerConfig {
            assets_dir: Some(PathBuf::from("/srv/ezma/images")),
            ..ServerConfig::default()
        };

        assert_eq!(assets_dir(&server), PathBuf::from("/srv/ezma/images"));
    }
}

//! Catalog service used by the web layer to build library page views.

use std::sync::Arc;

use ezma_core::config::ApiConfig;
use ezma_core::{LibraryId, LibraryView};
use tracing::info;

use crate::errors::CatalogError;
use crate::providers::{CatalogProvider, DemoProvider, HttpCatalogProvider};

/// Catalog access shared by all requests. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct CatalogService {
    provider: Arc<dyn CatalogProvider>,
}

impl CatalogService {
    /// Creates the service the configuration asks for: demo data or the HTTP API.
    ///
    /// # Errors
    /// - `CatalogError::InvalidBaseUrl` - Configured API URL is unusable
    /// - `CatalogError::Network` - HTTP client could not be constructed
    pub fn from_config(config: &ApiConfig) -> Result<Self, CatalogError> {
        if config.use_demo_data {
            info!("Using built-in demo catalog");
            return Ok(Self::new_demo());
        }

        info!(base_url = %config.base_url, "Using catalog API");
        let provider = HttpCatalogProvider::new(config)?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Creates a service backed by the demo catalog.
    pub fn new_demo() -> Self {
        Self::with_provider(Arc::new(DemoProvider::new()))
    }

    /// Creates a service backed by an arbitrary provider.
    pub fn with_provider(provider: Arc<dyn CatalogProvider>) -> Self {
        Self { provider }
    }

    /// Loads everything the library detail page shows.
    ///
    /// The library lookup runs first and the book lookup second; a failure
    /// in either is logged and replaced by fallback data, never returned.
    pub async fn load_view(&self, id: &LibraryId, query: Option<&str>) -> LibraryView {
        let library = self.provider.library_by_id(id).await;
        let books = self.provider.books_by_library(id).await;

        LibraryView::resolve(id, query, library, books)
    }
}

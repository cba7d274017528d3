//! Catalog provider backed by the Ezma catalog HTTP API.

use async_trait::async_trait;
use ezma_core::config::ApiConfig;
use ezma_core::{Book, Library, LibraryId};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::CatalogProvider;
use crate::errors::CatalogError;

/// HTTP provider for the catalog API.
///
/// Endpoints:
/// - `GET {base}/libraries/{id}/` returns a library record (404 or `null` if unknown)
/// - `GET {base}/libraries/{id}/books/` returns `{"results": [...]}` or a bare array
#[derive(Debug, Clone)]
pub struct HttpCatalogProvider {
    client: reqwest::Client,
    base_url: Url,
}

/// Book list as returned by the catalog, paginated or not.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BooksResponse {
    Plain(Vec<Book>),
    Paginated {
        #[serde(default)]
        results: Option<Vec<Book>>,
    },
}

impl BooksResponse {
    fn into_books(self) -> Vec<Book> {
        match self {
            BooksResponse::Plain(books) => books,
            BooksResponse::Paginated { results } => results.unwrap_or_default(),
        }
    }
}

impl HttpCatalogProvider {
    /// Creates a provider from the API section of the configuration.
    ///
    /// # Errors
    /// - `CatalogError::InvalidBaseUrl` - Base URL is malformed or cannot carry a path
    /// - `CatalogError::Network` - HTTP client could not be constructed
    pub fn new(config: &ApiConfig) -> Result<Self, CatalogError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl {
                base_url: config.base_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| CatalogError::Network {
            reason: format!("HTTP client setup failed: {e}"),
        })?;

        Ok(Self { client, base_url })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    ///
    /// A trailing empty segment produces a trailing slash.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: &Url) -> Result<reqwest::Response, CatalogError> {
        debug!(%url, "Catalog request");
        self.client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::Network {
                reason: format!("Catalog request to {url} failed: {e}"),
            })
    }
}

fn unexpected_status(response: &reqwest::Response, url: &Url) -> CatalogError {
    CatalogError::UnexpectedStatus {
        status: response.status().as_u16(),
        url: url.to_string(),
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalogProvider {
    async fn library_by_id(&self, id: &LibraryId) -> Result<Option<Library>, CatalogError> {
        let url = self.endpoint(&["libraries", id.as_str(), ""])?;
        let response = self.get(&url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(library_id = %id, "Library not found in catalog");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(unexpected_status(&response, &url));
        }

        response
            .json::<Option<Library>>()
            .await
            .map_err(|e| CatalogError::Parse {
                reason: format!("Library JSON parsing failed: {e}"),
            })
    }

    async fn books_by_library(&self, id: &LibraryId) -> Result<Vec<Book>, CatalogError> {
        let url = self.endpoint(&["libraries", id.as_str(), "books", ""])?;
        let response = self.get(&url).await?;

        if !response.status().is_success() {
            return Err(unexpected_status(&response, &url));
        }

        let books = response
            .json::<BooksResponse>()
            .await
            .map_err(|e| CatalogError::Parse {
                reason: format!("Book list JSON parsing failed: {e}"),
            })?;

        Ok(books.into_books())
    }
}

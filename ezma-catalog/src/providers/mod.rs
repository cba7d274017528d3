//! Provider implementations for catalog lookups.

use async_trait::async_trait;
use ezma_core::{Book, Library, LibraryId};

use crate::errors::CatalogError;

pub mod demo;
pub mod http;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use demo::DemoProvider;
pub use http::HttpCatalogProvider;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::{MockOutcome, MockProvider};

/// Source of library and book records.
///
/// Implementations provide lookups through different backends
/// (the catalog HTTP API, demo data, scripted mocks for testing).
#[async_trait]
pub trait CatalogProvider: Send + Sync + std::fmt::Debug {
    /// Looks up a library. `Ok(None)` means the catalog has no such record.
    ///
    /// # Errors
    /// - `CatalogError::Network` - Request could not be completed
    /// - `CatalogError::UnexpectedStatus` - Catalog answered with an error status
    /// - `CatalogError::Parse` - Response body was not a library record
    async fn library_by_id(&self, id: &LibraryId) -> Result<Option<Library>, CatalogError>;

    /// Lists the books held by a library.
    ///
    /// # Errors
    /// - `CatalogError::Network` - Request could not be completed
    /// - `CatalogError::UnexpectedStatus` - Catalog answered with an error status
    /// - `CatalogError::Parse` - Response body was not a book list
    async fn books_by_library(&self, id: &LibraryId) -> Result<Vec<Book>, CatalogError>;
}

//! Ezma Catalog - Library and book lookups

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Talks to the catalog API that owns library and book records, with an
//! in-memory demo catalog for running the site without a backend.

pub mod errors;
pub mod providers;
pub mod service;

// Re-export main types
pub use errors::CatalogError;
pub use providers::{CatalogProvider, DemoProvider, HttpCatalogProvider};
#[cfg(any(test, feature = "test-utils"))]
pub use providers::{MockOutcome, MockProvider};
pub use service::CatalogService;

/// Convenience type alias for Results with CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;

//! Ezma Core - Library directory domain and page-view resolution
//!
//! This crate holds everything about a library detail page that does not
//! depend on HTTP: the `Library` and `Book` records, the fixed fallback data,
//! the "resolve with default" rule, book filtering, configuration and
//! tracing setup.

pub mod config;
pub mod domain;
pub mod filter;
pub mod resolve;
pub mod tracing_setup;
pub mod view;

// Re-export main types for convenient access
pub use config::EzmaConfig;
pub use domain::{Book, BookId, Coordinates, Library, LibraryId};
pub use resolve::{Present, present, resolve_or};
pub use view::{DataSource, LibraryView};

/// Core errors that can bubble up from Ezma startup and configuration.
#[derive(Debug, thiserror::Error)]
pub enum EzmaError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tracing setup failed: {reason}")]
    Tracing { reason: String },
}

/// Convenience type alias for Results with EzmaError.
pub type Result<T> = std::result::Result<T, EzmaError>;

//! Error types for catalog lookups.

use thiserror::Error;

/// Errors that can occur while fetching library or book records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("Network error: {reason}")]
    Network {
        /// The reason for the network error
        reason: String,
    },

    /// The API answered with a status the lookup cannot use.
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The response body did not match the expected shape.
    #[error("Parse error: {reason}")]
    Parse {
        /// The reason for the parse error
        reason: String,
    },

    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid catalog base URL '{base_url}': {reason}")]
    InvalidBaseUrl {
        /// The configured base URL
        base_url: String,
        /// Why it was rejected
        reason: String,
    },
}

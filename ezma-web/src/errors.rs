//! Errors raised while starting or running the web server.

use thiserror::Error;

/// Web server failures. Page rendering itself cannot fail.
#[derive(Debug, Error)]
pub enum WebError {
    /// Listener could not bind to the configured address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        /// Address from the server configuration
        address: String,
        /// Underlying socket error
        source: std::io::Error,
    },

    /// Server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

//! Ezma Web - Server-rendered library pages

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Renders the library detail page from catalog data and exposes the same
//! resolved view as JSON for external clients.

pub mod components;
pub mod errors;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod templates;

// Re-export main types
pub use errors::WebError;
pub use server::{AppState, BUNDLED_ASSETS_DIR, assets_dir, router, run_server};

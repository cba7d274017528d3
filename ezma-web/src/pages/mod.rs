//! Full page handlers using the component system
//!
//! Pages compose components into complete HTML responses wrapped in the
//! base template.

pub mod library;

// Re-export page handlers
pub use library::{LibraryPageQuery, library_detail_page, render_library_page};

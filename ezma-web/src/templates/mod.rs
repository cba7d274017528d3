//! HTML page templates

pub mod base;

pub use base::render_page;

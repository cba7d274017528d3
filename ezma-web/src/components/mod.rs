//! Reusable HTML components for the library pages
//!
//! Components are server-rendered HTML fragments styled with Tailwind CSS.
//! Every catalog-supplied string passes through `layout::escape_html`.

pub mod books;
pub mod layout;
pub mod library;
pub mod location;

// Re-export main component functions
pub use books::{availability_badge, book_table, search_form};
pub use layout::{Tab, card, escape_html, info_card, link_button, tabs, text_link, web_url};
pub use library::{about_section, hero_image, library_header, summary_panel};
pub use location::{location_section, map_widget};

/// Placeholder shown for any missing text field.
pub const NOT_AVAILABLE: &str = "Ma'lumot mavjud emas";

//! Library detail page - About, Books and Location tabs plus a summary panel

use axum::extract::{Path, Query, State};
use axum::response::Html;
use ezma_core::config::MapConfig;
use ezma_core::{LibraryId, LibraryView, resolve_or};
use serde::Deserialize;
use tracing::debug;

use crate::components::{
    Tab, about_section, book_table, hero_image, library_header, location_section, search_form,
    summary_panel, tabs,
};
use crate::server::AppState;
use crate::templates::render_page;

/// Query string accepted by the library pages.
#[derive(Debug, Default, Deserialize)]
pub struct LibraryPageQuery {
    /// Free-text book search
    pub q: Option<String>,
}

/// Renders the library detail page.
///
/// Catalog failures never reach the visitor; the page falls back to the
/// built-in sample data instead.
pub async fn library_detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LibraryPageQuery>,
) -> Html<String> {
    let id = LibraryId::new(id);
    let view = state.catalog.load_view(&id, params.q.as_deref()).await;

    debug!(
        library_id = %id,
        library_source = ?view.library_source,
        books_source = ?view.books_source,
        books = view.books.len(),
        "Rendering library page"
    );

    render_library_page(&view, &state.map)
}

/// Renders a resolved view into the full HTML document.
pub fn render_library_page(view: &LibraryView, map: &MapConfig) -> Html<String> {
    let name = resolve_or(view.library.name.as_deref(), "Kutubxona");

    let books_content = format!(
        r#"<div class="space-y-4">{form}{table}</div>"#,
        form = search_form(&view.query),
        table = book_table(&view.books),
    );

    let tab_items = [
        Tab {
            id: "about",
            label: "Ma'lumot",
            content: about_section(&view.library),
        },
        Tab {
            id: "books",
            label: "Kitoblar",
            content: books_content,
        },
        Tab {
            id: "location",
            label: "Joylashuv",
            content: location_section(name, view.coordinates(), map.detail_zoom),
        },
    ];

    let content = format!(
        r#"<div class="flex flex-col space-y-8">
            {header}
            {hero}
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2">{tabs}</div>
                <div>{summary}</div>
            </div>
        </div>"#,
        header = library_header(&view.library),
        hero = hero_image(&view.library),
        tabs = tabs(&tab_items, "about"),
        summary = summary_panel(view, map.compact_zoom),
    );

    render_page(name, &content)
}

#[cfg(test)]
mod tests {
    use ezma_core::{Book, Library};

    use super::*;

    fn render(view: &LibraryView) -> String {
        let Html(html) = render_library_page(view, &MapConfig::default());
        html
    }

    #[test]
    fn test_live_page() {
        let id = LibraryId::from("5");
        let library = Library {
            id: id.clone(),
            name: Some("City Library".to_string()),
            address: Some("Main street 1".to_string()),
            ..Library::default()
        };
        let books = vec![Book::new("1", "Dune", "Herbert", None, true)];
        let view = LibraryView::resolve::<String>(&id, None, Ok(Some(library)), Ok(books));

        let html = render(&view);

        assert!(html.contains("<title>City Library - Ezma</title>"));
        assert!(html.contains("Main street 1"));
        assert_eq!(html.matches("data-book-id=").count(), 1);
        assert!(html.contains("Joylashuv ma'lumotlari mavjud emas"));
        assert!(html.contains("data-books-count>0<"));
    }

    #[test]
    fn test_fallback_page() {
        let id = LibraryId::from("5");
        let view = LibraryView::resolve(&id, Some("x"), Err("down"), Err("down"));

        let html = render(&view);

        assert!(html.contains("Alisher Navoiy nomidagi O'zbekiston Milliy kutubxonasi"));
        assert!(html.contains("Koordinatalar: 41.311081, 69.280624"));
        assert_eq!(html.matches("data-book-id=").count(), 4);
        assert!(html.contains(r#"name="q" value="x""#));
    }
}

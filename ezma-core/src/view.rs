//! Resolution of one library detail page view from two catalog lookups.
//!
//! The lookups are independent: a failed library lookup never affects the
//! book list and vice versa. Failures are logged and replaced by fallback
//! data, so a view can always be built.

use std::fmt;

use serde::Serialize;
use tracing::{debug, error};

use crate::domain::{Book, Coordinates, Library, LibraryId, fallback_books, fallback_library};
use crate::filter::filter_books;
use crate::resolve::resolve_or;

/// Where a part of the view came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Taken from the catalog response.
    Live,
    /// Replaced by the fixed fallback records.
    Fallback,
}

/// Everything the library detail page shows.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryView {
    pub library: Library,
    pub books: Vec<Book>,
    /// Search query as typed, echoed back into the search form.
    pub query: String,
    pub library_source: DataSource,
    pub books_source: DataSource,
}

impl LibraryView {
    /// Builds the view from the outcomes of the library and book lookups.
    ///
    /// - A failed or empty library lookup yields the fallback library.
    /// - A failed book lookup yields an empty list.
    /// - A non-empty query filters a non-empty list by title or author.
    /// - An empty list at the end is replaced by the fallback books,
    ///   unfiltered.
    pub fn resolve<E: fmt::Display>(
        id: &LibraryId,
        query: Option<&str>,
        library: Result<Option<Library>, E>,
        books: Result<Vec<Book>, E>,
    ) -> Self {
        let query = query.unwrap_or_default().to_string();

        let fetched_library = match library {
            Ok(library) => library,
            Err(e) => {
                error!(library_id = %id, error = %e, "Failed to fetch library details");
                None
            }
        };
        let library_source = if fetched_library.is_some() {
            DataSource::Live
        } else {
            DataSource::Fallback
        };
        let library = resolve_or(fetched_library, fallback_library(id));

        let fetched_books = match books {
            Ok(books) => books,
            Err(e) => {
                error!(library_id = %id, error = %e, "Failed to fetch library books");
                Vec::new()
            }
        };

        let books = if query.is_empty() {
            fetched_books
        } else if fetched_books.is_empty() {
            debug!(library_id = %id, query = %query, "Search query not applied to empty book list");
            fetched_books
        } else {
            filter_books(fetched_books, &query)
        };

        let (books, books_source) = if books.is_empty() {
            (fallback_books(), DataSource::Fallback)
        } else {
            (books, DataSource::Live)
        };

        Self {
            library,
            books,
            query,
            library_source,
            books_source,
        }
    }

    /// Number of books on the current list that are on the shelf.
    pub fn available_count(&self) -> usize {
        self.books.iter().filter(|book| book.available).count()
    }

    /// Total catalog size reported for the library, zero if unknown.
    pub fn books_count(&self) -> u64 {
        resolve_or(self.library.books_count, 0)
    }

    /// Map position, if the library has both coordinates.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.library.coordinates()
    }
}

/// Formats a count with comma thousands separators, e.g. `7,000,000`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_library() -> Library {
        Library {
            id: LibraryId::from("5"),
            name: Some("City Library".to_string()),
            ..Library::default()
        }
    }

    fn dune() -> Vec<Book> {
        vec![Book::new("10", "Dune", "Herbert", None, true)]
    }

    fn fallback_ids(view: &LibraryView) -> Vec<&str> {
        view.books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_live_data_without_query() {
        let id = LibraryId::from("5");
        let view = LibraryView::resolve::<String>(&id, None, Ok(Some(city_library())), Ok(dune()));

        assert_eq!(view.library.name.as_deref(), Some("City Library"));
        assert_eq!(view.books, dune());
        assert_eq!(view.library_source, DataSource::Live);
        assert_eq!(view.books_source, DataSource::Live);
    }

    #[test]
    fn test_matching_query_keeps_row() {
        let id = LibraryId::from("5");
        let view =
            LibraryView::resolve::<String>(&id, Some("dune"), Ok(Some(city_library())), Ok(dune()));

        assert_eq!(view.books, dune());
        assert_eq!(view.query, "dune");
    }

    #[test]
    fn test_unmatched_query_shows_fallback_books() {
        let id = LibraryId::from("5");
        let view =
            LibraryView::resolve::<String>(&id, Some("zzz"), Ok(Some(city_library())), Ok(dune()));

        assert_eq!(fallback_ids(&view), ["1", "2", "3", "4"]);
        assert_eq!(view.books_source, DataSource::Fallback);
    }

    #[test]
    fn test_empty_list_ignores_query() {
        let id = LibraryId::from("5");
        let view =
            LibraryView::resolve::<String>(&id, Some("sarob"), Ok(None), Ok(Vec::new()));

        assert_eq!(view.books, fallback_books());
    }

    #[test]
    fn test_failed_lookups_use_fallbacks() {
        let id = LibraryId::from("5");
        let view = LibraryView::resolve(
            &id,
            None,
            Err("connection refused"),
            Err("connection refused"),
        );

        assert_eq!(view.library, fallback_library(&id));
        assert_eq!(view.books, fallback_books());
        assert_eq!(view.library_source, DataSource::Fallback);
        assert_eq!(view.coordinates(), Some(Coordinates::new(41.311081, 69.280624)));
    }

    #[test]
    fn test_lookups_are_independent() {
        let id = LibraryId::from("5");
        let view = LibraryView::resolve(&id, None, Err("timeout"), Ok(dune()));

        assert_eq!(view.library_source, DataSource::Fallback);
        assert_eq!(view.books, dune());
    }

    #[test]
    fn test_counts() {
        let id = LibraryId::from("5");
        let view = LibraryView::resolve::<String>(&id, None, Ok(None), Ok(Vec::new()));

        assert_eq!(view.available_count(), 3);
        assert_eq!(view.books_count(), 7_000_000);

        let live = LibraryView::resolve::<String>(&id, None, Ok(Some(city_library())), Ok(dune()));
        assert_eq!(live.books_count(), 0);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(7_000_000), "7,000,000");
        assert_eq!(format_count(1_234_567_890), "1,234,567,890");
    }
}

//! Fixed sample records shown when the catalog has nothing better to offer.

use super::book::Book;
use super::library::{Library, LibraryId};

/// Image used when a library has no picture of its own.
pub const DEFAULT_LIBRARY_IMAGE: &str = "/images/library-shelves.png";

const FALLBACK_NAME: &str = "Alisher Navoiy nomidagi O'zbekiston Milliy kutubxonasi";
const FALLBACK_ADDRESS: &str = "Toshkent sh., Navoiy ko'chasi, 1-uy";
const FALLBACK_DESCRIPTION: &str = "O'zbekiston Milliy kutubxonasi — O'zbekistondagi eng yirik \
    kutubxona. 1870-yilda Toshkent jamoat kutubxonasi sifatida tashkil etilgan. 2002-yildan beri \
    Alisher Navoiy nomidagi O'zbekiston Milliy kutubxonasi deb ataladi.";
const FALLBACK_PHONE: &str = "+998 71 232 83 94";
const FALLBACK_EMAIL: &str = "info@natlib.uz";
const FALLBACK_WEBSITE: &str = "https://natlib.uz";
const FALLBACK_WORKING_HOURS: &str = "Dushanba-Shanba: 9:00 - 20:00, Yakshanba: Dam olish kuni";
const FALLBACK_BOOKS_COUNT: u64 = 7_000_000;
const FALLBACK_LATITUDE: f64 = 41.311081;
const FALLBACK_LONGITUDE: f64 = 69.280624;

/// Returns the National Library record, keyed by the requested identifier.
pub fn fallback_library(id: &LibraryId) -> Library {
    Library {
        id: id.clone(),
        name: Some(FALLBACK_NAME.to_string()),
        address: Some(FALLBACK_ADDRESS.to_string()),
        description: Some(FALLBACK_DESCRIPTION.to_string()),
        phone: Some(FALLBACK_PHONE.to_string()),
        email: Some(FALLBACK_EMAIL.to_string()),
        website: Some(FALLBACK_WEBSITE.to_string()),
        working_hours: Some(FALLBACK_WORKING_HOURS.to_string()),
        image: Some(DEFAULT_LIBRARY_IMAGE.to_string()),
        books_count: Some(FALLBACK_BOOKS_COUNT),
        latitude: Some(FALLBACK_LATITUDE),
        longitude: Some(FALLBACK_LONGITUDE),
    }
}

/// Returns the four sample books, ids 1 through 4.
pub fn fallback_books() -> Vec<Book> {
    vec![
        Book::new("1", "O'tkan kunlar", "Abdulla Qodiriy", Some(1925), true),
        Book::new("2", "Kecha va kunduz", "Cho'lpon", Some(1936), true),
        Book::new("3", "Sarob", "Abdulla Qahhor", Some(1943), false),
        Book::new("4", "Shum bola", "G'afur G'ulom", Some(1936), true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_library_keeps_requested_id() {
        let library = fallback_library(&LibraryId::from("42"));

        assert_eq!(library.id.as_str(), "42");
        assert_eq!(library.name.as_deref(), Some(FALLBACK_NAME));
        assert_eq!(library.books_count, Some(7_000_000));
        assert!(library.coordinates().is_some());
    }

    #[test]
    fn test_fallback_books_are_fixed() {
        let books = fallback_books();
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();

        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(books.iter().filter(|b| b.available).count(), 3);
        assert_eq!(books[2].title, "Sarob");
    }
}

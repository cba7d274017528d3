//! Case-insensitive title/author search over a library's book list.

use crate::domain::Book;

/// Returns `true` if the title or author contains the lowercase needle.
fn matches_needle(book: &Book, needle: &str) -> bool {
    book.title.to_lowercase().contains(needle) || book.author.to_lowercase().contains(needle)
}

/// Keeps the books whose title or author contains `query`, ignoring case.
///
/// Order is preserved. An empty query keeps every book.
pub fn filter_books(books: Vec<Book>, query: &str) -> Vec<Book> {
    if query.is_empty() {
        return books;
    }

    let needle = query.to_lowercase();
    books
        .into_iter()
        .filter(|book| matches_needle(book, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample_books() -> Vec<Book> {
        vec![
            Book::new("1", "Dune", "Frank Herbert", Some(1965), true),
            Book::new("2", "Children of Dune", "Frank Herbert", Some(1976), false),
            Book::new("3", "Solaris", "Stanislaw Lem", Some(1961), true),
        ]
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let found = filter_books(sample_books(), "DUNE");
        let ids: Vec<&str> = found.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn test_author_match() {
        let found = filter_books(sample_books(), "lem");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Solaris");
    }

    #[test]
    fn test_no_match_yields_empty_list() {
        assert!(filter_books(sample_books(), "zzz").is_empty());
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(filter_books(sample_books(), ""), sample_books());
    }

    #[test]
    fn test_non_ascii_query() {
        let books = vec![Book::new("1", "O'tkan kunlar", "Abdulla Qodiriy", None, true)];
        assert_eq!(filter_books(books, "O'TKAN").len(), 1);
    }

    fn arb_book() -> impl Strategy<Value = Book> {
        ("[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}", any::<bool>())
            .prop_map(|(title, author, available)| Book::new("x", title, author, None, available))
    }

    proptest! {
        #[test]
        fn prop_result_is_exact_matching_subset(
            books in prop::collection::vec(arb_book(), 0..20),
            query in "[a-zA-Z]{1,3}",
        ) {
            let needle = query.to_lowercase();
            let expected: Vec<Book> = books
                .iter()
                .filter(|b| {
                    b.title.to_lowercase().contains(&needle)
                        || b.author.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();

            prop_assert_eq!(filter_books(books, &query), expected);
        }
    }
}

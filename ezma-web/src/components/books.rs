//! Book catalog components - search form, table, availability badge

use ezma_core::{Book, present};

use super::layout::escape_html;

/// Renders the title/author search form.
///
/// Submits `q` back to the current page as a query string.
pub fn search_form(query: &str) -> String {
    format!(
        r#"<form method="get" class="flex flex-col sm:flex-row gap-4">
            <div class="relative w-full">
                <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400" aria-hidden="true">🔍</span>
                <input type="search" name="q" value="{}" placeholder="Kitob nomini qidirish..."
                       class="w-full rounded-md border border-gray-300 py-2 pl-10 pr-3 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500" />
            </div>
            <button type="submit" class="w-full sm:w-auto rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-700">Qidirish</button>
        </form>"#,
        escape_html(query)
    )
}

/// Renders the availability pill for a book.
pub fn availability_badge(available: bool) -> String {
    let (classes, label) = if available {
        ("bg-green-100 text-green-800", "Mavjud")
    } else {
        ("bg-red-100 text-red-800", "Mavjud emas")
    };

    format!(
        r#"<span class="inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {classes}">{label}</span>"#
    )
}

fn book_row(book: &Book) -> String {
    let year = present(book.year).map_or_else(|| "N/A".to_string(), |year| year.to_string());

    format!(
        r#"<tr class="border-b" data-book-id="{id}">
            <td class="p-4 align-middle">{title}</td>
            <td class="p-4 align-middle">{author}</td>
            <td class="p-4 align-middle">{year}</td>
            <td class="p-4 align-middle">{badge}</td>
        </tr>"#,
        id = escape_html(book.id.as_str()),
        title = escape_html(&book.title),
        author = escape_html(&book.author),
        badge = availability_badge(book.available),
    )
}

/// Renders the book list as a table, one row per book in list order.
pub fn book_table(books: &[Book]) -> String {
    let rows: String = books.iter().map(book_row).collect();

    format!(
        r#"<div class="rounded-md border">
            <div class="relative w-full overflow-auto">
                <table class="w-full caption-bottom text-sm">
                    <thead>
                        <tr class="border-b bg-gray-50">
                            <th class="h-12 px-4 text-left font-medium">Kitob nomi</th>
                            <th class="h-12 px-4 text-left font-medium">Muallif</th>
                            <th class="h-12 px-4 text-left font-medium">Yil</th>
                            <th class="h-12 px-4 text-left font-medium">Holati</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_per_book() {
        let books = vec![
            Book::new("1", "Dune", "Herbert", Some(1965), true),
            Book::new("2", "Sarob", "Abdulla Qahhor", None, false),
        ];
        let html = book_table(&books);

        assert_eq!(html.matches("<tr class=\"border-b\" data-book-id=").count(), 2);
        assert!(html.contains(">1965<"));
        assert!(html.contains(">N/A<"));
        assert!(html.contains("Mavjud emas"));
    }

    #[test]
    fn test_zero_year_shows_not_available() {
        let html = book_table(&[Book::new("1", "Dune", "Herbert", Some(0), true)]);

        assert!(html.contains(">N/A<"));
        assert!(!html.contains(">0<"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let books = vec![Book::new("1", "<script>x</script>", "A & B", None, true)];
        let html = book_table(&books);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn test_search_form_keeps_query() {
        let html = search_form(r#"say "hi""#);
        assert!(html.contains(r#"name="q" value="say &quot;hi&quot;""#));
        assert!(html.contains(r#"method="get""#));
    }
}

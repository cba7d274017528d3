//! Demo provider implementation for development.

use async_trait::async_trait;
use ezma_core::{Book, Library, LibraryId};

use super::CatalogProvider;
use crate::errors::CatalogError;

/// Demo provider for development without a catalog backend.
///
/// Knows two Tashkent libraries. Any other id behaves like a catalog miss,
/// which makes the page fall back to the National Library record.
#[derive(Debug)]
pub struct DemoProvider {
    libraries: Vec<(Library, Vec<Book>)>,
}

impl Default for DemoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoProvider {
    /// Creates the provider with its built-in catalog.
    pub fn new() -> Self {
        let youth = Library {
            id: LibraryId::from("2"),
            name: Some("Yoshlar kutubxonasi".to_string()),
            address: Some("Toshkent sh., Amir Temur ko'chasi, 18".to_string()),
            description: Some("Talabalar va yoshlar uchun o'quv zali.".to_string()),
            phone: Some("+998 71 200 00 02".to_string()),
            email: Some("info@yoshlar-kutubxona.uz".to_string()),
            working_hours: Some("Har kuni: 10:00 - 22:00".to_string()),
            books_count: Some(125_000),
            latitude: Some(41.314_7),
            longitude: Some(69.279_8),
            ..Library::default()
        };
        let youth_books = vec![
            Book::new("21", "Mehrobdan chayon", "Abdulla Qodiriy", Some(1928), true),
            Book::new("22", "Ulug'bek xazinasi", "Odil Yoqubov", Some(1973), false),
            Book::new("23", "Dune", "Frank Herbert", Some(1965), true),
        ];

        // Deliberately sparse: exercises the per-field placeholders.
        let district = Library {
            id: LibraryId::from("3"),
            name: Some("Chilonzor tuman kutubxonasi".to_string()),
            address: Some("Toshkent sh., Chilonzor tumani".to_string()),
            ..Library::default()
        };

        Self {
            libraries: vec![(youth, youth_books), (district, Vec::new())],
        }
    }

    fn find(&self, id: &LibraryId) -> Option<&(Library, Vec<Book>)> {
        self.libraries.iter().find(|(library, _)| &library.id == id)
    }
}

#[async_trait]
impl CatalogProvider for DemoProvider {
    async fn library_by_id(&self, id: &LibraryId) -> Result<Option<Library>, CatalogError> {
        Ok(self.find(id).map(|(library, _)| library.clone()))
    }

    async fn books_by_library(&self, id: &LibraryId) -> Result<Vec<Book>, CatalogError> {
        Ok(self
            .find(id)
            .map(|(_, books)| books.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_library() {
        let provider = DemoProvider::new();
        let id = LibraryId::from("2");

        let library = provider.library_by_id(&id).await.unwrap().unwrap();
        assert_eq!(library.name.as_deref(), Some("Yoshlar kutubxonasi"));
        assert_eq!(provider.books_by_library(&id).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unknown_library_is_a_miss() {
        let provider = DemoProvider::new();
        let id = LibraryId::from("999");

        assert_eq!(provider.library_by_id(&id).await.unwrap(), None);
        assert!(provider.books_by_library(&id).await.unwrap().is_empty());
    }
}

//! Mock provider implementation for testing.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use ezma_core::{Book, Library, LibraryId};

use super::CatalogProvider;
use crate::errors::CatalogError;

/// Scripted result of one mock lookup.
#[derive(Debug, Clone)]
pub enum MockOutcome<T> {
    /// Lookup succeeds with this value.
    Found(T),
    /// Lookup fails with a network error carrying this reason.
    Fail(String),
}

impl<T: Clone> MockOutcome<T> {
    fn to_result(&self) -> Result<T, CatalogError> {
        match self {
            MockOutcome::Found(value) => Ok(value.clone()),
            MockOutcome::Fail(reason) => Err(CatalogError::Network {
                reason: reason.clone(),
            }),
        }
    }
}

/// Mock provider for testing.
///
/// Returns the same scripted outcome for every id and records the order of
/// lookups it served.
#[derive(Debug)]
pub struct MockProvider {
    library: MockOutcome<Option<Library>>,
    books: MockOutcome<Vec<Book>>,
    calls: Mutex<Vec<&'static str>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Creates a mock whose catalog is empty but healthy.
    pub fn new() -> Self {
        Self {
            library: MockOutcome::Found(None),
            books: MockOutcome::Found(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serves this library for every lookup.
    pub fn with_library(mut self, library: Library) -> Self {
        self.library = MockOutcome::Found(Some(library));
        self
    }

    /// Serves these books for every lookup.
    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = MockOutcome::Found(books);
        self
    }

    /// Makes library lookups fail.
    pub fn failing_library(mut self, reason: &str) -> Self {
        self.library = MockOutcome::Fail(reason.to_string());
        self
    }

    /// Makes book lookups fail.
    pub fn failing_books(mut self, reason: &str) -> Self {
        self.books = MockOutcome::Fail(reason.to_string());
        self
    }

    /// Lookups served so far, in order (`"library"` or `"books"`).
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: &'static str) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

#[async_trait]
impl CatalogProvider for MockProvider {
    async fn library_by_id(&self, _id: &LibraryId) -> Result<Option<Library>, CatalogError> {
        self.record("library");
        self.library.to_result()
    }

    async fn books_by_library(&self, _id: &LibraryId) -> Result<Vec<Book>, CatalogError> {
        self.record("books");
        self.books.to_result()
    }
}

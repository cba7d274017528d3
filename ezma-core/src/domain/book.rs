//! Book record belonging to a library catalog.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::{deserialize_id, deserialize_nullable};

/// Identifier of a book in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Creates a book ID from its textual representation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_id(deserializer).map(Self)
    }
}

/// A single title in a library's catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id: BookId,
    #[serde(deserialize_with = "deserialize_nullable")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_nullable")]
    pub author: String,
    pub year: Option<i32>,
    /// Whether a copy is on the shelf right now.
    #[serde(deserialize_with = "deserialize_nullable")]
    pub available: bool,
}

impl Book {
    /// Creates a book record.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: Option<i32>,
        available: bool,
    ) -> Self {
        Self {
            id: BookId::new(id),
            title: title.into(),
            author: author.into(),
            year,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_partial_book() {
        let book: Book = serde_json::from_str(r#"{"id": 7, "title": "Dune"}"#).unwrap();

        assert_eq!(book.id.as_str(), "7");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "");
        assert_eq!(book.year, None);
        assert!(!book.available);
    }

    #[test]
    fn test_decode_null_text_fields() {
        let book: Book =
            serde_json::from_str(r#"{"id": "b1", "title": null, "author": null, "available": null}"#)
                .unwrap();

        assert_eq!(book.title, "");
        assert_eq!(book.author, "");
        assert!(!book.available);
    }
}

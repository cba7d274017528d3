//! Library directory domain models.
//!
//! Records are read-only and live for a single page view. They are either
//! decoded from the catalog API or taken from the fixed fallback data.

pub mod book;
pub mod fallback;
pub mod library;
pub mod location;

use serde::{Deserialize, Deserializer};

// Re-export core domain types
pub use book::{Book, BookId};
pub use fallback::{fallback_books, fallback_library};
pub use library::{Library, LibraryId};
pub use location::Coordinates;

/// Identifier as the catalog API sends it: either a JSON string or an integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Integer(number) => number.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

/// Treats an explicit JSON `null` the same as a missing field.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

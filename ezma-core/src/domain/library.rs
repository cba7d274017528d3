//! Library record as served by the catalog API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::deserialize_id;
use super::location::Coordinates;
use crate::resolve::present;

/// Identifier of a library in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LibraryId(String);

impl LibraryId {
    /// Creates a library ID from its path representation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as sent in URLs.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LibraryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for LibraryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_id(deserializer).map(Self)
    }
}

/// A library entity with its contact details and location.
///
/// Every field except the identifier may be absent in an API response;
/// absent and empty values are rendered with placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Library {
    pub id: LibraryId,
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub working_hours: Option<String>,
    pub image: Option<String>,
    pub books_count: Option<u64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Library {
    /// Returns the map position when both latitude and longitude are present.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (present(self.latitude), present(self.longitude)) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numeric_and_string_ids() {
        let numeric: Library = serde_json::from_str(r#"{"id": 5, "name": "City"}"#).unwrap();
        assert_eq!(numeric.id.as_str(), "5");
        assert_eq!(numeric.name.as_deref(), Some("City"));

        let textual: Library = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(textual.id, LibraryId::from("abc"));
        assert_eq!(textual.name, None);
    }

    #[test]
    fn test_null_fields_are_absent() {
        let library: Library = serde_json::from_str(
            r#"{"id": 1, "phone": null, "latitude": null, "books_count": null}"#,
        )
        .unwrap();

        assert_eq!(library.phone, None);
        assert_eq!(library.books_count, None);
        assert!(library.coordinates().is_none());
    }

    #[test]
    fn test_coordinates_need_both_values() {
        let mut library = Library {
            latitude: Some(41.3),
            ..Library::default()
        };
        assert!(library.coordinates().is_none());

        library.longitude = Some(69.2);
        assert_eq!(library.coordinates(), Some(Coordinates::new(41.3, 69.2)));
    }

    #[test]
    fn test_zero_coordinate_counts_as_missing() {
        let library = Library {
            latitude: Some(0.0),
            longitude: Some(69.2),
            ..Library::default()
        };
        assert!(library.coordinates().is_none());
    }
}

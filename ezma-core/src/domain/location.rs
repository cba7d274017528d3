//! Geographic position of a library and the outbound map links built from it.

use serde::{Deserialize, Serialize};

const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=";
const SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";
const EMBED_URL: &str = "https://www.openstreetmap.org/export/embed.html";

/// Latitude/longitude pair. Values are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Formats the pair with six decimals, as shown under the map.
    pub fn display(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }

    /// Link to turn-by-turn directions ending at this position.
    pub fn directions_url(&self) -> String {
        format!("{DIRECTIONS_URL}{},{}", self.latitude, self.longitude)
    }

    /// Link to a map search for the library by name.
    pub fn search_url(name: &str) -> String {
        format!("{SEARCH_URL}{}", urlencoding::encode(name))
    }

    /// Embeddable map centred on this position.
    ///
    /// The bounding box shrinks by half for every zoom level so the map
    /// widget shows roughly the same area a tile map would at that zoom.
    pub fn embed_url(&self, zoom: u8) -> String {
        let span = 360.0 / f64::from(1u32 << zoom.min(20));
        let (lat, lng) = (self.latitude, self.longitude);
        let bbox = format!(
            "{:.6},{:.6},{:.6},{:.6}",
            lng - span,
            lat - span / 2.0,
            lng + span,
            lat + span / 2.0
        );

        format!(
            "{EMBED_URL}?bbox={}&layer=mapnik&marker={lat},{lng}",
            urlencoding::encode(&bbox)
        )
    }
}

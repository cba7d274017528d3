//! Location components - embedded map, directions links, missing-location notice

use ezma_core::Coordinates;

use super::layout::{escape_html, link_button};

/// Renders an embedded map centred on the library.
pub fn map_widget(coordinates: Coordinates, zoom: u8, title: &str, aspect_class: &str) -> String {
    format!(
        r#"<div class="{aspect_class} relative overflow-hidden rounded-lg border" data-map-zoom="{zoom}">
            <iframe src="{src}" title="{title}" class="absolute inset-0 h-full w-full" loading="lazy"></iframe>
        </div>"#,
        src = escape_html(&coordinates.embed_url(zoom)),
        title = escape_html(title),
    )
}

/// Renders the "get directions" button.
pub fn directions_button(coordinates: Coordinates) -> String {
    link_button(
        &coordinates.directions_url(),
        "📍 Yo'l ko'rsatmalarini olish",
        "primary",
        true,
    )
}

/// Notice shown when the library has no coordinates.
pub fn missing_location() -> String {
    r#"<div class="flex flex-col items-center justify-center text-center py-12 space-y-4">
            <div class="h-20 w-20 rounded-full bg-gray-100 flex items-center justify-center text-4xl" aria-hidden="true">📍</div>
            <h2 class="text-xl font-bold">Joylashuv ma'lumotlari mavjud emas</h2>
            <p class="text-gray-500 max-w-md">Bu kutubxona uchun aniq joylashuv ma'lumotlari kiritilmagan.</p>
        </div>"#
        .to_string()
}

/// Renders the Location tab: map, directions and search links, coordinates.
pub fn location_section(name: &str, coordinates: Option<Coordinates>, zoom: u8) -> String {
    let Some(coordinates) = coordinates else {
        return missing_location();
    };

    format!(
        r#"<div class="space-y-4">
            <h2 class="text-xl font-bold">Kutubxona joylashuvi</h2>
            {map}
            <div class="flex flex-col sm:flex-row gap-4">
                {directions}
                {search}
            </div>
            <div class="text-sm text-gray-500">
                <p>Koordinatalar: {display}</p>
            </div>
        </div>"#,
        map = map_widget(coordinates, zoom, name, "aspect-video"),
        directions = directions_button(coordinates),
        search = link_button(
            &Coordinates::search_url(name),
            "🔍 Google Maps'da ko'rish",
            "outline",
            true
        ),
        display = coordinates.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_with_coordinates() {
        let html = location_section("City Library", Some(Coordinates::new(41.5, 69.25)), 13);

        assert!(html.contains("Koordinatalar: 41.500000, 69.250000"));
        assert!(html.contains("destination=41.5,69.25"));
        assert!(html.contains("query=City%20Library"));
        assert!(html.contains("<iframe"));
    }

    #[test]
    fn test_section_without_coordinates() {
        let html = location_section("City Library", None, 13);

        assert!(html.contains("Joylashuv ma'lumotlari mavjud emas"));
        assert!(!html.contains("<iframe"));
    }
}

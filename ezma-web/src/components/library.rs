//! Library components - header, hero image, About tab, side summary panel

use ezma_core::domain::fallback::DEFAULT_LIBRARY_IMAGE;
use ezma_core::view::format_count;
use ezma_core::{Library, LibraryView, present, resolve_or};

use super::NOT_AVAILABLE;
use super::layout::{card, escape_html, info_card, text_link, web_url};
use super::location::{directions_button, map_widget};

/// Renders the back link, library name and address.
pub fn library_header(library: &Library) -> String {
    format!(
        r#"<div class="flex flex-col space-y-4">
            <a href="/libraries" class="text-sm text-blue-600 hover:underline">← Kutubxonalar ro'yxatiga qaytish</a>
            <h1 class="text-3xl font-bold tracking-tight">{name}</h1>
            <p class="text-gray-500 flex items-center"><span class="mr-2" aria-hidden="true">📍</span>{address}</p>
        </div>"#,
        name = escape_html(resolve_or(library.name.as_deref(), "")),
        address = escape_html(resolve_or(library.address.as_deref(), "")),
    )
}

/// Renders the wide library photo.
pub fn hero_image(library: &Library) -> String {
    format!(
        r#"<div class="aspect-video relative rounded-lg overflow-hidden">
            <img src="{src}" alt="{alt}" class="absolute inset-0 h-full w-full object-cover" />
        </div>"#,
        src = escape_html(resolve_or(library.image.as_deref(), DEFAULT_LIBRARY_IMAGE)),
        alt = escape_html(resolve_or(library.name.as_deref(), "Kutubxona")),
    )
}

fn muted_text(text: &str) -> String {
    format!(
        r#"<p class="text-sm text-gray-500">{}</p>"#,
        escape_html(text)
    )
}

/// Website as an external link; non-web URLs are shown as text only.
fn website_link(website: Option<&str>) -> String {
    match present(website) {
        Some(website) => match web_url(website) {
            Some(url) => text_link(url, url, true),
            None => muted_text(website),
        },
        None => muted_text(NOT_AVAILABLE),
    }
}

fn email_link(email: Option<&str>) -> String {
    match present(email) {
        Some(email) => text_link(&format!("mailto:{email}"), email, false),
        None => muted_text(NOT_AVAILABLE),
    }
}

/// Renders the About tab: description and contact cards.
pub fn about_section(library: &Library) -> String {
    let description = resolve_or(library.description.as_deref(), "Ma'lumot mavjud emas.");

    let cards = [
        info_card(
            "🕘",
            "Ish vaqti",
            &muted_text(resolve_or(library.working_hours.as_deref(), NOT_AVAILABLE)),
        ),
        info_card(
            "📞",
            "Telefon",
            &muted_text(resolve_or(library.phone.as_deref(), NOT_AVAILABLE)),
        ),
        info_card(
            "🌐",
            "Veb-sayt",
            &website_link(library.website.as_deref()),
        ),
        info_card(
            "✉️",
            "Email",
            &email_link(library.email.as_deref()),
        ),
    ];

    format!(
        r#"<div>
            <h2 class="text-xl font-bold mb-2">Kutubxona haqida</h2>
            <p>{description}</p>
        </div>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">{cards}</div>"#,
        description = escape_html(description),
        cards = cards.concat(),
    )
}

/// Renders the side panel: catalog size, available books, compact map.
pub fn summary_panel(view: &LibraryView, compact_zoom: u8) -> String {
    let location_html = view
        .coordinates()
        .map(|coordinates| {
            format!(
                r#"<div class="pt-4 border-t">
                    <h3 class="font-medium mb-2">Joylashuv</h3>
                    <div class="mb-2">{map}</div>
                    <div class="flex">{directions}</div>
                </div>"#,
                map = map_widget(
                    coordinates,
                    compact_zoom,
                    resolve_or(view.library.name.as_deref(), "Kutubxona"),
                    "aspect-square"
                ),
                directions = directions_button(coordinates),
            )
        })
        .unwrap_or_default();

    card(
        &format!(
            r#"<div class="space-y-4">
                <h2 class="text-xl font-bold">Kutubxona ma'lumotlari</h2>
                <div class="space-y-2">
                    <div class="flex justify-between">
                        <span class="text-gray-500">Kitoblar soni:</span>
                        <span class="font-medium" data-books-count>{books_count}</span>
                    </div>
                    <div class="flex justify-between">
                        <span class="text-gray-500">Mavjud kitoblar:</span>
                        <span class="font-medium" data-available-count>{available}</span>
                    </div>
                </div>
                {location_html}
                <button type="button" class="w-full rounded-md border border-gray-300 px-4 py-2 text-sm font-medium hover:bg-gray-100">Bog'lanish</button>
            </div>"#,
            books_count = format_count(view.books_count()),
            available = view.available_count(),
        ),
        "p-6",
    )
}

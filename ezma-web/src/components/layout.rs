//! Layout components - cards, buttons, links, tabs

use url::Url;

/// Escapes text for use in HTML content and double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a bordered card around already-rendered content.
pub fn card(content: &str, padding: &str) -> String {
    format!(
        r#"<div class="rounded-lg border bg-white shadow-sm">
            <div class="{padding}">{content}</div>
        </div>"#
    )
}

/// Renders a small card with an icon, a heading and a body fragment.
///
/// Used for the contact details in the About tab. `body` is inserted
/// as-is and must already be escaped.
pub fn info_card(icon: &str, title: &str, body: &str) -> String {
    card(
        &format!(
            r#"<div class="flex items-start space-x-2">
                <span class="text-gray-500 mt-0.5" aria-hidden="true">{icon}</span>
                <div>
                    <h3 class="font-medium">{title}</h3>
                    {body}
                </div>
            </div>"#
        ),
        "p-4",
    )
}

/// Returns `url` unchanged if it is an absolute `http` or `https` URL.
///
/// Catalog-supplied URLs go through this before landing in an `href`.
pub fn web_url(url: &str) -> Option<&str> {
    let url = url.trim();
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Some(url),
        _ => None,
    }
}

fn target_attrs(external: bool) -> &'static str {
    if external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    }
}

/// Renders an inline text link. `label` is escaped.
pub fn text_link(href: &str, label: &str, external: bool) -> String {
    format!(
        r#"<a href="{href}"{target} class="text-sm text-blue-600 hover:underline">{label}</a>"#,
        href = escape_html(href),
        target = target_attrs(external),
        label = escape_html(label),
    )
}

/// Renders a link styled as a button.
///
/// Variants: "primary" (filled) and "outline". External links open in a new
/// tab without handing over the opener.
pub fn link_button(href: &str, label: &str, variant: &str, external: bool) -> String {
    let variant_classes = match variant {
        "primary" => "bg-blue-600 hover:bg-blue-700 text-white",
        "outline" => "border border-gray-300 hover:bg-gray-100 text-gray-900",
        _ => "bg-gray-200 hover:bg-gray-300 text-gray-900",
    };
    let target = target_attrs(external);

    format!(
        r#"<a href="{}"{target} class="inline-flex flex-1 items-center justify-center rounded-md px-4 py-2 text-sm font-medium transition-colors {variant_classes}">{label}</a>"#,
        escape_html(href)
    )
}

/// One tab of a tab set.
pub struct Tab<'a> {
    /// Key matched by the trigger and panel data attributes
    pub id: &'a str,
    /// Trigger text
    pub label: &'a str,
    /// Rendered panel HTML
    pub content: String,
}

/// Renders a tab set with the given tab selected.
///
/// All panels are rendered; switching happens client-side via the
/// `data-tab-trigger` script in the base template.
pub fn tabs(items: &[Tab<'_>], active: &str) -> String {
    let triggers: String = items
        .iter()
        .map(|tab| {
            let selected = tab.id == active;
            let state = if selected { "active" } else { "inactive" };
            format!(
                r#"<button type="button" role="tab" data-tab-trigger="{id}" data-state="{state}" aria-selected="{selected}"
                    class="tab-trigger rounded-sm px-3 py-1.5 text-sm font-medium">{label}</button>"#,
                id = tab.id,
                label = tab.label,
            )
        })
        .collect();

    let panels: String = items
        .iter()
        .map(|tab| {
            let hidden = if tab.id == active { "" } else { " hidden" };
            format!(
                r#"<div role="tabpanel" data-tab-panel="{id}" class="space-y-6"{hidden}>{content}</div>"#,
                id = tab.id,
                content = tab.content,
            )
        })
        .collect();

    format!(
        r#"<div class="tabs">
            <div role="tablist" class="mb-4 inline-flex items-center rounded-md bg-gray-100 p-1">{triggers}</div>
            {panels}
        </div>"#
    )
}

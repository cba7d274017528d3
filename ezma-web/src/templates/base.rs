//! Base HTML template with Tailwind and the tab switching script

use axum::response::Html;

use crate::components::escape_html;

/// Wraps page content in the full HTML document.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="uz">
<head>
    <title>{title} - Ezma</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .tab-trigger[data-state="active"] {{ background: #ffffff; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.08); }}
        .tab-trigger[data-state="inactive"] {{ color: #6b7280; }}
    </style>
    <script>
        document.addEventListener('DOMContentLoaded', () => {{
            document.querySelectorAll('[data-tab-trigger]').forEach((trigger) => {{
                trigger.addEventListener('click', () => {{
                    const tabs = trigger.closest('.tabs');
                    const target = trigger.dataset.tabTrigger;
                    tabs.querySelectorAll('[data-tab-trigger]').forEach((t) => {{
                        const active = t.dataset.tabTrigger === target;
                        t.dataset.state = active ? 'active' : 'inactive';
                        t.setAttribute('aria-selected', active);
                    }});
                    tabs.querySelectorAll('[data-tab-panel]').forEach((panel) => {{
                        panel.hidden = panel.dataset.tabPanel !== target;
                    }});
                }});
            }});
        }});
    </script>
</head>
<body class="bg-white text-gray-900 min-h-screen font-sans">
    <main class="container mx-auto px-4 py-8 md:py-12">
        {content}
    </main>
</body>
</html>"#,
        title = escape_html(title),
    );

    Html(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_escaped() {
        let Html(html) = render_page("A & B", "<p>body</p>");

        assert!(html.contains("<title>A &amp; B - Ezma</title>"));
        assert!(html.contains("<p>body</p>"));
    }
}

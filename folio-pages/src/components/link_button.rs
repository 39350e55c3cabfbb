//! External link buttons on project pages.

use folio_core::schema::ProjectLink;

use crate::escape::{escape_html, escape_html_text};

/// Make sure a URL carries a scheme.
///
/// Links in the portfolio document are often written as `example.com`;
/// those get `http://` prepended. URLs that already name a scheme
/// (`https://…`, `mailto:…`, `tel:…`) are left alone, and
/// protocol-relative `//host` URLs become `http://host`.
#[must_use]
pub fn with_http(url: &str) -> String {
    let url = url.trim();
    if url.contains("://") || url.starts_with("mailto:") || url.starts_with("tel:") {
        url.to_string()
    } else if let Some(rest) = url.strip_prefix("//") {
        format!("http://{rest}")
    } else {
        format!("http://{url}")
    }
}

/// Render a project link as a full-width button that opens in a new tab.
#[must_use]
pub fn render_link_button(link: &ProjectLink) -> String {
    let icon = link
        .icon
        .as_deref()
        .filter(|i| !i.is_empty())
        .map(|i| format!("<i class=\"{} icon\"></i>", escape_html(i)))
        .unwrap_or_default();

    format!(
        "<a class=\"ui fluid large button project-button\" href=\"{}\" target=\"_blank\" rel=\"noopener\" title=\"{}\">{icon}{}</a>",
        escape_html(&with_http(&link.url)),
        escape_html(&link.text),
        escape_html_text(&link.text)
    )
}

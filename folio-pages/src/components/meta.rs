//! `<head>` metadata: title, description, canonical link, Open Graph and
//! Twitter card tags.

use crate::escape::{escape_html, escape_html_text};

/// Metadata for one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// Document title
    pub title: String,
    /// Plain-text description
    pub description: String,
    /// Canonical URL
    pub canonical: String,
    /// Share image URL
    pub image: Option<String>,
    /// Site name for `og:site_name`
    pub site_name: Option<String>,
}

/// Render the metadata tags for a page's `<head>`.
#[must_use]
pub fn render_meta(meta: &PageMeta) -> String {
    let title = escape_html(&meta.title);
    let description = escape_html(&meta.description);
    let canonical = escape_html(&meta.canonical);

    let mut tags = vec![
        format!("<title>{}</title>", escape_html_text(&meta.title)),
        format!("<meta name=\"description\" content=\"{description}\">"),
        format!("<link rel=\"canonical\" href=\"{canonical}\">"),
        "<meta property=\"og:type\" content=\"website\">".to_string(),
        format!("<meta property=\"og:title\" content=\"{title}\">"),
        format!("<meta property=\"og:description\" content=\"{description}\">"),
        format!("<meta property=\"og:url\" content=\"{canonical}\">"),
    ];

    if let Some(ref site_name) = meta.site_name {
        tags.push(format!(
            "<meta property=\"og:site_name\" content=\"{}\">",
            escape_html(site_name)
        ));
    }

    match meta.image {
        Some(ref image) => {
            let image = escape_html(image);
            tags.push(format!("<meta property=\"og:image\" content=\"{image}\">"));
            tags.push(
                "<meta name=\"twitter:card\" content=\"summary_large_image\">".to_string(),
            );
            tags.push(format!("<meta name=\"twitter:image\" content=\"{image}\">"));
        }
        None => tags.push("<meta name=\"twitter:card\" content=\"summary\">".to_string()),
    }

    tags.push(format!("<meta name=\"twitter:title\" content=\"{title}\">"));
    tags.push(format!(
        "<meta name=\"twitter:description\" content=\"{description}\">"
    ));

    tags.join("\n")
}

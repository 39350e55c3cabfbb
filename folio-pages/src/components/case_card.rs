//! Card for an external blog post or case study.

use folio_core::schema::Case;

use crate::escape::{escape_html, escape_html_text};

/// Render a case as a full-width card linking to its external URL.
#[must_use]
pub fn render_case_card(case: &Case) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "<a class=\"ui fluid link card case-card\" href=\"{}\" data-slug=\"{}\">",
        escape_html(&case.url),
        escape_html(&case.slug)
    ));
    lines.push("<div class=\"left aligned content\">".to_string());
    lines.push(format!(
        "<h2 class=\"card-title\">{}</h2>",
        escape_html_text(&case.title)
    ));
    if let Some(summary) = case.summary.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!(
            "<p class=\"tagline\">{}</p>",
            escape_html_text(summary)
        ));
    }
    lines.push("</div>".to_string());
    lines.push("</a>".to_string());
    lines.join("\n")
}

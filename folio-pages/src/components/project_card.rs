//! Card linking to a project page.

use folio_core::routes::Route;
use folio_core::schema::Project;

use crate::escape::{escape_html, escape_html_text};

/// Render a project as a full-width card linking to `/projects/{slug}`.
#[must_use]
pub fn render_project_card(project: &Project) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "<a class=\"ui fluid link card project-card\" href=\"{}\">",
        escape_html(&Route::Project(project.slug.clone()).path())
    ));

    if let Some(image) = project.share_image_url.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!(
            "<div class=\"image\"><img class=\"card-image-header\" src=\"{}\" alt=\"{}\" loading=\"lazy\"></div>",
            escape_html(image),
            escape_html(&project.title)
        ));
    }

    lines.push("<div class=\"left aligned content\">".to_string());
    lines.push(format!(
        "<h2 class=\"card-title\">{}</h2>",
        escape_html_text(&project.title)
    ));
    if let Some(tagline) = project.summary.lines().map(str::trim).find(|l| !l.is_empty()) {
        lines.push(format!(
            "<p class=\"tagline\">{}</p>",
            escape_html_text(tagline)
        ));
    }
    lines.push("</div>".to_string());
    lines.push("</a>".to_string());
    lines.join("\n")
}

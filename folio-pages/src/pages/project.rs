//! Project page (`/projects/{slug}`).

use folio_core::loader::ProjectData;
use folio_core::paths::SiteContext;
use folio_core::routes::Route;

use crate::components::{
    PageMeta, render_endorsement, render_labels, render_link_button, render_page,
};
use crate::escape::{escape_html, escape_html_text};
use crate::markdown::render_markdown;
use crate::pages::{main_grid, section_row};

/// Share image used when a project does not set one.
pub const DEFAULT_SHARE_IMAGE: &str = "/share.png";

/// Render a project page.
///
/// Sections for the share image, links, roles, keywords, markdown body
/// and testimonials appear only when the project has content for them.
#[must_use]
pub fn render_project(data: &ProjectData, ctx: &SiteContext) -> String {
    let portfolio = &data.portfolio;
    let project = &data.project;
    let route = Route::Project(project.slug.clone());

    let share_image = project
        .share_image_url
        .as_deref()
        .filter(|s| !s.is_empty());

    let description = data
        .markdown
        .as_ref()
        .and_then(|md| md.get_str("description"))
        .map_or_else(|| project.summary.trim().to_string(), str::to_string);

    let meta = PageMeta {
        title: format!("{} | {}", project.title, portfolio.name),
        description,
        canonical: ctx.absolute(&route.path()),
        image: Some(share_image.map_or_else(
            || DEFAULT_SHARE_IMAGE.to_string(),
            |img| ctx.absolute(img),
        )),
        site_name: None,
    };

    let mut content = Vec::new();

    if let Some(image) = share_image {
        content.push(format!(
            "<img class=\"card-image-header\" src=\"{}\" alt=\"{}\" width=\"800\" height=\"360\">",
            escape_html(image),
            escape_html(&project.title)
        ));
    }

    content.extend(project.links.iter().map(render_link_button));

    content.push(format!(
        "<h1 class=\"ui header project-title\">{}</h1>",
        escape_html_text(&project.title)
    ));

    let roles = render_labels(&project.roles, "role-label");
    if !roles.is_empty() {
        content.push(roles);
    }
    let keywords = render_labels(&project.keywords, "keyword-label");
    if !keywords.is_empty() {
        content.push(keywords);
    }

    content.extend(
        project
            .summary
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!("<p class=\"project-summary\">{}</p>", escape_html_text(line))),
    );

    if let Some(md) = data.markdown.as_ref().filter(|md| !md.is_body_empty()) {
        content.push(format!(
            "<div class=\"project-content\">\n{}</div>",
            render_markdown(&md.content)
        ));
    }

    let mut rows = vec![section_row("project", None, &content)];

    if !project.testimonials.is_empty() {
        let testimonials: Vec<String> = project
            .testimonials
            .iter()
            .map(render_endorsement)
            .collect();
        rows.push(section_row(
            "testimonials",
            Some("Testimonials"),
            &testimonials,
        ));
    }

    render_page(portfolio, ctx, &meta, &main_grid("project", &rows))
}

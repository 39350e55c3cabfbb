//! About page (`/about`).

use folio_core::loader::AboutData;
use folio_core::paths::SiteContext;
use folio_core::routes::Route;

use crate::components::{PageMeta, render_page};
use crate::markdown::render_markdown;
use crate::pages::{main_grid, section_row};

/// Render the about page.
///
/// Front-matter `title` and `description` keys in the about markdown
/// override the default title prefix and the summary-derived description.
#[must_use]
pub fn render_about(data: &AboutData, ctx: &SiteContext) -> String {
    let portfolio = &data.portfolio;
    let heading = data.about.get_str("title").unwrap_or("About");

    let meta = PageMeta {
        title: format!("{heading} | {}", portfolio.name),
        description: data
            .about
            .get_str("description")
            .map_or_else(|| data.summary.clone(), str::to_string),
        canonical: ctx.absolute(&Route::About.path()),
        image: None,
        site_name: None,
    };

    let body = section_row(
        "about",
        Some("About Me"),
        &[format!(
            "<div class=\"about-content\">\n{}</div>",
            render_markdown(&data.about.content)
        )],
    );

    render_page(portfolio, ctx, &meta, &main_grid("about", &[body]))
}

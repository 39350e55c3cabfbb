//! Not-found page, written as `404.html`.

use folio_core::paths::SiteContext;
use folio_core::schema::Portfolio;

use crate::components::{PageMeta, render_page};
use crate::pages::{main_grid, section_row};

/// Render the not-found page.
#[must_use]
pub fn render_not_found(portfolio: &Portfolio, ctx: &SiteContext) -> String {
    let meta = PageMeta {
        title: format!("Page not found | {}", portfolio.name),
        description: "This page does not exist.".to_string(),
        canonical: ctx.absolute("/404"),
        image: None,
        site_name: None,
    };

    let body = section_row(
        "not-found",
        Some("Page not found"),
        &[
            "<p>This page does not exist.</p>".to_string(),
            "<a class=\"ui black button\" href=\"/\">Back home</a>".to_string(),
        ],
    );

    render_page(portfolio, ctx, &meta, &main_grid("not-found", &[body]))
}

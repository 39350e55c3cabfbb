//! Home page (`/`).
//!
//! Greeting, title and summary, then up to three project cards, up to
//! three case cards, and every endorsement.

use folio_core::loader::HomeData;
use folio_core::paths::SiteContext;

use crate::components::{
    PageMeta, render_case_card, render_endorsement, render_page, render_project_card,
};
use crate::escape::escape_html_text;
use crate::markdown::render_markdown;
use crate::pages::{main_grid, section_row};

/// Number of cards shown per section on the home page.
pub const CARDS_PER_SECTION: usize = 3;

/// Render the home page.
#[must_use]
pub fn render_home(data: &HomeData, ctx: &SiteContext) -> String {
    let portfolio = &data.portfolio;

    let meta = PageMeta {
        title: format!("{} | {}", portfolio.name, portfolio.title),
        description: data.summary.clone(),
        canonical: ctx.absolute(""),
        image: None,
        site_name: Some(site_name(&portfolio.name, &portfolio.title)),
    };

    let mut rows = vec![section_row(
        "intro",
        None,
        &[
            format!(
                "<h2 class=\"ui header greeting\">Hi, I'm {} {}</h2>",
                escape_html_text(portfolio.first_name()),
                escape_html_text(portfolio.emoji())
            ),
            format!(
                "<h1 class=\"site-title\">{}</h1>",
                escape_html_text(&portfolio.title)
            ),
            format!(
                "<div class=\"summary\">\n{}</div>",
                render_markdown(&portfolio.summary)
            ),
        ],
    )];

    if !portfolio.projects.is_empty() {
        let mut content: Vec<String> = portfolio
            .projects
            .iter()
            .take(CARDS_PER_SECTION)
            .map(render_project_card)
            .collect();
        if portfolio.projects.len() > CARDS_PER_SECTION {
            content.push(view_all_button("View All Projects"));
        }
        rows.push(section_row("projects", Some("Projects"), &content));
    }

    if !portfolio.cases.is_empty() {
        let mut content: Vec<String> = portfolio
            .cases
            .iter()
            .take(CARDS_PER_SECTION)
            .map(render_case_card)
            .collect();
        if portfolio.cases.len() > CARDS_PER_SECTION {
            content.push(view_all_button("View All Highlights"));
        }
        rows.push(section_row(
            "cases",
            Some("Blog &amp; Case Highlights"),
            &content,
        ));
    }

    let endorsements: Vec<String> = portfolio
        .endorsements
        .iter()
        .map(render_endorsement)
        .collect();
    rows.push(section_row(
        "endorsements",
        Some("Endorsements"),
        &endorsements,
    ));

    render_page(portfolio, ctx, &meta, &main_grid("home", &rows))
}

/// `"<name> | <title> Portfolio"`, or `"<name> | Portfolio"` without a title.
fn site_name(name: &str, title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        format!("{name} | Portfolio")
    } else {
        format!("{name} | {title} Portfolio")
    }
}

fn view_all_button(label: &str) -> String {
    format!("<button class=\"ui black fluid button view-all\" type=\"button\">{label}</button>")
}

//! Page renderers and route dispatch.
//!
//! Each page pairs one `folio-core` loader with one renderer. The
//! renderer receives the loaded data and returns a complete HTML
//! document.

pub mod about;
pub mod home;
pub mod not_found;
pub mod project;

use folio_core::loader;
use folio_core::paths::{ContentPaths, SiteContext};
use folio_core::routes::Route;
use tracing::debug;

use crate::error::RenderError;

pub use about::render_about;
pub use home::render_home;
pub use not_found::render_not_found;
pub use project::render_project;

/// Load and render a route.
///
/// # Errors
///
/// Returns `RenderError::NotFound` for a project slug that the portfolio
/// does not contain, or `RenderError::Load` if any content file cannot
/// be loaded.
pub fn render(
    paths: &ContentPaths,
    ctx: &SiteContext,
    route: &Route,
) -> Result<String, RenderError> {
    debug!(route = %route, "rendering");
    match route {
        Route::Home => Ok(render_home(&loader::load_home(paths)?, ctx)),
        Route::About => Ok(render_about(&loader::load_about(paths)?, ctx)),
        Route::Project(slug) => match loader::load_project(paths, slug) {
            Ok(data) => Ok(render_project(&data, ctx)),
            Err(e) if e.is_not_found() => Err(RenderError::NotFound(route.path())),
            Err(e) => Err(e.into()),
        },
    }
}

/// Load and render the page for a URL path.
///
/// # Errors
///
/// Returns `RenderError::NotFound` if the path is not a generated route,
/// or any error from [`render`].
pub fn render_route(
    paths: &ContentPaths,
    ctx: &SiteContext,
    path: &str,
) -> Result<String, RenderError> {
    let route = Route::parse(path).ok_or_else(|| RenderError::NotFound(path.to_string()))?;
    render(paths, ctx, &route)
}

/// One grid row with an optional uppercase section header.
pub(crate) fn section_row(class: &str, heading: Option<&str>, content: &[String]) -> String {
    let mut lines = vec![
        format!("<div class=\"row {class}\">"),
        "<div class=\"nine wide column\">".to_string(),
    ];
    if let Some(heading) = heading {
        lines.push(format!("<h2 class=\"ui header section-header\">{heading}</h2>"));
    }
    lines.extend(content.iter().cloned());
    lines.push("</div>".to_string());
    lines.push("</div>".to_string());
    lines.join("\n")
}

/// Wrap grid rows in the page's main container.
pub(crate) fn main_grid(class: &str, rows: &[String]) -> String {
    let mut lines = vec![
        format!("<main class=\"ui container {class}\">"),
        "<div class=\"ui centered stackable middle aligned grid\">".to_string(),
    ];
    lines.extend(rows.iter().cloned());
    lines.push("</div>".to_string());
    lines.push("</main>".to_string());
    lines.join("\n")
}

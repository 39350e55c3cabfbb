//! Site routes and static path enumeration.
//!
//! The site has three kinds of page: `/`, `/about`, and one
//! `/projects/{slug}` per project in the portfolio document. Only slugs
//! present in the document at build time become pages.

use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

use crate::schema::Portfolio;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").expect("valid regex"));

/// A routable page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Home,
    /// `/about`
    About,
    /// `/projects/{slug}`
    Project(String),
}

impl Route {
    /// URL path of the route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::About => "/about".to_string(),
            Self::Project(slug) => format!("/projects/{slug}"),
        }
    }

    /// Parse a URL path into a route. A single trailing `/` is accepted.
    ///
    /// This does not check that a project slug exists; the project loader
    /// reports unknown slugs.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        match trimmed {
            "" => Some(Self::Home),
            "/about" => Some(Self::About),
            _ => {
                let slug = trimmed.strip_prefix("/projects/")?;
                (!slug.is_empty() && !slug.contains('/')).then(|| Self::Project(slug.to_string()))
            }
        }
    }

    /// Output file for the route, relative to the output directory.
    #[must_use]
    pub fn output_file(&self) -> PathBuf {
        match self {
            Self::Home => PathBuf::from("index.html"),
            Self::About => PathBuf::from("about").join("index.html"),
            Self::Project(slug) => PathBuf::from("projects").join(slug).join("index.html"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Every route to pre-render: home, about, then one per project in
/// document order.
#[must_use]
pub fn static_paths(portfolio: &Portfolio) -> Vec<Route> {
    let mut routes = Vec::with_capacity(portfolio.projects.len() + 2);
    routes.push(Route::Home);
    routes.push(Route::About);
    routes.extend(
        portfolio
            .projects
            .iter()
            .map(|p| Route::Project(p.slug.clone())),
    );
    routes
}

/// Check that a slug is safe to use as a single URL and path segment.
#[must_use]
pub fn is_url_safe_slug(slug: &str) -> bool {
    slug != ".." && SLUG_RE.is_match(slug)
}

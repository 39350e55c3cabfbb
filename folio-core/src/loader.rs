//! Per-page data loaders.
//!
//! Each route has one loader. A loader reads the portfolio document,
//! optionally reads the route's markdown file, and returns everything
//! the page renderer needs. Loaders read files fresh on every call and
//! fail immediately on the first unreadable or malformed file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{LoadError, Result};
use crate::markdown::{MarkdownDocument, parse_front_matter, strip_markdown};
use crate::paths::ContentPaths;
use crate::schema::{Portfolio, Project};

// ============================================================================
// Page Data
// ============================================================================

/// Data for the home page (`/`).
#[derive(Debug, Clone)]
pub struct HomeData {
    /// The full portfolio document
    pub portfolio: Portfolio,
    /// Markup-free profile summary for the page description
    pub summary: String,
}

/// Data for the about page (`/about`).
#[derive(Debug, Clone)]
pub struct AboutData {
    /// The full portfolio document
    pub portfolio: Portfolio,
    /// Markup-free profile summary for the page description
    pub summary: String,
    /// The about markdown file
    pub about: MarkdownDocument,
}

/// Data for one project page (`/projects/{slug}`).
#[derive(Debug, Clone)]
pub struct ProjectData {
    /// The full portfolio document
    pub portfolio: Portfolio,
    /// The project whose slug was requested
    pub project: Project,
    /// The project's markdown file, when one exists
    pub markdown: Option<MarkdownDocument>,
}

// ============================================================================
// Loaders
// ============================================================================

/// Read and decode the portfolio document.
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be read and
/// `LoadError::Parse` if it is not a valid portfolio document.
pub fn load_portfolio(paths: &ContentPaths) -> Result<Portfolio> {
    let path = paths.data_file();
    let json = read_file(&path)?;

    serde_json::from_str(&json).map_err(|e| LoadError::Parse {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
        path,
    })
}

/// Load the home page data.
///
/// # Errors
///
/// Returns an error if the portfolio document cannot be loaded.
pub fn load_home(paths: &ContentPaths) -> Result<HomeData> {
    let portfolio = load_portfolio(paths)?;
    let summary = strip_markdown(&portfolio.summary);
    Ok(HomeData { portfolio, summary })
}

/// Load the about page data. The about markdown file is required.
///
/// # Errors
///
/// Returns an error if the portfolio document or the about markdown
/// cannot be loaded.
pub fn load_about(paths: &ContentPaths) -> Result<AboutData> {
    let portfolio = load_portfolio(paths)?;
    let about = load_markdown(&paths.about_markdown())?;
    let summary = strip_markdown(&portfolio.summary);
    Ok(AboutData {
        portfolio,
        summary,
        about,
    })
}

/// Load the data for the project with `slug`. The project markdown file
/// is optional.
///
/// # Errors
///
/// Returns `LoadError::ProjectNotFound` if no project has this slug, or
/// any error from reading the portfolio or the project markdown.
pub fn load_project(paths: &ContentPaths, slug: &str) -> Result<ProjectData> {
    let portfolio = load_portfolio(paths)?;
    let project = portfolio
        .find_project(slug)
        .cloned()
        .ok_or_else(|| LoadError::ProjectNotFound {
            slug: slug.to_string(),
        })?;

    let markdown = load_optional_markdown(&paths.project_markdown(slug))?;

    Ok(ProjectData {
        portfolio,
        project,
        markdown,
    })
}

/// Read a markdown file and split off its front-matter.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its front-matter is
/// malformed.
pub fn load_markdown(path: &Path) -> Result<MarkdownDocument> {
    let source = read_file(path)?;
    parse_front_matter(&source).map_err(|source| LoadError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`load_markdown`], but a missing file yields `None`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_optional_markdown(path: &Path) -> Result<Option<MarkdownDocument>> {
    if !path.is_file() {
        debug!(path = %path.display(), "no markdown file");
        return Ok(None);
    }
    load_markdown(path).map(Some)
}

fn read_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading content file");
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================

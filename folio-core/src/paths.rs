//! Content-root layout and render-wide settings.
//!
//! Every input file lives at a fixed location under the content root:
//!
//! ```text
//! <root>/data/me.json
//! <root>/data/md/about/about.md
//! <root>/data/md/projects/<slug>.md
//! <root>/public/...
//! ```

use std::path::{Path, PathBuf};

/// Locations of the input files under a content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    root: PathBuf,
}

impl ContentPaths {
    /// Create a layout rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root itself.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The portfolio document.
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.root.join("data").join("me.json")
    }

    /// Directory holding per-page markdown.
    #[must_use]
    pub fn markdown_dir(&self) -> PathBuf {
        self.root.join("data").join("md")
    }

    /// The about page markdown (required for `/about`).
    #[must_use]
    pub fn about_markdown(&self) -> PathBuf {
        self.markdown_dir().join("about").join("about.md")
    }

    /// Directory holding optional per-project markdown.
    #[must_use]
    pub fn projects_markdown_dir(&self) -> PathBuf {
        self.markdown_dir().join("projects")
    }

    /// Markdown for a single project (optional).
    #[must_use]
    pub fn project_markdown(&self, slug: &str) -> PathBuf {
        self.projects_markdown_dir().join(format!("{slug}.md"))
    }

    /// Static assets copied verbatim into the output.
    #[must_use]
    pub fn public_dir(&self) -> PathBuf {
        self.root.join("public")
    }
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Settings shared by every page of one build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteContext {
    public_url: Option<String>,
    /// Year printed in the footer copyright line
    pub year: i32,
}

impl SiteContext {
    /// Create a context. A trailing `/` on the base URL is dropped and an
    /// empty URL counts as unset.
    #[must_use]
    pub fn new(public_url: Option<&str>, year: i32) -> Self {
        let public_url = public_url
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty());
        Self { public_url, year }
    }

    /// Base URL, if configured.
    #[must_use]
    pub fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }

    /// Prefix a site-relative path with the base URL.
    ///
    /// Without a base URL the path is returned unchanged, so links stay
    /// relative. An empty path means the site root.
    #[must_use]
    pub fn absolute(&self, path: &str) -> String {
        match (&self.public_url, path) {
            (Some(base), "" | "/") => format!("{base}/"),
            (Some(base), p) if p.starts_with('/') => format!("{base}{p}"),
            (Some(base), p) => format!("{base}/{p}"),
            (None, "") => "/".to_string(),
            (None, p) => p.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let paths = ContentPaths::new("/site");
        assert_eq!(paths.data_file(), PathBuf::from("/site/data/me.json"));
        assert_eq!(
            paths.about_markdown(),
            PathBuf::from("/site/data/md/about/about.md")
        );
        assert_eq!(
            paths.project_markdown("x"),
            PathBuf::from("/site/data/md/projects/x.md")
        );
        assert_eq!(paths.public_dir(), PathBuf::from("/site/public"));
    }

    #[test]
    fn test_default_root_is_cwd() {
        assert_eq!(ContentPaths::default().root(), Path::new("."));
    }

    #[test]
    fn test_public_url_trailing_slash_trimmed() {
        let ctx = SiteContext::new(Some("https://ada.dev/"), 2026);
        assert_eq!(ctx.public_url(), Some("https://ada.dev"));
    }

    #[test]
    fn test_empty_public_url_is_unset() {
        let ctx = SiteContext::new(Some("  "), 2026);
        assert_eq!(ctx.public_url(), None);
    }

    #[test]
    fn test_absolute_with_base() {
        let ctx = SiteContext::new(Some("https://ada.dev"), 2026);
        assert_eq!(ctx.absolute(""), "https://ada.dev/");
        assert_eq!(ctx.absolute("/about"), "https://ada.dev/about");
        assert_eq!(ctx.absolute("img/a.png"), "https://ada.dev/img/a.png");
    }

    #[test]
    fn test_absolute_without_base_stays_relative() {
        let ctx = SiteContext::new(None, 2026);
        assert_eq!(ctx.absolute(""), "/");
        assert_eq!(ctx.absolute("/projects/x"), "/projects/x");
    }
}

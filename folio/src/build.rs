//! Static site build pipeline.
//!
//! Enumerates the routes from the portfolio document, renders each one
//! through its page loader, and writes the HTML next to a copy of
//! `public/`. Everything is written to a staging directory beside the
//! output directory, which replaces the output directory only once the
//! whole site has been written. The first failure aborts the build and
//! leaves the previous output untouched.

use std::fs;
use std::path::{Path, PathBuf};

use folio_core::loader::load_portfolio;
use folio_core::paths::{ContentPaths, SiteContext};
use folio_core::routes::{Route, is_url_safe_slug, static_paths};
use folio_pages::pages::{render, render_not_found};
use tempfile::TempDir;
use tracing::{debug, info, warn};

use crate::error::{BuildError, Result};

/// Name of the not-found page in the output directory.
pub const NOT_FOUND_FILE: &str = "404.html";

/// Inputs of one build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Content root layout
    pub paths: ContentPaths,
    /// Render-wide settings
    pub ctx: SiteContext,
    /// Output directory
    pub out_dir: PathBuf,
}

/// What a build wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Routes rendered, in build order
    pub routes: Vec<Route>,
    /// Static assets copied from `public/`
    pub assets: usize,
}

impl BuildReport {
    /// Number of HTML files written, including `404.html`.
    #[must_use]
    pub fn pages(&self) -> usize {
        self.routes.len() + 1
    }
}

/// Build the site.
///
/// # Errors
///
/// Returns an error if the portfolio cannot be loaded, a project slug is
/// not URL-safe, the output directory would overlap the content, any
/// page fails to load, or an output file cannot be written.
pub fn build_site(options: &BuildOptions) -> Result<BuildReport> {
    let portfolio = load_portfolio(&options.paths)?;
    let routes = static_paths(&portfolio);

    if let Some(slug) = routes.iter().find_map(|route| match route {
        Route::Project(slug) if !is_url_safe_slug(slug) => Some(slug),
        _ => None,
    }) {
        return Err(BuildError::UnsafeSlug { slug: slug.clone() }.into());
    }

    let out_dir = resolve(&options.out_dir)?;
    check_out_dir(&out_dir, &options.paths)?;

    let staging = staging_dir(&out_dir)?;
    debug!(path = %staging.path().display(), "staging build");

    let public = options.paths.public_dir();
    let assets = if public.is_dir() {
        copy_dir(&public, staging.path())?
    } else {
        warn!(path = %public.display(), "no public directory, skipping static assets");
        0
    };

    for route in &routes {
        let html = render(&options.paths, &options.ctx, route)?;
        let file = route.output_file();
        write_file(&staging.path().join(&file), &html)?;
        info!(route = %route, file = %file.display(), "wrote page");
    }

    write_file(
        &staging.path().join(NOT_FOUND_FILE),
        &render_not_found(&portfolio, &options.ctx),
    )?;

    replace_dir(staging, &out_dir)?;
    info!(path = %out_dir.display(), "site written");

    Ok(BuildReport { routes, assets })
}

/// Absolute form of `path` with symlinks and `..` resolved as far as the
/// path exists.
fn resolve(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }
    let absolute = std::path::absolute(path)?;
    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => Ok(resolve(parent)?.join(name)),
        _ => Ok(absolute),
    }
}

/// Reject output directories whose replacement would delete content.
fn check_out_dir(out_dir: &Path, paths: &ContentPaths) -> Result<()> {
    let unsafe_out = |reason: &'static str| -> Result<()> {
        Err(BuildError::UnsafeOutDir {
            path: out_dir.to_path_buf(),
            reason,
        }
        .into())
    };

    if resolve(paths.root())?.starts_with(out_dir) {
        return unsafe_out("it contains the content root");
    }
    if out_dir.starts_with(resolve(&paths.public_dir())?) {
        return unsafe_out("it is inside the public directory");
    }
    if out_dir.is_file() {
        return unsafe_out("it is a file");
    }
    Ok(())
}

/// Create an empty staging directory next to `out_dir`.
fn staging_dir(out_dir: &Path) -> Result<TempDir> {
    let parent = out_dir.parent().unwrap_or_else(|| Path::new("."));
    create_dir(parent)?;
    tempfile::Builder::new()
        .prefix(".folio-build-")
        .tempdir_in(parent)
        .map_err(|source| {
            BuildError::Write {
                path: parent.to_path_buf(),
                source,
            }
            .into()
        })
}

/// Move the staged site into place, replacing any previous output.
fn replace_dir(staging: TempDir, out_dir: &Path) -> Result<()> {
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).map_err(|source| BuildError::Write {
            path: out_dir.to_path_buf(),
            source,
        })?;
        debug!(path = %out_dir.display(), "removed previous output");
    }

    let staged = staging.keep();
    fs::rename(&staged, out_dir).map_err(|source| {
        let _ = fs::remove_dir_all(&staged);
        BuildError::Write {
            path: out_dir.to_path_buf(),
            source,
        }
        .into()
    })
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| {
        BuildError::Write {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    fs::write(path, contents).map_err(|source| {
        BuildError::Write {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

/// Recursively copy `src` into `dst`. Returns the number of files copied.
fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    create_dir(dst)?;
    let mut copied = 0;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let target = dst.join(entry.file_name());

        if file_type.is_dir() {
            copied += copy_dir(&entry.path(), &target)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target).map_err(|source| BuildError::Write {
                path: target.clone(),
                source,
            })?;
            debug!(file = %target.display(), "copied asset");
            copied += 1;
        }
    }

    Ok(copied)
}

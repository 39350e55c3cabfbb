//! `check` command handler.

use folio_core::loader::load_portfolio;
use folio_core::paths::{ContentPaths, SiteContext};
use folio_core::routes::static_paths;
use folio_pages::pages::render;

use crate::check::check_portfolio;
use crate::cli::args::CheckArgs;
use crate::error::{BuildError, FolioError};

/// Execute `check`.
///
/// Renders every route in memory so that load failures surface exactly
/// as they would during a build, then reports content findings. With
/// `--strict`, any finding fails the command.
///
/// # Errors
///
/// Returns an error if any page fails to load or render, or if strict
/// mode is enabled and findings were reported.
pub fn run(args: &CheckArgs, quiet: bool) -> Result<(), FolioError> {
    let paths = ContentPaths::new(&args.content.root);
    let portfolio = load_portfolio(&paths)?;
    let ctx = SiteContext::default();

    let routes = static_paths(&portfolio);
    for route in &routes {
        render(&paths, &ctx, route)?;
    }

    let findings = check_portfolio(&portfolio, &paths);
    for finding in &findings {
        eprintln!("{finding}");
    }

    if args.strict && !findings.is_empty() {
        return Err(BuildError::CheckFailed {
            count: findings.len(),
        }
        .into());
    }

    if !quiet {
        eprintln!(
            "Checked {} routes, {} warning(s)",
            routes.len(),
            findings.len()
        );
    }

    Ok(())
}

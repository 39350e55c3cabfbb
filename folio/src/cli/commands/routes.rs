//! `routes` command handler.

use folio_core::loader::load_portfolio;
use folio_core::paths::ContentPaths;
use folio_core::routes::{Route, static_paths};
use serde::Serialize;

use crate::cli::args::{OutputFormat, RoutesArgs};
use crate::error::FolioError;

/// One route as printed by `routes --format json`.
#[derive(Debug, Serialize)]
struct RouteEntry {
    path: String,
    file: String,
}

impl From<&Route> for RouteEntry {
    fn from(route: &Route) -> Self {
        Self {
            path: route.path(),
            file: route.output_file().display().to_string(),
        }
    }
}

/// Execute `routes`.
///
/// Prints the routes a build of the content root would generate, in
/// build order.
///
/// # Errors
///
/// Returns an error if the portfolio document cannot be loaded.
pub fn run(args: &RoutesArgs) -> Result<(), FolioError> {
    let portfolio = load_portfolio(&ContentPaths::new(&args.content.root))?;
    let routes = static_paths(&portfolio);

    match args.format {
        OutputFormat::Human => {
            for route in &routes {
                println!("{:<32} {}", route.path(), route.output_file().display());
            }
        }
        OutputFormat::Json => {
            let entries: Vec<RouteEntry> = routes.iter().map(RouteEntry::from).collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}

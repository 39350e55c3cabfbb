//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod build;
pub mod check;
pub mod completions;
pub mod routes;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::FolioError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), FolioError> {
    match cli.command {
        Commands::Build(args) => build::run(&args, cli.quiet),
        Commands::Routes(args) => routes::run(&args),
        Commands::Check(args) => check::run(&args, cli.quiet),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

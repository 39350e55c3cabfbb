//! `build` command handler.

use chrono::Datelike;
use folio_core::paths::{ContentPaths, SiteContext};

use crate::build::{BuildOptions, build_site};
use crate::cli::args::BuildArgs;
use crate::error::FolioError;

/// Execute `build`.
///
/// The footer year is taken from the local clock at build time.
///
/// # Errors
///
/// Returns an error if any page fails to load or an output file cannot
/// be written.
pub fn run(args: &BuildArgs, quiet: bool) -> Result<(), FolioError> {
    let options = BuildOptions {
        paths: ContentPaths::new(&args.content.root),
        ctx: SiteContext::new(args.public_url.as_deref(), chrono::Local::now().year()),
        out_dir: args.out.clone(),
    };

    if !quiet {
        eprintln!("Building site...");
        eprintln!("  root:   {}", args.content.root.display());
        eprintln!("  output: {}", args.out.display());
        if let Some(url) = options.ctx.public_url() {
            eprintln!("  url:    {url}");
        }
    }

    let report = build_site(&options)?;

    if !quiet {
        eprintln!("Generated {} pages", report.pages());
        eprintln!("Copied {} static assets", report.assets);
    }

    Ok(())
}

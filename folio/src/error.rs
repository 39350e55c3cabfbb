//! Error types for the Folio CLI
//!
//! Aggregates content, rendering and build errors and maps each of them
//! to a process exit code.

use std::path::PathBuf;

use folio_core::error::LoadError;
use folio_pages::error::RenderError;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for Folio CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Content error (malformed JSON, bad front-matter, unsafe slug, failed check)
    pub const CONTENT_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Requested page does not exist
    pub const NOT_FOUND: i32 = 4;

    /// Usage error (invalid arguments, unsafe output directory)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for Folio operations.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Content loading error
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Page rendering error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Site build error
    #[error(transparent)]
    Build(#[from] BuildError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FolioError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Load(e) | Self::Render(RenderError::Load(e)) => load_exit_code(e),
            Self::Render(RenderError::NotFound(_)) => ExitCode::NOT_FOUND,
            Self::Build(BuildError::Write { .. }) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Build(BuildError::UnsafeOutDir { .. }) => ExitCode::USAGE_ERROR,
            Self::Build(_) => ExitCode::CONTENT_ERROR,
            Self::Json(_) => ExitCode::ERROR,
        }
    }
}

const fn load_exit_code(err: &LoadError) -> i32 {
    match err {
        LoadError::Read { .. } => ExitCode::IO_ERROR,
        LoadError::Parse { .. } | LoadError::FrontMatter { .. } => ExitCode::CONTENT_ERROR,
        LoadError::ProjectNotFound { .. } => ExitCode::NOT_FOUND,
    }
}

// ============================================================================
// Build Errors
// ============================================================================

/// Errors specific to writing a site.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A project slug cannot be used as an output directory name
    #[error("project slug '{slug}' is not URL-safe (allowed: letters, digits, '.', '_', '-')")]
    UnsafeSlug {
        /// The offending slug
        slug: String,
    },

    /// The output directory would overlap the content it is built from
    #[error("refusing to build into {path}: {reason}")]
    UnsafeOutDir {
        /// Resolved output directory
        path: PathBuf,
        /// Why the directory was rejected
        reason: &'static str,
    },

    /// An output file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// `check --strict` found problems
    #[error("{count} content warning(s) in strict mode")]
    CheckFailed {
        /// Number of findings
        count: usize,
    },
}

/// Result type alias for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;

// ============================================================================
// Tests
// ============================================================================

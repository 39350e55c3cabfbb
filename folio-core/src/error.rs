//! Core error types for Folio
//!
//! Errors raised while reading and decoding content from the content root.
//! Every variant aborts the page being built; nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Front-matter Errors
// ============================================================================

/// Errors raised while splitting a markdown file into front-matter and body.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    /// The front-matter block is not valid YAML.
    #[error("invalid front-matter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The front-matter block parsed, but not as a key/value mapping.
    #[error("front-matter must be a key/value mapping, got {found}")]
    NotAMapping {
        /// Short description of the YAML node that was found instead
        found: &'static str,
    },
}

// ============================================================================
// Load Errors
// ============================================================================

/// Content loading errors.
///
/// Covers every way a page loader can fail: unreadable files, a
/// malformed portfolio document, broken front-matter, and lookups of
/// project slugs that the document does not contain.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The portfolio document is not valid JSON or has the wrong shape
    #[error("parse error in {path} (line {line}, column {column}): {message}")]
    Parse {
        /// Path to the JSON file
        path: PathBuf,
        /// Line number reported by the decoder
        line: usize,
        /// Column number reported by the decoder
        column: usize,
        /// Decoder message
        message: String,
    },

    /// A markdown file has a broken front-matter block
    #[error("front-matter error in {path}: {source}")]
    FrontMatter {
        /// Path to the markdown file
        path: PathBuf,
        /// Underlying front-matter error
        source: FrontMatterError,
    },

    /// No project in the portfolio has this slug
    #[error("no project with slug '{slug}'")]
    ProjectNotFound {
        /// The slug that was looked up
        slug: String,
    },
}

impl LoadError {
    /// Returns `true` when the error means "this page does not exist"
    /// rather than "the content is broken".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ProjectNotFound { .. })
    }
}

/// Result type alias for content loading.
pub type Result<T> = std::result::Result<T, LoadError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = LoadError::Read {
            path: PathBuf::from("data/me.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/me.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = LoadError::Parse {
            path: PathBuf::from("me.json"),
            line: 4,
            column: 12,
            message: "missing field `name`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "parse error in me.json (line 4, column 12): missing field `name`"
        );
    }

    #[test]
    fn test_project_not_found_is_not_found() {
        let err = LoadError::ProjectNotFound {
            slug: "y".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "no project with slug 'y'");
    }

    #[test]
    fn test_read_error_is_not_not_found() {
        let err = LoadError::Read {
            path: PathBuf::from("x"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_front_matter_not_mapping_display() {
        let err = FrontMatterError::NotAMapping { found: "a sequence" };
        assert!(err.to_string().contains("a sequence"));
    }
}

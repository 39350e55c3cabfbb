//! Error types for Folio page rendering.

use folio_core::error::LoadError;
use thiserror::Error;

/// Errors that can occur while rendering a route.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The route's content could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The path is not a generated route.
    #[error("not found: {0}")]
    NotFound(String),
}

impl RenderError {
    /// Returns `true` for requests that name no page.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

//! Folio Core - portfolio schema and content loading
//!
//! This crate provides the portfolio document types, the content-root
//! layout, front-matter and markdown helpers, and the per-page data
//! loaders shared by `folio-pages` (HTML rendering) and `folio` (CLI).

pub mod error;
pub mod loader;
pub mod markdown;
pub mod paths;
pub mod routes;
pub mod schema;

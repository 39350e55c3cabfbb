//! Folio - static portfolio site generator
//!
//! Reads a portfolio JSON document and markdown files from a content
//! root and writes a static HTML site.

pub mod build;
pub mod check;
pub mod cli;
pub mod error;
pub mod observability;

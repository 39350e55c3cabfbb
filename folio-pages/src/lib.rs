//! Folio Pages - static HTML rendering for portfolios
//!
//! Turns the data produced by `folio-core` loaders into complete HTML
//! documents: page chrome, meta tags, cards, endorsements, and the home,
//! about, project and not-found pages.

pub mod components;
pub mod error;
pub mod escape;
pub mod markdown;
pub mod pages;

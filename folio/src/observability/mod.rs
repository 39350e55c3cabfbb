//! Observability module
//!
//! Logging infrastructure for Folio builds.

pub mod logging;

pub use logging::{LogFormat, init_logging};

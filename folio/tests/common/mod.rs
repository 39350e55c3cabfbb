//! Shared integration-test helpers for running the `folio` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Runs `folio` with the given arguments and waits for it to exit.
///
/// `FOLIO_*` and `PUBLIC_URL` variables are cleared so the caller's
/// environment cannot change defaults.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_folio"))
        .args(args)
        .env_remove("FOLIO_ROOT")
        .env_remove("FOLIO_OUT")
        .env_remove("FOLIO_COLOR")
        .env_remove("FOLIO_LOG_FORMAT")
        .env_remove("FOLIO_LOG_LEVEL")
        .env_remove("PUBLIC_URL")
        .output()
        .expect("failed to run folio")
}

/// Absolute path to a fixture content root under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Fixture path as a `&str` argument.
pub fn fixture_arg(name: &str) -> String {
    fixture_path(name)
        .to_str()
        .expect("non-UTF-8 fixture path")
        .to_string()
}

/// Lossy stderr of a finished command.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

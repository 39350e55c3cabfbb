mod common;

use std::fs;

use common::{fixture_arg, spawn_command, stderr};
use tempfile::TempDir;

// ============================================================================
// build command
// ============================================================================

#[test]
fn build_writes_site() {
    let out = TempDir::new().unwrap();
    let out_dir = out.path().join("site");
    let output = spawn_command(&[
        "build",
        "--root",
        &fixture_arg("site"),
        "--out",
        out_dir.to_str().unwrap(),
        "--public-url",
        "https://ada.dev/",
    ]);
    assert!(
        output.status.success(),
        "build should exit 0: {}",
        stderr(&output)
    );

    for rel in [
        "index.html",
        "about/index.html",
        "projects/engine/index.html",
        "projects/notes/index.html",
        "404.html",
        "styles.css",
    ] {
        assert!(out_dir.join(rel).is_file(), "missing {rel}");
    }

    let home = fs::read_to_string(out_dir.join("index.html")).unwrap();
    assert!(home.contains("Hi, I'm Ada"));
    assert!(home.contains("href=\"https://ada.dev/\""));
    assert!(home.contains("Analytical Engine"));
    assert!(home.contains("Bernoulli numbers"));
    assert!(home.contains("Mary Somerville"));

    let about = fs::read_to_string(out_dir.join("about/index.html")).unwrap();
    assert!(about.contains("<title>About Ada | Ada Lovelace</title>"));
    assert!(about.contains("<em>poetry</em>"));

    let engine = fs::read_to_string(out_dir.join("projects/engine/index.html")).unwrap();
    assert!(engine.contains("href=\"https://ada.dev/projects/engine\""));
    assert!(engine.contains("content=\"https://ada.dev/img/engine.png\""));
    assert!(engine.contains("<h2>Design</h2>"));
    assert!(engine.contains("Charles Babbage"));

    let summary = stderr(&output);
    assert!(summary.contains("Generated 5 pages"), "stderr: {summary}");
}

#[test]
fn build_quiet_prints_nothing() {
    let out = TempDir::new().unwrap();
    let output = spawn_command(&[
        "build",
        "--quiet",
        "--root",
        &fixture_arg("site"),
        "--out",
        out.path().to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(output.stderr.is_empty(), "stderr: {}", stderr(&output));
    assert!(output.stdout.is_empty());
}

#[test]
fn build_missing_portfolio_exits_io_error() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let output = spawn_command(&[
        "build",
        "--root",
        root.path().to_str().unwrap(),
        "--out",
        out.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(3), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("me.json"));
}

#[test]
fn build_malformed_portfolio_exits_content_error() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("data")).unwrap();
    fs::write(root.path().join("data/me.json"), "{ \"name\": ").unwrap();
    let out = TempDir::new().unwrap();

    let output = spawn_command(&[
        "build",
        "--root",
        root.path().to_str().unwrap(),
        "--out",
        out.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2), "stderr: {}", stderr(&output));
}

#[test]
fn build_unsafe_slug_exits_content_error() {
    let out = TempDir::new().unwrap();
    let output = spawn_command(&[
        "build",
        "--root",
        &fixture_arg("unsafe_slug"),
        "--out",
        out.path().to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("'my engine'"));
}

#[test]
fn build_into_content_root_exits_usage_error() {
    let root = fixture_arg("site");
    let output = spawn_command(&["build", "--root", &root, "--out", &root]);
    assert_eq!(output.status.code(), Some(64), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("refusing to build"));
    assert!(common::fixture_path("site").join("data/me.json").is_file());
}

// ============================================================================
// routes command
// ============================================================================

#[test]
fn routes_json() {
    let output = spawn_command(&["routes", "--root", &fixture_arg("site"), "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("routes JSON should be valid");
    let paths: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["/", "/about", "/projects/engine", "/projects/notes"]);
}

#[test]
fn routes_human() {
    let output = spawn_command(&["routes", "--root", &fixture_arg("site")]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.contains("/projects/notes"));
}

// ============================================================================
// check command
// ============================================================================

#[test]
fn check_clean_site_strict() {
    let output = spawn_command(&["check", "--strict", "--root", &fixture_arg("site")]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("0 warning(s)"));
}

#[test]
fn check_duplicate_slugs_warns() {
    let output = spawn_command(&["check", "--root", &fixture_arg("duplicate_slugs")]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("duplicate slug \"engine\""));
}

#[test]
fn check_duplicate_slugs_strict_fails() {
    let output = spawn_command(&[
        "check",
        "--strict",
        "--root",
        &fixture_arg("duplicate_slugs"),
    ]);
    assert_eq!(output.status.code(), Some(2), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("strict mode"));
}

#[test]
fn check_unsafe_slug_strict_fails() {
    let output = spawn_command(&["check", "--strict", "--root", &fixture_arg("unsafe_slug")]);
    assert_eq!(output.status.code(), Some(2), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("not URL-safe"));
}

// ============================================================================
// version / completions
// ============================================================================

#[test]
fn version_json() {
    let output = spawn_command(&["version", "--format", "json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("version JSON should be valid");
    assert_eq!(parsed["name"], "folio");
    assert!(parsed["version"].as_str().unwrap().contains('.'));
}

#[test]
fn help_exits_success() {
    let output = spawn_command(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("build"));
}

#[test]
fn completions_bash() {
    let output = spawn_command(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("folio"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let output = spawn_command(&[]);
    assert_eq!(output.status.code(), Some(64));
}

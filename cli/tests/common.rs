//! # ReelRec CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions and re-exports common crates
//! used across multiple integration test files (`catalog.rs`, `recommend.rs`,
//! etc.). This avoids code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs` file
//! in that directory (that isn't a module like this one) is compiled as a separate
//! test crate linked against the main `reelrec` binary crate.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// # Get ReelRec Command (`reelrec_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to the
/// compiled `reelrec` binary target for the current test run.
///
/// The `REELREC_CONFIG` variable is cleared so tests are isolated from the
/// developer's environment; tests that need a specific configuration set it
/// explicitly (see `write_config`).
///
/// ## Panics
/// Panics if the `reelrec` binary cannot be found via `Command::cargo_bin`.
///
/// ## Returns
/// * `Command` - An `assert_cmd::Command` ready to have arguments added and assertions run.
pub fn reelrec_cmd() -> Command {
    let mut cmd = Command::cargo_bin("reelrec").expect("Failed to find reelrec binary for testing");
    cmd.env_remove("REELREC_CONFIG");
    cmd
}

/// # Write Test Config (`write_config`)
///
/// Writes `content` to a `config.toml` inside a fresh temp directory and
/// returns the directory guard together with the file path. Pass the path
/// via `.env("REELREC_CONFIG", ...)` to run a command against a known
/// configuration (the env var takes full precedence over the search path).
///
/// The `TempDir` guard must be kept alive for the duration of the test.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for config");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write test config");
    (dir, path)
}

/// A minimal three-movie catalog config exercising all three similarity
/// signals: two Sci-Fi films sharing one tag (eleven years apart) and an
/// unrelated drama from another decade.
pub const SMALL_CATALOG_CONFIG: &str = r#"
[[catalog.items]]
id = 1
title = "Alpha"
genre = "Sci-Fi"
year = 1999
tags = ["action", "philosophy"]

[[catalog.items]]
id = 2
title = "Beta"
genre = "Sci-Fi"
year = 2010
tags = ["action"]

[[catalog.items]]
id = 3
title = "Gamma"
genre = "Drama"
year = 1990
tags = []
"#;

//! # ReelRec CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! This integration test file focuses on verifying the top-level behavior
//! of the `reelrec` command-line interface, such as handling standard flags
//! like `--version` and `--help`, the `help` subcommand itself, and the
//! rejection of unknown subcommands.
//!

// Declare and use the common module for helpers like `reelrec_cmd()`
mod common;
use common::*;
use predicates::prelude::*;

/// # Test Help Subcommand (`test_help_subcommand`)
///
/// Verifies that `reelrec help` exits successfully and lists the four
/// top-level command groups in its output.
#[test]
fn test_help_subcommand() {
    reelrec_cmd().arg("help").assert().success().stdout(
        predicate::str::contains("catalog")
            .and(predicate::str::contains("recommend"))
            .and(predicate::str::contains("profile"))
            .and(predicate::str::contains("shell")),
    );
}

/// # Test Version Flag (`test_version_flag`)
///
/// Verifies that `reelrec --version` prints the binary name and exits zero.
#[test]
fn test_version_flag() {
    reelrec_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reelrec"));
}

/// # Test Unknown Subcommand (`test_unknown_subcommand_fails`)
///
/// Verifies that an unrecognized subcommand produces a `clap` usage error
/// on stderr and a nonzero exit status.
#[test]
fn test_unknown_subcommand_fails() {
    reelrec_cmd()
        .arg("watch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// # Test No Arguments (`test_no_arguments_shows_usage`)
///
/// Running `reelrec` with no subcommand is a usage error, not a silent
/// success: clap prints the help text to stderr and exits nonzero.
#[test]
fn test_no_arguments_shows_usage() {
    reelrec_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

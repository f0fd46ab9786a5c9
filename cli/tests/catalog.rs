//! # ReelRec CLI Catalog Integration Tests
//!
//! File: cli/tests/catalog.rs
//!
//! ## Overview
//!
//! Integration tests for the `reelrec catalog` subcommand group (`list`,
//! `info`). These tests verify the CLI behavior for browsing the built-in
//! catalog and for catalogs supplied through a `REELREC_CONFIG` override.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;

/// # Test Catalog List Builtin (`test_catalog_list_builtin`)
///
/// Verifies that `reelrec catalog list` succeeds with no configuration
/// present and shows the built-in eight-movie catalog.
#[test]
fn test_catalog_list_builtin() {
    reelrec_cmd().args(["catalog", "list"]).assert().success().stdout(
        predicate::str::contains("AVAILABLE MOVIES")
            .and(predicate::str::contains("The Matrix"))
            .and(predicate::str::contains("Parasite"))
            .and(predicate::str::contains("Found 8 movie(s).")),
    );
}

/// # Test Catalog List Override (`test_catalog_list_config_override`)
///
/// Verifies that a catalog defined inline in a `REELREC_CONFIG` file
/// replaces the built-in one wholesale: the configured titles appear and
/// the built-in ones do not.
#[test]
fn test_catalog_list_config_override() {
    let (_guard, config_path) = write_config(SMALL_CATALOG_CONFIG);

    reelrec_cmd()
        .args(["catalog", "list"])
        .env("REELREC_CONFIG", &config_path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Alpha")
                .and(predicate::str::contains("Found 3 movie(s)."))
                .and(predicate::str::contains("The Matrix").not()),
        );
}

/// # Test Catalog Info Success (`test_catalog_info_success`)
///
/// Verifies that `reelrec catalog info <ID>` prints the detail view
/// (title, year, genre, tags) for a movie in the built-in catalog.
#[test]
fn test_catalog_info_success() {
    reelrec_cmd().args(["catalog", "info", "1"]).assert().success().stdout(
        predicate::str::contains("The Matrix (1999)")
            .and(predicate::str::contains("Genre: Sci-Fi"))
            .and(predicate::str::contains("action, philosophy")),
    );
}

/// # Test Catalog Info Not Found (`test_catalog_info_not_found`)
///
/// Verifies that `reelrec catalog info <ID>` fails with an explanatory
/// error on stderr when the id is not in the catalog.
#[test]
fn test_catalog_info_not_found() {
    reelrec_cmd()
        .args(["catalog", "info", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Movie 999 not found in the catalog"));
}

/// # Test Catalog Info Non-Numeric (`test_catalog_info_non_numeric_id`)
///
/// Verifies that a non-numeric id is rejected by `clap` at parse time
/// rather than reaching the catalog lookup.
#[test]
fn test_catalog_info_non_numeric_id() {
    reelrec_cmd()
        .args(["catalog", "info", "matrix"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

/// # Test Catalog External File (`test_catalog_external_file`)
///
/// Verifies the `catalog.file` configuration path: the catalog is read
/// from a separate TOML file referenced by the main config.
#[test]
fn test_catalog_external_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for catalog");
    let catalog_path = dir.path().join("movies.toml");
    std::fs::write(
        &catalog_path,
        r#"
[[items]]
id = 10
title = "Delta"
genre = "Horror"
year = 1981
tags = ["slow-burn"]
"#,
    )
    .expect("Failed to write catalog file");

    let config = format!("[catalog]\nfile = \"{}\"\n", catalog_path.display());
    let (_guard, config_path) = write_config(&config);

    reelrec_cmd()
        .args(["catalog", "list"])
        .env("REELREC_CONFIG", &config_path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Delta")
                .and(predicate::str::contains("Found 1 movie(s).")),
        );
}

//! # ReelRec Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level commands that comprise the
//! ReelRec CLI. It serves as the central point for importing and
//! re-exporting command modules to make them accessible to the main
//! application entry point (`main.rs`).
//!
//! ## Architecture
//!
//! The commands follow a hierarchical structure:
//! - Top-level modules represent a command or command group
//! - Groups (like `catalog`) contain subcommands in their own files
//! - All modules are made public for access from `main.rs`
//!
//! ## Commands
//!
//! - `catalog`: browse the movie catalog (`list`, `info`)
//! - `recommend`: one-shot recommendations from `--rate` pairs
//! - `profile`: one-shot rating profile and favorite genre
//! - `shell`: interactive menu session with in-memory ratings
//!
//! The shared `--rate ID=STARS` argument type lives in `rate_args`.
//!
/// Command group for browsing the movie catalog. Includes `list` and `info`.
pub mod catalog;
/// One-shot rating profile and favorite-genre command.
pub mod profile;
/// Shared parsing for `--rate ID=STARS` command-line pairs.
pub mod rate_args;
/// One-shot recommendation command.
pub mod recommend;
/// Interactive menu session command.
pub mod shell;

// Note regarding subcommand declarations:
// Subcommands (like `list` within `catalog`) are declared within their
// respective parent module's `mod.rs` file. They are *not* declared here
// at the top level of the `commands` module.

//! # ReelRec Shell Command Group
//!
//! File: cli/src/commands/shell/mod.rs
//!
//! ## Overview
//!
//! This module is the entry point for the `reelrec shell` command: an
//! interactive menu session that keeps ratings in memory until the user
//! quits. It is the closest surface to the classic rate-then-recommend
//! workflow - rate a few movies, ask for recommendations, check the
//! profile, all within one process.
//!
//! ## Architecture
//!
//! - `mod.rs` (this file): the clap argument struct and the async handler
//!   that wires the session to real stdin/stdout.
//! - `session`: the actual menu loop, written against generic reader and
//!   writer types so unit tests can drive it with in-memory buffers.
//!
//! Ratings live in a `RatingStore` keyed by the session user (the
//! `--user` flag, default "local"), so nothing about the session is
//! global state.
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! reelrec shell
//! reelrec shell --user alice
//! ```
//!
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// Contains the interactive menu loop itself.
pub mod session;

/// # Shell Arguments (`ShellArgs`)
///
/// Defines the command-line arguments accepted by the `reelrec shell`
/// command.
#[derive(Parser, Debug)]
pub struct ShellArgs {
    /// Session user identifier the in-memory ratings are keyed by.
    /// Mostly useful for keeping experiments apart; ratings are never
    /// persisted either way.
    #[arg(long, default_value = "local")]
    user: String,
}

/// # Handle Shell Command (`handle_shell`)
///
/// The main asynchronous handler function for the `reelrec shell`
/// command. Loads the configuration and catalog once, then hands control
/// to the menu loop on locked stdin/stdout until the user quits or input
/// ends.
///
/// ## Arguments
///
/// * `args`: The parsed `ShellArgs` with the session user identifier.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` when the session ends normally; an `Err` for
///   configuration failures or I/O errors on the terminal streams.
pub async fn handle_shell(args: ShellArgs) -> Result<()> {
    info!("Starting interactive shell session for user '{}'", args.user);

    let cfg = config::load_config().context("Failed to load ReelRec configuration")?;
    let catalog = config::load_catalog(&cfg).context("Failed to load movie catalog")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run_session(
        &catalog,
        cfg.recommendations.top_n,
        &args.user,
        stdin.lock(),
        stdout.lock(),
    )?;

    Ok(())
}

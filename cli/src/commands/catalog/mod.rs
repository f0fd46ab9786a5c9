//! # ReelRec Catalog Command Group
//!
//! File: cli/src/commands/catalog/mod.rs
//!
//! ## Overview
//!
//! This module serves as the entry point and router for the `reelrec
//! catalog` command group. It defines the available subcommands (`list`,
//! `info`) for browsing the movie catalog and delegates execution to the
//! appropriate submodule handlers.
//!
//! ## Architecture
//!
//! The module uses Clap's derive macros to define the command structure:
//! - `CatalogArgs`: Top-level arguments for the command group.
//! - `CatalogCommand`: Enum defining all catalog subcommands.
//! - `handle_catalog`: Main handler function that routes execution to the
//!   relevant subcommand handler.
//!
//! Each specific subcommand's logic is implemented in its own `.rs` file
//! within this directory (`list.rs`, `info.rs`).
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # List every movie in the catalog
//! reelrec catalog list
//!
//! # Show the details of one movie
//! reelrec catalog info 1
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Contains the handler and arguments for the `reelrec catalog info` subcommand.
mod info;
/// Contains the handler and arguments for the `reelrec catalog list` subcommand.
mod list;

/// # Catalog Command Group Arguments (`CatalogArgs`)
///
/// Represents the top-level command group `reelrec catalog`. Its primary
/// role is to capture which specific subcommand (`list` or `info`) the
/// user wants to execute.
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// The specific catalog subcommand to execute.
    #[command(subcommand)]
    command: CatalogCommand,
}

/// # Catalog Subcommands (`CatalogCommand`)
///
/// The set of valid subcommands that can follow `reelrec catalog`. Each
/// variant holds the arguments struct its handler needs.
#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Corresponds to `reelrec catalog list`: shows every movie.
    List(list::ListArgs),
    /// Corresponds to `reelrec catalog info <ID>`: shows one movie.
    Info(info::InfoArgs),
}

/// # Handle Catalog Command (`handle_catalog`)
///
/// Dispatcher for the `reelrec catalog` command group: matches on the
/// parsed subcommand and calls the corresponding handler, propagating its
/// `Result` unchanged.
pub async fn handle_catalog(args: CatalogArgs) -> Result<()> {
    match args.command {
        CatalogCommand::List(args) => list::handle_list(args).await?,
        CatalogCommand::Info(args) => info::handle_info(args).await?,
    }
    Ok(())
}

// --- Unit Tests ---
// These tests focus on ensuring that the argument parsing for the
// `catalog` command group and its subcommands works as expected via Clap.
#[cfg(test)]
mod tests {
    use super::*;

    /// Test that `clap` correctly parses the `reelrec catalog list` command.
    #[test]
    fn test_parses_catalog_list() {
        let result = CatalogArgs::try_parse_from(["catalog", "list"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            CatalogCommand::List(_) => {}
            _ => panic!("Incorrect subcommand parsed for 'list'"),
        }
    }

    /// Test that `clap` correctly parses `reelrec catalog info <ID>`.
    #[test]
    fn test_parses_catalog_info() {
        let result = CatalogArgs::try_parse_from(["catalog", "info", "3"]);
        assert!(result.is_ok());
        match result.unwrap().command {
            CatalogCommand::Info(_) => {}
            _ => panic!("Incorrect subcommand parsed for 'info'"),
        }
    }

    /// Non-numeric ids are rejected at parse time, before any handler runs.
    #[test]
    fn test_info_requires_numeric_id() {
        assert!(CatalogArgs::try_parse_from(["catalog", "info", "matrix"]).is_err());
        assert!(CatalogArgs::try_parse_from(["catalog", "info"]).is_err());
    }
}

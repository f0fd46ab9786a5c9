//! # ReelRec Catalog Info Command
//!
//! File: cli/src/commands/catalog/info.rs
//!
//! ## Overview
//!
//! This module implements the `reelrec catalog info <ID>` command, which
//! displays the full details of a single catalog entry: title, release
//! year, genre, and tags.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load ReelRec configuration and resolve the active catalog
//! 2. Look the requested id up; fail with the engine's `ItemNotFound`
//!    message if it is unknown
//! 3. Print the detail view
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! reelrec catalog info 1
//! ```
//!
//! Example output:
//!
//! ```
//! The Matrix (1999)
//!   Genre: Sci-Fi
//!   Tags:  action, philosophy
//! ```
//!
use crate::common::engine::Item;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use super::list::format_tags;

/// # Catalog Info Arguments (`InfoArgs`)
///
/// Defines the command-line arguments accepted by the `reelrec catalog
/// info` subcommand.
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// The id of the movie to display information about. Run
    /// `reelrec catalog list` to see the available ids.
    movie_id: u32, // Required positional argument
}

/// # Handle Catalog Info Command (`handle_info`)
///
/// The main asynchronous handler function for the `reelrec catalog info`
/// command. Resolves the catalog and prints the requested entry, or fails
/// with the `ItemNotFound` condition if the id is unknown.
///
/// ## Arguments
///
/// * `args` - The parsed `InfoArgs` struct containing the `movie_id`.
///
/// ## Returns
///
/// * `Result<()>` - `Ok(())` if the movie was found and displayed; an
///   `Err` for configuration failures or an unknown id.
pub async fn handle_info(args: InfoArgs) -> Result<()> {
    info!("Handling catalog info command for movie {}...", args.movie_id);

    let cfg = config::load_config().context("Failed to load ReelRec configuration")?;
    let catalog = config::load_catalog(&cfg).context("Failed to load movie catalog")?;
    debug!("Looking up movie {} in the catalog", args.movie_id);

    // Unknown ids fail with the lookup hint users need next.
    if !catalog.contains(args.movie_id) {
        anyhow::bail!(
            "Movie {} not found in the catalog. Run 'reelrec catalog list' to see available ids.",
            args.movie_id
        );
    }
    let item = catalog.require(args.movie_id)?;

    print_item_details(item);

    Ok(())
}

/// # Print Item Details (`print_item_details`)
///
/// Prints the single-movie detail view used by `catalog info`.
pub(crate) fn print_item_details(item: &Item) {
    println!("{} ({})", item.title, item.year);
    println!("  Genre: {}", item.genre);
    println!("  Tags:  {}", format_tags(item));
}

//! # ReelRec Catalog List Command
//!
//! File: cli/src/commands/catalog/list.rs
//!
//! ## Overview
//!
//! This module implements the `reelrec catalog list` command, which
//! displays every movie in the loaded catalog. It handles:
//! - Loading the configuration and resolving the active catalog
//! - Formatting and displaying the catalog as a table
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load ReelRec configuration (which may override the built-in catalog)
//! 2. Resolve the catalog via `config::load_catalog`
//! 3. Format and display the entries in catalog order
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! reelrec catalog list
//! ```
//!
//! Example output:
//!
//! ```
//! ============================================================
//! AVAILABLE MOVIES
//! ============================================================
//!
//! ID | Title                    (Year) | Genre   | Tags
//! ---+---------------------------------+---------+---------------------
//!  1 | The Matrix               (1999) | Sci-Fi  | action, philosophy
//!  2 | Inception                (2010) | Sci-Fi  | mind-bending, action
//! ...
//!
//! Found 8 movie(s).
//! Use 'reelrec catalog info <ID>' for details or 'reelrec recommend --rate <ID>=<STARS> ...' to get recommendations.
//! ```
//!
use crate::common::engine::{Catalog, Item};
use crate::common::ui;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// # List Catalog Arguments (`ListArgs`)
///
/// Defines the command-line arguments accepted by the `reelrec catalog
/// list` subcommand. Currently, this command doesn't require any specific
/// arguments, but the struct exists for structural consistency within the
/// `clap` framework and allows for potential future additions (like genre
/// filtering) without breaking changes.
#[derive(Parser, Debug)]
pub struct ListArgs {}

// --- Functions ---

/// # Handle Catalog List Command (`handle_list`)
///
/// The main asynchronous handler function for the `reelrec catalog list`
/// command. Loads the configuration, resolves the catalog, and prints it
/// as a table in catalog order.
///
/// ## Arguments
///
/// * `_args`: The parsed `ListArgs` struct. Currently unused as the command takes no options.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` if the catalog was displayed; an `Err` if
///   configuration loading or catalog resolution fails.
pub async fn handle_list(_args: ListArgs) -> Result<()> {
    info!("Handling catalog list command...");

    let cfg = config::load_config().context("Failed to load ReelRec configuration")?;
    let catalog = config::load_catalog(&cfg).context("Failed to load movie catalog")?;
    debug!("Loaded catalog with {} item(s)", catalog.len());

    print_catalog_table(&catalog);

    Ok(())
}

/// # Print Catalog Table (`print_catalog_table`)
///
/// Formats and prints every catalog entry. Column widths adapt to the
/// longest title and genre so configured catalogs line up as nicely as
/// the built-in one.
fn print_catalog_table(catalog: &Catalog) {
    println!("\n{}\n", ui::banner("Available Movies"));

    if catalog.is_empty() {
        // Unreachable through load_catalog (empty files are rejected and
        // empty inline items fall back to the builtin), but the table
        // printer should not rely on that.
        println!("The catalog is empty.");
        return;
    }

    let title_width = catalog
        .iter()
        .map(|item| item.title.chars().count())
        .max()
        .unwrap_or(10)
        .clamp(10, 40);
    let genre_width = catalog
        .iter()
        .map(|item| item.genre.chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 20);

    println!(
        "{:>3} | {:<title_width$} (Year) | {:<genre_width$} | Tags",
        "ID", "Title", "Genre"
    );
    println!(
        "{:->3}-+-{:-<title_width$}--------+-{:-<genre_width$}-+-{:-<20}",
        "", "", "", ""
    );
    for item in catalog.iter() {
        println!(
            "{:>3} | {:<title_width$} ({}) | {:<genre_width$} | {}",
            item.id,
            item.title,
            item.year,
            item.genre,
            format_tags(item)
        );
    }

    println!("\nFound {} movie(s).", catalog.len());
    println!(
        "Use 'reelrec catalog info <ID>' for details or 'reelrec recommend --rate <ID>=<STARS> ...' to get recommendations."
    );
}

/// Joins an item's tags for display, with a placeholder when none exist.
pub(super) fn format_tags(item: &Item) -> String {
    if item.tags.is_empty() {
        "(no tags)".to_string()
    } else {
        item.tags.join(", ")
    }
}

//! # ReelRec Recommend Command
//!
//! File: cli/src/commands/recommend.rs
//!
//! ## Overview
//!
//! This module implements the one-shot `reelrec recommend` command:
//! ratings come in as repeated `--rate ID=STARS` pairs, the engine ranks
//! every unrated movie by weighted similarity to the rated ones, and the
//! top results are printed with their match scores.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load configuration and resolve the active catalog
//! 2. Build a validated rating set from the `--rate` pairs (range and
//!    catalog membership both checked through the engine's `rate` path)
//! 3. Call `scorer::recommend` and print the ranked results
//!
//! Calling the command with no `--rate` pairs hits the engine's distinct
//! `NoRatings` condition and exits nonzero with its message - an empty
//! rating set is an error, not an empty list.
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! # Rate The Matrix 5 stars and Forrest Gump 4, show the default top 3
//! reelrec recommend --rate 1=5 --rate 6=4
//!
//! # Same ratings, top 5
//! reelrec recommend --rate 1=5 --rate 6=4 --top 5
//! ```
//!
//! Example output:
//!
//! ```
//! ============================================================
//! RECOMMENDED FOR YOU
//! ============================================================
//!
//! 1. Interstellar (2014)
//!    Genre: Sci-Fi
//!    Match Score: 20
//!    Tags: space, family
//! ...
//! ```
//!
use crate::commands::rate_args::{collect_ratings, RateSpec};
use crate::common::engine::{scorer, Catalog, Recommendation};
use crate::common::ui;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// # Recommend Arguments (`RecommendArgs`)
///
/// Defines the command-line arguments accepted by the `reelrec recommend`
/// command.
#[derive(Parser, Debug)]
pub struct RecommendArgs {
    /// Ratings as ID=STARS pairs (repeatable, e.g. --rate 1=5 --rate 3=4).
    /// Later pairs for the same id overwrite earlier ones.
    #[arg(long = "rate", value_name = "ID=STARS")]
    rate: Vec<RateSpec>,

    /// How many recommendations to show (defaults to the configured
    /// recommendations.top_n, which itself defaults to 3).
    #[arg(long = "top", value_name = "N")]
    top: Option<usize>,
}

/// # Handle Recommend Command (`handle_recommend`)
///
/// The main asynchronous handler function for the `reelrec recommend`
/// command.
///
/// ## Workflow:
/// 1. Load configuration and resolve the catalog.
/// 2. Validate the `--rate` pairs into a rating set.
/// 3. Run the scorer and print the ranked recommendations.
///
/// ## Arguments
///
/// * `args`: The parsed `RecommendArgs` with the rating pairs and optional result count.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` on success; an `Err` for configuration
///   failures, invalid ratings, unknown ids, or an empty rating set.
pub async fn handle_recommend(args: RecommendArgs) -> Result<()> {
    info!("Handling recommend command with {} rating(s)...", args.rate.len());

    let cfg = config::load_config().context("Failed to load ReelRec configuration")?;
    let catalog = config::load_catalog(&cfg).context("Failed to load movie catalog")?;

    let ratings = collect_ratings(&catalog, &args.rate)?;
    let top_n = args.top.unwrap_or(cfg.recommendations.top_n);
    debug!(top_n, rated = ratings.len(), "running the scorer");

    // NoRatings propagates from here when no --rate pairs were given.
    let recommendations = scorer::recommend(&catalog, &ratings, top_n)?;

    print_recommendations(&catalog, &recommendations);

    Ok(())
}

/// # Print Recommendations (`print_recommendations`)
///
/// Prints the ranked recommendation list with title, year, genre, match
/// score, and tags for each entry.
pub(crate) fn print_recommendations(catalog: &Catalog, recommendations: &[Recommendation]) {
    println!("\n{}\n", ui::banner("Recommended For You"));

    if recommendations.is_empty() {
        // Every catalog item was rated; nothing left to suggest.
        println!("You have rated everything in the catalog - nothing left to recommend!");
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        // Recommendations always come from the catalog that scored them.
        let Some(item) = catalog.get(rec.item_id) else {
            continue;
        };
        println!("{}. {} ({})", rank + 1, item.title, item.year);
        println!("   Genre: {}", item.genre);
        println!("   Match Score: {}", rec.score);
        if !item.tags.is_empty() {
            println!("   Tags: {}", item.tags.join(", "));
        }
        println!();
    }
}

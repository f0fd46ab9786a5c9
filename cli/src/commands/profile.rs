//! # ReelRec Profile Command
//!
//! File: cli/src/commands/profile.rs
//!
//! ## Overview
//!
//! This module implements the one-shot `reelrec profile` command: given
//! ratings as repeated `--rate ID=STARS` pairs, it shows each rated movie
//! with a star bar and derives the favorite genre from the high (>= 4
//! star) ratings.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load configuration and resolve the active catalog
//! 2. Build a validated rating set from the `--rate` pairs
//! 3. Print the star-bar view in rating insertion order
//! 4. Derive the favorite genre; `NoFavorite` is downgraded to a friendly
//!    note here - a profile with only low ratings is a valid profile, so
//!    the command still succeeds
//!
//! ## Examples
//!
//! Usage:
//!
//! ```bash
//! reelrec profile --rate 1=5 --rate 2=4 --rate 3=2
//! ```
//!
//! Example output:
//!
//! ```
//! ============================================================
//! YOUR RATINGS
//! ============================================================
//!
//! The Matrix: ***** (5/5)
//! Inception: ****- (4/5)
//! The Shawshank Redemption: **--- (2/5)
//!
//! You seem to enjoy Sci-Fi movies!
//! ```
//!
use crate::commands::rate_args::{collect_ratings, RateSpec};
use crate::common::engine::profile::favorite_category;
use crate::common::engine::{Catalog, UserRatings};
use crate::common::ui;
use crate::core::config;
use crate::core::error::{ReelrecError, Result};
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// # Profile Arguments (`ProfileArgs`)
///
/// Defines the command-line arguments accepted by the `reelrec profile`
/// command.
#[derive(Parser, Debug)]
pub struct ProfileArgs {
    /// Ratings as ID=STARS pairs (repeatable, e.g. --rate 1=5 --rate 3=4).
    /// Later pairs for the same id overwrite earlier ones.
    #[arg(long = "rate", value_name = "ID=STARS", required = true)]
    rate: Vec<RateSpec>,
}

/// # Handle Profile Command (`handle_profile`)
///
/// The main asynchronous handler function for the `reelrec profile`
/// command: validates the ratings, prints the star-bar view, and reports
/// the favorite genre (or a note when no rating reaches the threshold).
///
/// ## Arguments
///
/// * `args`: The parsed `ProfileArgs` with the rating pairs.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` on success; an `Err` for configuration
///   failures, invalid ratings, or unknown ids.
pub async fn handle_profile(args: ProfileArgs) -> Result<()> {
    info!("Handling profile command with {} rating(s)...", args.rate.len());

    let cfg = config::load_config().context("Failed to load ReelRec configuration")?;
    let catalog = config::load_catalog(&cfg).context("Failed to load movie catalog")?;

    let ratings = collect_ratings(&catalog, &args.rate)?;

    print_profile(&catalog, &ratings);

    Ok(())
}

/// # Print Profile (`print_profile`)
///
/// Prints the star-bar view for every rating in insertion order, followed
/// by the favorite-genre line. The `NoFavorite` condition renders as a
/// note instead of failing: the view is still meaningful without it.
pub(crate) fn print_profile(catalog: &Catalog, ratings: &UserRatings) {
    println!("\n{}\n", ui::banner("Your Ratings"));

    for rating in ratings.iter() {
        // Ratings always reference catalog items (enforced by `rate`).
        let Some(item) = catalog.get(rating.item_id) else {
            continue;
        };
        println!(
            "{}: {} ({}/5)",
            item.title,
            ui::star_bar(rating.value),
            rating.value
        );
    }

    match favorite_category(catalog, ratings) {
        Ok(pref) => println!("\nYou seem to enjoy {} movies!", pref.genre),
        Err(e)
            if e.downcast_ref::<ReelrecError>()
                .is_some_and(|re| matches!(re, ReelrecError::NoFavorite)) =>
        {
            println!("\nNo favorite genre yet - rate something 4 stars or higher!");
        }
        // favorite_category only fails with NoFavorite; anything else
        // would be a bug worth hearing about, but not worth a panic in a
        // display path.
        Err(e) => println!("\nCould not derive a favorite genre: {e}"),
    }
}

//! # ReelRec Interactive Session (`commands::shell::session`)
//!
//! File: cli/src/commands/shell/session.rs
//!
//! ## Overview
//!
//! The interactive menu loop behind `reelrec shell`: a numbered menu
//! (view movies, rate, recommend, profile, quit) driven line by line.
//! Ratings accumulate in a per-user `RatingStore` for the duration of the
//! session and vanish when it ends.
//!
//! ## Architecture
//!
//! - Menu input is parsed once into the `MenuChoice` enum and dispatched
//!   with a `match` - an explicit tagged-command enumeration, not
//!   cascading string checks.
//! - The loop is generic over `BufRead`/`Write`, so unit tests run whole
//!   sessions against in-memory buffers and integration tests pipe stdin
//!   through the real binary.
//! - Recoverable engine conditions (`NoRatings`, `InvalidRating`,
//!   `ItemNotFound`) are caught here and rendered as friendly messages;
//!   the loop always continues. Only I/O errors abort the session.
//! - End of input (EOF) is treated like choosing Quit, so piped sessions
//!   end cleanly.
//!
use crate::common::engine::profile::favorite_category;
use crate::common::engine::ratings::{MAX_RATING, MIN_RATING};
use crate::common::engine::{scorer, Catalog, RatingStore, UserRatings};
use crate::common::ui;
use crate::core::error::{ReelrecError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// One menu action, parsed from the user's numeric choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    /// View all movies in the catalog.
    ListMovies,
    /// Rate a movie (prompts for id and stars).
    RateMovie,
    /// Show recommendations for the current ratings.
    Recommendations,
    /// Show the rating profile and favorite genre.
    Profile,
    /// End the session.
    Quit,
}

impl MenuChoice {
    /// Parses a menu input line. Returns `None` for anything that is not
    /// one of the numbered choices.
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ListMovies),
            "2" => Some(Self::RateMovie),
            "3" => Some(Self::Recommendations),
            "4" => Some(Self::Profile),
            "5" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Runs an interactive session until Quit or end of input.
///
/// `top_n` is the configured recommendation count; `user` keys the
/// session's ratings in the store.
pub fn run_session<R: BufRead, W: Write>(
    catalog: &Catalog,
    top_n: usize,
    user: &str,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut store = RatingStore::new();

    writeln!(output, "{}", ui::banner("Reel Rec - Movie Recommendations"))?;
    writeln!(
        output,
        "This session learns your preferences and recommends movies!"
    )?;

    loop {
        write_menu(&mut output)?;
        let Some(line) = read_line(&mut input)? else {
            // EOF: treat like Quit so piped input ends the session cleanly.
            debug!("input stream ended; closing session");
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::ListMovies) => write_catalog(&mut output, catalog)?,
            Some(MenuChoice::RateMovie) => {
                rate_movie(catalog, store.user_mut(user), &mut input, &mut output)?
            }
            Some(MenuChoice::Recommendations) => {
                write_recommendations(&mut output, catalog, store.user_mut(user), top_n)?
            }
            Some(MenuChoice::Profile) => {
                write_profile(&mut output, catalog, store.user_mut(user))?
            }
            Some(MenuChoice::Quit) => break,
            None => writeln!(output, "Invalid choice. Please enter 1-5.")?,
        }
    }

    writeln!(output, "\nThanks for using ReelRec!")?;
    writeln!(output, "{}", "=".repeat(ui::BANNER_WIDTH))?;
    Ok(())
}

/// Reads one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}

fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "\n{}", ui::separator())?;
    writeln!(output, "MENU")?;
    writeln!(output, "{}", ui::separator())?;
    writeln!(output, "1. View all movies")?;
    writeln!(output, "2. Rate a movie")?;
    writeln!(output, "3. Get recommendations")?;
    writeln!(output, "4. View your profile")?;
    writeln!(output, "5. Exit")?;
    writeln!(output, "\nEnter your choice (1-5):")?;
    Ok(())
}

fn write_catalog<W: Write>(output: &mut W, catalog: &Catalog) -> Result<()> {
    writeln!(output, "\n{}", ui::banner("Available Movies"))?;
    for item in catalog.iter() {
        writeln!(output, "{}. {} ({})", item.id, item.title, item.year)?;
        writeln!(output, "   Genre: {}", item.genre)?;
        if !item.tags.is_empty() {
            writeln!(output, "   Tags: {}", item.tags.join(", "))?;
        }
        writeln!(output)?;
    }
    Ok(())
}

/// The two-prompt rating flow: movie id, then star value. Every failure
/// (non-numeric input, unknown id, out-of-range stars) is reported and
/// returns to the menu - nothing here ends the session.
fn rate_movie<R: BufRead, W: Write>(
    catalog: &Catalog,
    ratings: &mut UserRatings,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Enter movie ID to rate:")?;
    let Some(id_line) = read_line(input)? else {
        return Ok(());
    };
    let Ok(item_id) = id_line.parse::<u32>() else {
        writeln!(output, "Invalid input. Please enter numbers only.")?;
        return Ok(());
    };

    writeln!(
        output,
        "Enter rating ({MIN_RATING}-{MAX_RATING} stars):"
    )?;
    let Some(value_line) = read_line(input)? else {
        return Ok(());
    };
    let Ok(value) = value_line.parse::<u8>() else {
        writeln!(output, "Invalid input. Please enter numbers only.")?;
        return Ok(());
    };

    match ratings.rate(catalog, item_id, value) {
        Ok(()) => {
            // rate() guarantees the item exists on success.
            if let Some(item) = catalog.get(item_id) {
                writeln!(output, "Rated '{}' with {} stars", item.title, value)?;
            }
        }
        Err(e) => match e.downcast_ref::<ReelrecError>() {
            Some(engine_err @ (ReelrecError::InvalidRating { .. } | ReelrecError::ItemNotFound { .. })) => {
                writeln!(output, "{engine_err}")?;
            }
            _ => return Err(e),
        },
    }
    Ok(())
}

fn write_recommendations<W: Write>(
    output: &mut W,
    catalog: &Catalog,
    ratings: &UserRatings,
    top_n: usize,
) -> Result<()> {
    let recommendations = match scorer::recommend(catalog, ratings, top_n) {
        Ok(recs) => recs,
        Err(e) if is_no_ratings(&e) => {
            writeln!(output, "\nNo ratings yet! Please rate some movies first.")?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    writeln!(output, "\n{}", ui::banner("Recommended For You"))?;
    if recommendations.is_empty() {
        writeln!(
            output,
            "You have rated everything in the catalog - nothing left to recommend!"
        )?;
        return Ok(());
    }
    for (rank, rec) in recommendations.iter().enumerate() {
        let Some(item) = catalog.get(rec.item_id) else {
            continue;
        };
        writeln!(output, "{}. {} ({})", rank + 1, item.title, item.year)?;
        writeln!(output, "   Genre: {}", item.genre)?;
        writeln!(output, "   Match Score: {}", rec.score)?;
        if !item.tags.is_empty() {
            writeln!(output, "   Tags: {}", item.tags.join(", "))?;
        }
        writeln!(output)?;
    }
    Ok(())
}

fn write_profile<W: Write>(
    output: &mut W,
    catalog: &Catalog,
    ratings: &UserRatings,
) -> Result<()> {
    if ratings.is_empty() {
        writeln!(output, "\nNo ratings yet!")?;
        return Ok(());
    }

    writeln!(output, "\n{}", ui::banner("Your Ratings"))?;
    for rating in ratings.iter() {
        let Some(item) = catalog.get(rating.item_id) else {
            continue;
        };
        writeln!(
            output,
            "{}: {} ({}/5)",
            item.title,
            ui::star_bar(rating.value),
            rating.value
        )?;
    }

    match favorite_category(catalog, ratings) {
        Ok(pref) => writeln!(output, "\nYou seem to enjoy {} movies!", pref.genre)?,
        Err(e)
            if e.downcast_ref::<ReelrecError>()
                .is_some_and(|re| matches!(re, ReelrecError::NoFavorite)) =>
        {
            writeln!(
                output,
                "\nNo favorite genre yet - rate something 4 stars or higher!"
            )?;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn is_no_ratings(e: &anyhow::Error) -> bool {
    e.downcast_ref::<ReelrecError>()
        .is_some_and(|re| matches!(re, ReelrecError::NoRatings))
}

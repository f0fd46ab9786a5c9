//! # ReelRec Profile Summary (`common::engine::profile`)
//!
//! File: cli/src/common/engine/profile.rs
//!
//! ## Overview
//!
//! Derives a user's favorite genre from their current ratings: the genre
//! with the most ratings at 4 stars or above. This is a computed view -
//! nothing here is stored.
//!
//! ## Architecture
//!
//! Grouping happens in **first-seen order** over the rating set's own
//! insertion order, and the maximum uses a strictly-greater comparison, so
//! on a tie the genre that first reached the top count wins. That ordering
//! is the documented tie-break contract, not an implementation accident.
//!
use crate::common::engine::catalog::Catalog;
use crate::common::engine::ratings::UserRatings;
use crate::core::error::{ReelrecError, Result};

/// Ratings at or above this star value count toward the favorite genre.
pub const FAVORITE_THRESHOLD: u8 = 4;

/// A derived genre preference: the favorite genre and how many highly
/// rated movies back it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPreference {
    /// The genre with the most ratings >= [`FAVORITE_THRESHOLD`].
    pub genre: String,
    /// Number of qualifying ratings in that genre.
    pub qualifying: usize,
}

/// Computes the user's favorite genre from their high ratings.
///
/// Fails with [`ReelrecError::NoFavorite`] when no rating reaches
/// [`FAVORITE_THRESHOLD`]. Ties break to the genre seen first in rating
/// insertion order.
pub fn favorite_category(catalog: &Catalog, ratings: &UserRatings) -> Result<CategoryPreference> {
    // First-seen-order grouping: a Vec keeps the order a map would lose.
    let mut counts: Vec<(String, usize)> = Vec::new();

    for rating in ratings.iter() {
        if rating.value < FAVORITE_THRESHOLD {
            continue;
        }
        // Ratings always reference catalog items (enforced by `rate`).
        let Some(item) = catalog.get(rating.item_id) else {
            continue;
        };
        match counts.iter_mut().find(|(genre, _)| *genre == item.genre) {
            Some((_, count)) => *count += 1,
            None => counts.push((item.genre.clone(), 1)),
        }
    }

    // Strictly-greater comparison: the first genre to reach the top count
    // stays the winner on ties.
    counts
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        })
        .map(|(genre, qualifying)| CategoryPreference { genre, qualifying })
        .ok_or_else(|| ReelrecError::NoFavorite.into())
}

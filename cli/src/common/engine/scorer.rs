//! # ReelRec Similarity Scorer (`common::engine::scorer`)
//!
//! File: cli/src/common/engine/scorer.rs
//!
//! ## Overview
//!
//! This module is the algorithmic core of ReelRec: a deterministic,
//! content-based similarity score between two movies, and a weighted
//! nearest-neighbor aggregation that ranks unrated movies against a user's
//! ratings.
//!
//! ## Architecture
//!
//! Two operations, both pure functions over plain data:
//!
//! - `similarity(a, b)`: the sum of three independent integer signals -
//!   genre match (3), shared tags (2 each), release years within 5 of each
//!   other (1). Symmetric by construction; an item's similarity to itself
//!   is the maximum achievable under the metric. No normalization: the
//!   scale is an unbounded integer sum.
//! - `recommend(catalog, ratings, top_n)`: for every unrated catalog item,
//!   `total = Σ similarity(item, rated) × star_value`, then a stable sort
//!   descending by total so equal scores keep catalog order, truncated to
//!   `top_n`. An empty rating set is a distinct `NoRatings` condition, not
//!   an empty list.
//!
//! Complexity is O(unrated × rated) per call, which is irrelevant at movie
//! catalog sizes. Given a fixed rating set the output is fully
//! deterministic, so repeated calls are idempotent.
//!
use crate::common::engine::catalog::{Catalog, Item};
use crate::common::engine::ratings::UserRatings;
use crate::core::error::{ReelrecError, Result};
use tracing::debug;

/// Points contributed when two movies share the same genre label.
pub const GENRE_MATCH_WEIGHT: u32 = 3;
/// Points contributed per tag present in both movies' tag sets.
pub const SHARED_TAG_WEIGHT: u32 = 2;
/// Points contributed when release years are close together.
pub const YEAR_PROXIMITY_BONUS: u32 = 1;
/// Maximum year difference that still counts as "close".
pub const YEAR_PROXIMITY_WINDOW: i32 = 5;

/// A ranked recommendation: an unrated item and its aggregated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    /// The recommended catalog item.
    pub item_id: u32,
    /// Aggregated weighted-similarity score (higher is better).
    pub score: u32,
}

/// Computes the content similarity between two movies.
///
/// Deterministic and symmetric: `similarity(a, b) == similarity(b, a)` for
/// all inputs, and `similarity(a, a)` is maximal for `a` under this metric.
pub fn similarity(a: &Item, b: &Item) -> u32 {
    let mut score = 0;

    // Genre matching.
    if a.genre == b.genre {
        score += GENRE_MATCH_WEIGHT;
    }

    // Tag matching: set-intersection cardinality. Tag lists are tiny and
    // duplicate-free (enforced at load), so a linear scan is fine.
    let shared_tags = a.tags.iter().filter(|tag| b.tags.contains(tag)).count();
    score += shared_tags as u32 * SHARED_TAG_WEIGHT;

    // Year proximity.
    if (a.year - b.year).abs() <= YEAR_PROXIMITY_WINDOW {
        score += YEAR_PROXIMITY_BONUS;
    }

    score
}

/// Ranks unrated catalog items by weighted similarity to the rated ones.
///
/// Every unrated item is scored as the sum of `similarity(item, rated) ×
/// star_value` over the user's ratings, so a score grows both with how
/// similar an item is to what the user rated and with how highly they
/// rated it. Results are sorted descending by score; ties keep catalog
/// order (stable sort). At most `top_n` entries are returned - fewer if
/// fewer unrated items exist.
///
/// Fails with [`ReelrecError::NoRatings`] when `ratings` is empty.
pub fn recommend(
    catalog: &Catalog,
    ratings: &UserRatings,
    top_n: usize,
) -> Result<Vec<Recommendation>> {
    if ratings.is_empty() {
        return Err(ReelrecError::NoRatings.into());
    }

    let mut scored: Vec<Recommendation> = catalog
        .iter()
        // Rated items are never recommendation candidates.
        .filter(|item| !ratings.is_rated(item.id))
        .map(|item| {
            let score = ratings
                .iter()
                .filter_map(|rating| catalog.get(rating.item_id).map(|rated| (rated, rating.value)))
                .map(|(rated, value)| similarity(item, rated) * u32::from(value))
                .sum();
            Recommendation {
                item_id: item.id,
                score,
            }
        })
        .collect();

    // Stable sort: equal scores keep catalog iteration order, which makes
    // the ranking reproducible run to run.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(top_n);

    debug!(
        candidates = scored.len(),
        rated = ratings.len(),
        "computed recommendations"
    );
    Ok(scored)
}

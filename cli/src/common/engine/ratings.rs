//! # ReelRec Rating Store (`common::engine::ratings`)
//!
//! File: cli/src/common/engine/ratings.rs
//!
//! ## Overview
//!
//! This module holds user ratings for the running process. A rating is an
//! integer star value in [1,5] for one catalog item; exactly one rating
//! exists per (user, item) pair and re-rating overwrites the previous
//! value. Nothing is persisted - ratings live only as long as the process.
//!
//! ## Architecture
//!
//! - `Rating`: one (item id, star value) association.
//! - `UserRatings`: a single user's ratings in **first-insertion order**.
//!   Re-rating an item updates the value in place and keeps the item's
//!   original position. The profile summary's favorite-genre tie-break is
//!   defined in terms of this order, so it is part of the contract, not an
//!   implementation detail.
//! - `RatingStore`: `UserRatings` keyed by a user/session identifier.
//!   There is deliberately no ambient or global rating state anywhere in
//!   the crate; callers own a store and pass the relevant `UserRatings`
//!   into the engine operations explicitly.
//!
//! The rating sets are tiny (bounded by catalog size), so lookups are
//! linear scans over a `Vec` rather than a map - this is what preserves
//! insertion order for free.
//!
use crate::common::engine::catalog::Catalog;
use crate::core::error::{ReelrecError, Result};
use std::collections::HashMap;

/// Minimum allowed star rating.
pub const MIN_RATING: u8 = 1;
/// Maximum allowed star rating.
pub const MAX_RATING: u8 = 5;

/// One user rating: a star value for a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    /// The rated catalog item.
    pub item_id: u32,
    /// Star value in [`MIN_RATING`]..=[`MAX_RATING`].
    pub value: u8,
}

/// A single user's ratings, in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct UserRatings {
    entries: Vec<Rating>,
}

impl UserRatings {
    /// Creates an empty rating set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rating for a catalog item.
    ///
    /// Validation happens before anything is recorded, in this order:
    /// 1. `value` must be within [1,5] (`InvalidRating` otherwise);
    /// 2. `item_id` must exist in `catalog` (`ItemNotFound` otherwise).
    ///
    /// On success, a prior rating for the same item is overwritten in
    /// place (its position in the set does not change).
    pub fn rate(&mut self, catalog: &Catalog, item_id: u32, value: u8) -> Result<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(ReelrecError::InvalidRating { value }.into());
        }
        if !catalog.contains(item_id) {
            return Err(ReelrecError::ItemNotFound { id: item_id }.into());
        }

        match self.entries.iter_mut().find(|r| r.item_id == item_id) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Rating { item_id, value }),
        }
        Ok(())
    }

    /// Returns the star value for an item, if it has been rated.
    pub fn get(&self, item_id: u32) -> Option<u8> {
        self.entries
            .iter()
            .find(|r| r.item_id == item_id)
            .map(|r| r.value)
    }

    /// Whether the given item has been rated.
    pub fn is_rated(&self, item_id: u32) -> bool {
        self.get(item_id).is_some()
    }

    /// Iterates over ratings in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Rating> {
        self.entries.iter()
    }

    /// Number of rated items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no item has been rated yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-user rating sets, keyed by a user/session identifier.
///
/// Each user's ratings are fully isolated: mutating one user's set cannot
/// affect another's. A service wrapper would put its per-key locking at
/// this boundary; the single-process CLI needs none.
#[derive(Debug, Default)]
pub struct RatingStore {
    users: HashMap<String, UserRatings>,
}

impl RatingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rating set for a user, if any ratings have been recorded.
    pub fn get(&self, user: &str) -> Option<&UserRatings> {
        self.users.get(user)
    }

    /// The mutable rating set for a user, created empty on first access.
    pub fn user_mut(&mut self, user: &str) -> &mut UserRatings {
        self.users.entry(user.to_string()).or_default()
    }
}

//! # ReelRec Recommendation Engine (`common::engine`)
//!
//! File: cli/src/common/engine/mod.rs
//!
//! ## Overview
//!
//! This module is the recommendation engine behind every ReelRec command:
//! the movie catalog, the per-user rating store, the content-based
//! similarity scorer, and the rating-profile summary. It is a pure,
//! synchronous, single-threaded computation over in-memory structures -
//! no I/O, no formatting, no hidden state. Command handlers feed it plain
//! data and render whatever comes back.
//!
//! ## Architecture
//!
//! - `catalog`: the immutable `Item`/`Catalog` data model and the built-in
//!   demo database.
//! - `ratings`: `UserRatings` (insertion-ordered star ratings with
//!   validating `rate`) and `RatingStore` (per-user isolation keyed by a
//!   session identifier - there is no global rating state).
//! - `scorer`: `similarity` and `recommend`, the weighted nearest-neighbor
//!   ranking.
//! - `profile`: `favorite_category`, the derived favorite-genre view.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::engine::{scorer, Catalog, UserRatings};
//!
//! let catalog = Catalog::builtin();
//! let mut ratings = UserRatings::new();
//! ratings.rate(&catalog, 1, 5)?;
//! let recs = scorer::recommend(&catalog, &ratings, 3)?;
//! ```
//!
/// The immutable movie catalog and its items.
pub mod catalog;
/// Derived favorite-genre summary over a rating set.
pub mod profile;
/// Per-user star ratings and the session-keyed store.
pub mod ratings;
/// The similarity metric and weighted recommendation ranking.
pub mod scorer;

// Re-export the types command handlers touch constantly.
pub use catalog::{Catalog, Item};
pub use ratings::{RatingStore, UserRatings};
pub use scorer::Recommendation;

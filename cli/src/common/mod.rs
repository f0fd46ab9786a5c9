//! # ReelRec Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for the
//! shared modules used throughout the ReelRec CLI application: the
//! recommendation engine itself and the terminal rendering helpers.
//!
//! By centralizing these under the `common::` namespace, ReelRec keeps a
//! clear separation between command-specific logic (`commands::`), core
//! infrastructure (`core::`), and the reusable domain code that every
//! command builds on.
//!
//! ## Architecture
//!
//! - **`engine`**: the recommendation engine - catalog, rating store,
//!   similarity scorer, and profile summary. Pure computation over plain
//!   data; no I/O and no formatting.
//! - **`ui`**: small terminal rendering helpers (section banners, star
//!   bars) shared by the command handlers. Per-command tables stay in
//!   their command modules.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::engine::{scorer, Catalog, UserRatings};
//! use crate::common::ui;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let catalog = Catalog::builtin();
//! let mut ratings = UserRatings::new();
//! ratings.rate(&catalog, 1, 5)?;
//! for rec in scorer::recommend(&catalog, &ratings, 3)? {
//!     println!("{} -> {}", rec.item_id, rec.score);
//! }
//! # Ok(())
//! # }
//! ```
//!
/// The recommendation engine: catalog, ratings, scorer, profile summary.
pub mod engine;
/// Terminal rendering helpers shared by command handlers.
pub mod ui;

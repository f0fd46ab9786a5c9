//! # ReelRec Movie Catalog (`common::engine::catalog`)
//!
//! File: cli/src/common/engine/catalog.rs
//!
//! ## Overview
//!
//! This module defines the movie catalog: the fixed set of items the
//! recommendation engine scores against. Each `Item` carries a genre, a
//! release year, and a set of descriptive tags - the three signals the
//! scorer combines. The catalog is loaded once at startup (built-in demo
//! data or a configured override) and is immutable for the life of the
//! process.
//!
//! ## Architecture
//!
//! - `Item`: one catalog entry. Derives `Deserialize` so configured
//!   catalogs come straight out of TOML.
//! - `Catalog`: an ordered collection of items with an id lookup.
//!   **Iteration order is load order** - the scorer relies on it as the
//!   documented tie-break for equally-scored recommendations, so the
//!   catalog stores items in a `Vec` and never reorders them.
//! - `Catalog::builtin()`: the classic 8-movie demo database used when no
//!   catalog is configured.
//!
//! Catalog shape (unique ids, non-empty titles, duplicate-free tags) is
//! enforced by the config layer at load time; the engine assumes a
//! well-formed catalog from here on.
//!
use crate::core::error::{ReelrecError, Result};
use serde::Deserialize;

/// A single movie in the catalog.
///
/// `tags` keeps its load order for display purposes; the scorer treats it
/// as a set (the config layer rejects duplicates).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Unique, stable identifier.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Single genre label.
    pub genre: String,
    /// Release year.
    pub year: i32,
    /// Descriptive tags, duplicate-free.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The fixed, ordered movie catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Creates a catalog from already-validated items, preserving their order.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The built-in 8-movie demo catalog.
    pub fn builtin() -> Self {
        let item = |id: u32, title: &str, genre: &str, year: i32, tags: [&str; 2]| Item {
            id,
            title: title.to_string(),
            genre: genre.to_string(),
            year,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };
        Self::new(vec![
            item(1, "The Matrix", "Sci-Fi", 1999, ["action", "philosophy"]),
            item(2, "Inception", "Sci-Fi", 2010, ["mind-bending", "action"]),
            item(
                3,
                "The Shawshank Redemption",
                "Drama",
                1994,
                ["hope", "friendship"],
            ),
            item(4, "Pulp Fiction", "Crime", 1994, ["non-linear", "crime"]),
            item(5, "The Dark Knight", "Action", 2008, ["superhero", "crime"]),
            item(
                6,
                "Forrest Gump",
                "Drama",
                1994,
                ["inspirational", "historical"],
            ),
            item(7, "Interstellar", "Sci-Fi", 2014, ["space", "family"]),
            item(8, "Parasite", "Thriller", 2019, ["social", "dark-comedy"]),
        ])
    }

    /// Iterates over items in load order (the recommendation tie-break order).
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Looks an item up by id.
    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Looks an item up by id, failing with `ItemNotFound` for unknown ids.
    pub fn require(&self, id: u32) -> Result<&Item> {
        self.get(id)
            .ok_or_else(|| ReelrecError::ItemNotFound { id }.into())
    }

    /// Whether the catalog contains the given id.
    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_matches_demo_database() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);

        let matrix = catalog.get(1).expect("The Matrix should be item 1");
        assert_eq!(matrix.title, "The Matrix");
        assert_eq!(matrix.genre, "Sci-Fi");
        assert_eq!(matrix.year, 1999);
        assert_eq!(matrix.tags, vec!["action", "philosophy"]);

        let parasite = catalog.get(8).expect("Parasite should be item 8");
        assert_eq!(parasite.genre, "Thriller");
        assert_eq!(parasite.year, 2019);
    }

    #[test]
    fn iteration_preserves_load_order() {
        // The scorer's tie-break depends on this order staying stable.
        let catalog = Catalog::builtin();
        let ids: Vec<u32> = catalog.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn require_fails_for_unknown_id() {
        let catalog = Catalog::builtin();
        let err = catalog.require(99).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReelrecError>(),
            Some(ReelrecError::ItemNotFound { id: 99 })
        ));
    }
}

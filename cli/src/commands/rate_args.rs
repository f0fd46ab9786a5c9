//! # ReelRec Rating Argument Parsing (`commands::rate_args`)
//!
//! File: cli/src/commands/rate_args.rs
//!
//! ## Overview
//!
//! The one-shot commands (`recommend`, `profile`) take ratings on the
//! command line as repeated `--rate ID=STARS` pairs. This module defines
//! the `RateSpec` value type clap parses those pairs into, and the helper
//! that turns a list of specs into a validated `UserRatings` set.
//!
//! ## Architecture
//!
//! Parsing is split in two deliberate stages:
//! 1. `RateSpec::from_str` - pure syntax (`ID=STARS`, both integers).
//!    Hooked into clap as a value parser so malformed pairs fail at
//!    argument-parsing time with a usage-style message.
//! 2. `collect_ratings` - semantics. Every spec goes through the engine's
//!    validating `rate` path, so range and catalog-membership failures are
//!    the same `ReelrecError` conditions the interactive shell reports.
//!
use crate::common::engine::{Catalog, UserRatings};
use crate::core::error::Result;
use std::str::FromStr;

/// One `ID=STARS` pair from the command line, syntax-checked only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSpec {
    /// Catalog item id (existence is checked later, against the catalog).
    pub item_id: u32,
    /// Star value (range is checked later, by the rating store).
    pub value: u8,
}

impl FromStr for RateSpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (id_part, value_part) = s
            .split_once('=')
            .ok_or_else(|| format!("expected ID=STARS, got '{s}'"))?;
        let item_id = id_part
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("'{}' is not a valid movie id", id_part.trim()))?;
        let value = value_part
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("'{}' is not a valid star rating", value_part.trim()))?;
        Ok(Self { item_id, value })
    }
}

/// Builds a validated rating set from parsed specs.
///
/// Each spec runs through [`UserRatings::rate`], so out-of-range values
/// and unknown ids fail with the engine's own error messages. Later specs
/// for the same id overwrite earlier ones, matching re-rating semantics.
pub fn collect_ratings(catalog: &Catalog, specs: &[RateSpec]) -> Result<UserRatings> {
    let mut ratings = UserRatings::new();
    for spec in specs {
        ratings.rate(catalog, spec.item_id, spec.value)?;
    }
    Ok(ratings)
}

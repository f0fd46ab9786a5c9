//! # ReelRec Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the ReelRec application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ReelrecError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover two domains:
//! - Recoverable engine conditions (unknown item, out-of-range rating,
//!   empty rating set, no favorite genre) - none of these is fatal; the
//!   presentation layer decides how to surface them
//! - Infrastructure errors (configuration loading and validation)
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if value < 1 || value > 5 {
//!     return Err(ReelrecError::InvalidRating { value })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! // Pattern matching on error types to recover locally
//! match recommend(&catalog, ratings, top_n) {
//!     Ok(recs) => print_recommendations(&recs),
//!     Err(e) if e.downcast_ref::<ReelrecError>().map_or(false, |re| matches!(re, ReelrecError::NoRatings)) => {
//!         println!("No ratings yet! Please rate some movies first.");
//!     },
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! The error system provides detailed error messages to the user and
//! includes context information for debugging.
//!
use thiserror::Error;

/// Custom error type for the ReelRec application.
///
/// The first four variants are the recoverable engine conditions; the
/// last covers configuration failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReelrecError {
    /// An item identifier that is not a key of the loaded catalog was
    /// passed to a rating or lookup operation.
    #[error("Movie {id} not found in the catalog.")]
    ItemNotFound { id: u32 },

    /// A rating value outside the allowed [1,5] star range.
    #[error("Rating {value} is out of range. Ratings must be between 1 and 5 stars.")]
    InvalidRating { value: u8 },

    /// `recommend` was called with an empty rating set. This is a distinct
    /// status rather than an empty result list, so the caller can prompt
    /// the user to rate something first.
    #[error("No ratings yet. Rate some movies before asking for recommendations.")]
    NoRatings,

    /// `favorite_category` found no rating at or above the 4-star
    /// threshold, so no favorite genre can be derived.
    #[error("No favorite genre yet. Rate a movie 4 stars or higher first.")]
    NoFavorite,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let not_found = ReelrecError::ItemNotFound { id: 42 };
        assert_eq!(not_found.to_string(), "Movie 42 not found in the catalog.");

        let bad_rating = ReelrecError::InvalidRating { value: 6 };
        assert_eq!(
            bad_rating.to_string(),
            "Rating 6 is out of range. Ratings must be between 1 and 5 stars."
        );

        let config_err = ReelrecError::Config("Missing setting 'top_n'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'top_n'"
        );
    }

    #[test]
    fn test_engine_variants_are_matchable_through_anyhow() {
        // The presentation layer recovers from engine conditions by
        // downcasting, so the variants must survive the anyhow boundary.
        let err: anyhow::Error = ReelrecError::NoRatings.into();
        assert!(matches!(
            err.downcast_ref::<ReelrecError>(),
            Some(ReelrecError::NoRatings)
        ));

        let err: anyhow::Error = ReelrecError::NoFavorite.into();
        assert!(matches!(
            err.downcast_ref::<ReelrecError>(),
            Some(ReelrecError::NoFavorite)
        ));
    }
}

//! # ReelRec UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Small terminal rendering helpers shared by the command handlers:
//! section banners, separators, and the star-bar rendering used by the
//! profile views. Anything specific to a single command (like the catalog
//! table) lives with that command instead.
//!
//! These helpers return `String`s rather than printing, so command
//! handlers stay in charge of where output goes and unit tests can assert
//! on the rendered text directly.
//!
use crate::common::engine::ratings::MAX_RATING;

/// Width of section banners and separators.
pub const BANNER_WIDTH: usize = 60;

/// Renders a section banner: a rule, the uppercased title, another rule.
///
/// ```text
/// ============================================================
/// RECOMMENDED FOR YOU
/// ============================================================
/// ```
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("{rule}\n{}\n{rule}", title.to_uppercase())
}

/// Renders a lighter separator rule (used around menus).
pub fn separator() -> String {
    "-".repeat(BANNER_WIDTH)
}

/// Renders a star bar for a rating value: filled stars for the rating,
/// dashes for the remainder of the 5-star scale (e.g. `***--` for 3).
///
/// Values above the scale are clamped; the rating store never produces
/// them, but rendering must not panic on arbitrary input.
pub fn star_bar(value: u8) -> String {
    let filled = usize::from(value.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "*".repeat(filled), "-".repeat(empty))
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_uppercases_and_rules() {
        let rendered = banner("Your Ratings");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(BANNER_WIDTH));
        assert_eq!(lines[1], "YOUR RATINGS");
        assert_eq!(lines[2], "=".repeat(BANNER_WIDTH));
    }

    #[test]
    fn star_bar_renders_filled_and_empty() {
        assert_eq!(star_bar(0), "-----");
        assert_eq!(star_bar(3), "***--");
        assert_eq!(star_bar(5), "*****");
        // Out-of-scale input clamps instead of panicking.
        assert_eq!(star_bar(9), "*****");
    }
}

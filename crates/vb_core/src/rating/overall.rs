//! Overall rating calculation
//!
//! Reduces the eight skill attributes to one comparable scalar:
//! a fixed weighted sum plus a balance bonus that favors well-rounded
//! players over spiky specialists with the same raw total. The weights
//! sum to exactly 1.00, so a player rated 5 everywhere has a base of 5.

use crate::models::attributes::{Attributes, ATTRIBUTE_COUNT};

/// Per-attribute weights in canonical attribute order
/// (attack, serve, set, defense, positioning, reception, consistency, block).
pub const OVERALL_WEIGHTS: [f64; ATTRIBUTE_COUNT] =
    [0.18, 0.12, 0.12, 0.17, 0.10, 0.10, 0.08, 0.13];

/// Empirical upper bound on the stdev of 8 values on a 0-5 scale.
pub const MAX_ATTRIBUTE_STDEV: f64 = 1.65;

/// Maximum balance bonus, granted at zero attribute spread.
pub const BALANCE_BONUS_CEILING: f64 = 0.2;

/// Hard cap on the final rating; keeps overalls on the attribute scale.
pub const OVERALL_CAP: f64 = 5.0;

/// Round to two decimals, the precision overalls are displayed at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Overall rating engine.
///
/// Pure and total: defined for any real input, never fails. Out-of-range
/// attributes are a boundary concern (see [`crate::rating::AttributeValidator`]);
/// only the final result is capped at 5 from above, no floor is applied.
#[derive(Debug)]
pub struct OverallScorer;

impl OverallScorer {
    /// Full rating: weighted base + balance bonus, capped and rounded.
    pub fn overall(attrs: &Attributes) -> f64 {
        let raw = Self::weighted_base(attrs) + Self::balance_bonus(attrs);
        round2(raw.min(OVERALL_CAP))
    }

    /// Weighted sum of the raw attributes.
    pub fn weighted_base(attrs: &Attributes) -> f64 {
        attrs
            .to_array()
            .iter()
            .zip(OVERALL_WEIGHTS)
            .map(|(value, weight)| value * weight)
            .sum()
    }

    /// Bonus in [0, 0.2]: full at zero spread, none at `MAX_ATTRIBUTE_STDEV`.
    pub fn balance_bonus(attrs: &Attributes) -> f64 {
        let sigma = attrs.population_stdev();
        (1.0 - (sigma / MAX_ATTRIBUTE_STDEV).min(1.0)) * BALANCE_BONUS_CEILING
    }
}

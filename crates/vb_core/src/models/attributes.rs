//! The eight-attribute skill model
//!
//! Every player (and every peer evaluation) is described by the same eight
//! skills, each on a 0-5 scale. The canonical ordering below is shared by
//! every array-based computation in the crate; changing it would silently
//! re-map weights, so it is defined exactly once here.

use serde::{Deserialize, Serialize};

/// Number of skill attributes in the model.
pub const ATTRIBUTE_COUNT: usize = 8;

/// Canonical attribute names, in the same order as [`Attributes::to_array`].
pub const ATTRIBUTE_NAMES: [&str; ATTRIBUTE_COUNT] = [
    "attack",
    "serve",
    "set",
    "defense",
    "positioning",
    "reception",
    "consistency",
    "block",
];

/// Nominal scale bounds for a single attribute.
pub const ATTRIBUTE_MIN: f64 = 0.0;
pub const ATTRIBUTE_MAX: f64 = 5.0;

/// The eight skill attributes of a player, each conceptually in [0, 5].
///
/// Values are plain `f64`s and the struct itself never enforces the scale;
/// boundary validation lives in [`crate::rating::AttributeValidator`] so
/// that the scoring functions stay total over arbitrary reals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    pub attack: f64,
    pub serve: f64,
    pub set: f64,
    pub defense: f64,
    pub positioning: f64,
    pub reception: f64,
    pub consistency: f64,
    pub block: f64,
}

impl Attributes {
    /// All eight attributes set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self::from_array([value; ATTRIBUTE_COUNT])
    }

    /// Attribute values in canonical order (see [`ATTRIBUTE_NAMES`]).
    pub fn to_array(&self) -> [f64; ATTRIBUTE_COUNT] {
        [
            self.attack,
            self.serve,
            self.set,
            self.defense,
            self.positioning,
            self.reception,
            self.consistency,
            self.block,
        ]
    }

    /// Build from values in canonical order.
    pub fn from_array(values: [f64; ATTRIBUTE_COUNT]) -> Self {
        Self {
            attack: values[0],
            serve: values[1],
            set: values[2],
            defense: values[3],
            positioning: values[4],
            reception: values[5],
            consistency: values[6],
            block: values[7],
        }
    }

    /// Iterate `(name, value)` pairs in canonical order.
    pub fn iter_named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        ATTRIBUTE_NAMES.into_iter().zip(self.to_array())
    }

    /// Arithmetic mean of the eight values.
    pub fn mean(&self) -> f64 {
        self.to_array().iter().sum::<f64>() / ATTRIBUTE_COUNT as f64
    }

    /// Population standard deviation of the eight values.
    ///
    /// Population (not sample) variance matches the balance-bonus formula,
    /// which treats the eight attributes as the whole population.
    pub fn population_stdev(&self) -> f64 {
        let values = self.to_array();
        let mean = self.mean();
        let variance = values
            .iter()
            .map(|v| {
                let d = v - mean;
                d * d
            })
            .sum::<f64>()
            / ATTRIBUTE_COUNT as f64;
        variance.sqrt()
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::uniform(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_round_trip_preserves_canonical_order() {
        let attrs = Attributes {
            attack: 1.0,
            serve: 2.0,
            set: 3.0,
            defense: 4.0,
            positioning: 5.0,
            reception: 0.5,
            consistency: 1.5,
            block: 2.5,
        };

        let values = attrs.to_array();
        assert_eq!(values[0], attrs.attack);
        assert_eq!(values[2], attrs.set);
        assert_eq!(values[7], attrs.block);
        assert_eq!(Attributes::from_array(values), attrs);
    }

    #[test]
    fn uniform_attributes_have_zero_stdev() {
        let attrs = Attributes::uniform(3.0);
        assert_eq!(attrs.mean(), 3.0);
        assert_eq!(attrs.population_stdev(), 0.0);
    }

    #[test]
    fn population_stdev_matches_hand_computation() {
        // Four 1s and four 5s: mean 3, every deviation 2, stdev exactly 2.
        let attrs = Attributes::from_array([1.0, 1.0, 1.0, 1.0, 5.0, 5.0, 5.0, 5.0]);
        assert_eq!(attrs.mean(), 3.0);
        assert!((attrs.population_stdev() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn named_iteration_covers_all_attributes() {
        let attrs = Attributes::uniform(2.0);
        let named: Vec<_> = attrs.iter_named().collect();
        assert_eq!(named.len(), ATTRIBUTE_COUNT);
        assert_eq!(named[0], ("attack", 2.0));
        assert_eq!(named[7], ("block", 2.0));
    }
}

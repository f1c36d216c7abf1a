//! Peer-evaluation aggregation
//!
//! Treats peer perception as a slow-moving correction toward group
//! consensus rather than an overwrite: for each attribute the adjustment
//! is the mean peer rating minus the current value, damped by a scaling
//! factor so a single game cannot dominate a player's long-run rating.

use crate::models::attributes::{Attributes, ATTRIBUTE_COUNT};
use crate::models::Evaluation;
use crate::rating::AttributeValidator;
use serde::{Deserialize, Serialize};

/// Production damping factor for evaluation adjustments.
pub const DEFAULT_SCALING_FACTOR: f64 = 0.1;

/// Ephemeral signed per-attribute deltas, in canonical attribute order.
/// Never persisted; only applied to a player's stored attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    pub deltas: [f64; ATTRIBUTE_COUNT],
}

impl Adjustments {
    pub const ZERO: Adjustments = Adjustments { deltas: [0.0; ATTRIBUTE_COUNT] };

    pub fn is_zero(&self) -> bool {
        self.deltas.iter().all(|d| *d == 0.0)
    }

    /// Apply the deltas to an attribute set, clamping the result onto the
    /// nominal 0-5 scale so repeated games cannot drift ratings off it.
    pub fn apply_to(&self, attrs: &Attributes) -> Attributes {
        let mut values = attrs.to_array();
        for (value, delta) in values.iter_mut().zip(self.deltas) {
            *value += delta;
        }
        AttributeValidator::clamped(&Attributes::from_array(values))
    }
}

/// Evaluation aggregation engine. Pure.
#[derive(Debug)]
pub struct EvaluationAggregator;

impl EvaluationAggregator {
    /// Signed adjustments pulling `current` toward the peer consensus.
    ///
    /// An empty evaluation set yields zero adjustments (the player is
    /// skipped, not an error).
    pub fn relative_adjustments(
        evaluations: &[Evaluation],
        current: &Attributes,
        scaling_factor: f64,
    ) -> Adjustments {
        if evaluations.is_empty() {
            return Adjustments::ZERO;
        }

        let count = evaluations.len() as f64;
        let current = current.to_array();
        let mut deltas = [0.0; ATTRIBUTE_COUNT];
        for evaluation in evaluations {
            for (delta, rating) in deltas.iter_mut().zip(evaluation.ratings.to_array()) {
                *delta += rating;
            }
        }
        for (delta, current_value) in deltas.iter_mut().zip(current) {
            let peer_mean = *delta / count;
            *delta = (peer_mean - current_value) * scaling_factor;
        }

        Adjustments { deltas }
    }
}

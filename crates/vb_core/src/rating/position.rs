//! Best-fit position inference
//!
//! Five weighted linear role scores, one per candidate position, each
//! modeling what a real volleyball role demands. The highest score wins;
//! ties go to the first maximum in the fixed evaluation order below, so
//! classification is fully deterministic.

use crate::models::attributes::Attributes;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Setter,
    Middle,
    Opposite,
    Wing,
    Libero,
}

impl Position {
    /// Fixed evaluation (and tie-break) order.
    pub const EVALUATION_ORDER: [Position; 5] = [
        Position::Setter,
        Position::Middle,
        Position::Opposite,
        Position::Wing,
        Position::Libero,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Setter => "Setter",
            Position::Middle => "Middle",
            Position::Opposite => "Opposite",
            Position::Wing => "Wing",
            Position::Libero => "Libero",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position classification engine. Pure, total, deterministic.
#[derive(Debug)]
pub struct PositionClassifier;

impl PositionClassifier {
    /// Role score for one candidate position.
    pub fn role_score(attrs: &Attributes, position: Position) -> f64 {
        match position {
            Position::Setter => {
                attrs.set * 0.5
                    + attrs.serve * 0.15
                    + attrs.consistency * 0.2
                    + attrs.reception * 0.15
            }
            Position::Middle => {
                attrs.block * 0.5 + attrs.defense * 0.3 + attrs.positioning * 0.2
            }
            Position::Opposite => {
                attrs.attack * 0.5
                    + attrs.serve * 0.2
                    + attrs.consistency * 0.2
                    + attrs.defense * 0.1
            }
            Position::Wing => {
                attrs.attack * 0.4
                    + attrs.reception * 0.4
                    + attrs.serve * 0.1
                    + attrs.consistency * 0.1
            }
            Position::Libero => {
                attrs.reception * 0.4
                    + attrs.defense * 0.3
                    + attrs.positioning * 0.2
                    + attrs.consistency * 0.1
            }
        }
    }

    /// All five role scores in evaluation order (for display/tooltips).
    pub fn role_scores(attrs: &Attributes) -> [(Position, f64); 5] {
        Position::EVALUATION_ORDER.map(|p| (p, Self::role_score(attrs, p)))
    }

    /// Best-fit position: first strict maximum in evaluation order.
    pub fn assign_position(attrs: &Attributes) -> Position {
        let mut best = Position::Setter;
        let mut best_score = f64::NEG_INFINITY;
        for (position, score) in Self::role_scores(attrs) {
            // Strictly greater: on a tie the earlier position stands.
            if score > best_score {
                best = position;
                best_score = score;
            }
        }
        best
    }
}

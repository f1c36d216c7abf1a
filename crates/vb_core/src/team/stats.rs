//! Team-level aggregate statistics
//!
//! Per-attribute means across a team's players plus an aggregate overall
//! built with the same weighted-sum formula as an individual player, so
//! team figures are directly comparable to player overalls. The team
//! balance bonus measures spread *across players within the team* (one
//! stdev per attribute, averaged), not across attributes as in the
//! individual case, and is normalized against a looser bound since
//! team-level spread is naturally larger.

use crate::models::attributes::{Attributes, ATTRIBUTE_COUNT};
use crate::models::Player;
use crate::rating::overall::{round2, BALANCE_BONUS_CEILING, OVERALL_CAP};
use crate::rating::OverallScorer;
use serde::{Deserialize, Serialize};

/// Normalization bound for the averaged per-attribute team stdev.
pub const MAX_TEAM_STDEV: f64 = 2.5;

/// Aggregate team figures for display and comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Arithmetic mean of each attribute across the team's players.
    #[serde(flatten)]
    pub means: Attributes,
    /// Team-level overall on the same 0-5 scale as player overalls.
    pub overall: f64,
}

impl TeamStats {
    /// The defined value for an empty team: all zeros.
    pub fn empty() -> Self {
        Self { means: Attributes::uniform(0.0), overall: 0.0 }
    }
}

/// Team statistics engine. Pure; an empty team is a defined edge case.
#[derive(Debug)]
pub struct TeamStatsAggregator;

impl TeamStatsAggregator {
    pub fn team_stats(players: &[Player]) -> TeamStats {
        if players.is_empty() {
            return TeamStats::empty();
        }

        let count = players.len() as f64;
        let rows: Vec<[f64; ATTRIBUTE_COUNT]> =
            players.iter().map(|p| p.attributes.to_array()).collect();

        let mut means = [0.0; ATTRIBUTE_COUNT];
        for row in &rows {
            for (mean, value) in means.iter_mut().zip(row) {
                *mean += value;
            }
        }
        for mean in means.iter_mut() {
            *mean /= count;
        }

        // Population stdev of each attribute across players, then averaged
        // into one spread scalar for the bonus.
        let mut stdev_sum = 0.0;
        for attribute in 0..ATTRIBUTE_COUNT {
            let variance = rows
                .iter()
                .map(|row| {
                    let d = row[attribute] - means[attribute];
                    d * d
                })
                .sum::<f64>()
                / count;
            stdev_sum += variance.sqrt();
        }
        let avg_stdev = stdev_sum / ATTRIBUTE_COUNT as f64;

        let means = Attributes::from_array(means);
        let base = OverallScorer::weighted_base(&means);
        let bonus = (1.0 - (avg_stdev / MAX_TEAM_STDEV).min(1.0)) * BALANCE_BONUS_CEILING;

        TeamStats { means, overall: round2((base + bonus).min(OVERALL_CAP)) }
    }
}

//! Team snapshot
//!
//! A team holds full player snapshots taken at generation time, not ids;
//! later edits to a player do not retroactively change a generated team.

use crate::models::player::Player;
use crate::team::{TeamStats, TeamStatsAggregator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    /// Sum of member overalls, the quantity the balancer equalizes.
    pub fn total_overall(&self) -> f64 {
        self.players.iter().map(Player::overall).sum()
    }

    /// Aggregate per-attribute means and team-level overall.
    pub fn stats(&self) -> TeamStats {
        TeamStatsAggregator::team_stats(&self.players)
    }
}

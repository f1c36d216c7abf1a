//! Generated team partition
//!
//! An explicit value passed around by callers rather than shared mutable
//! state: `swap` returns a new assignment, leaving the original intact,
//! so the balancer and manual corrections stay independently testable.

use crate::error::{CoreError, Result};
use crate::models::{Player, Team};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub teams: Vec<Team>,
    /// Remainder of the selected pool that no team had room for.
    pub unassigned: Vec<Player>,
}

impl TeamAssignment {
    /// Running overall total of every team, in team order.
    pub fn team_totals(&self) -> Vec<f64> {
        self.teams.iter().map(Team::total_overall).collect()
    }

    /// Largest difference between any two team totals; 0.0 under two teams.
    pub fn spread(&self) -> f64 {
        let totals = self.team_totals();
        match (
            totals.iter().cloned().reduce(f64::max),
            totals.iter().cloned().reduce(f64::min),
        ) {
            (Some(max), Some(min)) => max - min,
            _ => 0.0,
        }
    }

    /// Exchange two players between two different teams, returning the
    /// corrected assignment. The original is left untouched.
    pub fn swap(
        &self,
        team_a: usize,
        player_a: &str,
        team_b: usize,
        player_b: &str,
    ) -> Result<TeamAssignment> {
        let teams = self.teams.len();
        if team_a >= teams {
            return Err(CoreError::TeamIndexOutOfRange { index: team_a, teams });
        }
        if team_b >= teams {
            return Err(CoreError::TeamIndexOutOfRange { index: team_b, teams });
        }
        if team_a == team_b {
            return Err(CoreError::SwapWithinTeam);
        }

        let index_a = Self::member_index(&self.teams[team_a], player_a, team_a)?;
        let index_b = Self::member_index(&self.teams[team_b], player_b, team_b)?;

        let mut updated = self.clone();
        let moved_a = updated.teams[team_a].players[index_a].clone();
        updated.teams[team_a].players[index_a] =
            std::mem::replace(&mut updated.teams[team_b].players[index_b], moved_a);
        Ok(updated)
    }

    fn member_index(team: &Team, player_id: &str, team_index: usize) -> Result<usize> {
        team.players
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| CoreError::PlayerNotOnTeam {
                player_id: player_id.to_string(),
                team_index,
            })
    }
}

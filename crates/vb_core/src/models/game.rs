//! Game event
//!
//! A date-boxed event holding snapshots of the players and teams that were
//! valid when it was created, plus per-player payment records. Games are
//! owned by the store; the core creates them from a generated assignment
//! and mutates payments in place.

use crate::error::{CoreError, Result};
use crate::models::player::Player;
use crate::models::team::Team;
use crate::team::TeamAssignment;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub player_id: String,
    pub amount_paid: f64,
    pub has_paid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
    pub game_fee: f64,
    pub payments: Vec<Payment>,
}

impl Game {
    /// Create a game from a generated team assignment.
    ///
    /// Assigned and unassigned players alike are part of the event (the
    /// remainder still shows up and pays); every player starts unpaid.
    pub fn from_assignment(assignment: &TeamAssignment, game_fee: f64) -> Self {
        let players: Vec<Player> = assignment
            .teams
            .iter()
            .flat_map(|t| t.players.iter().cloned())
            .chain(assignment.unassigned.iter().cloned())
            .collect();

        let payments = players
            .iter()
            .map(|p| Payment { player_id: p.id.clone(), amount_paid: 0.0, has_paid: false })
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            date: None,
            start_time: None,
            end_time: None,
            players,
            teams: assignment.teams.clone(),
            game_fee,
            payments,
        }
    }

    /// Toggle a player's paid flag; paying records the full game fee.
    pub fn toggle_payment(&mut self, player_id: &str) -> Result<()> {
        let fee = self.game_fee;
        let payment = self
            .payments
            .iter_mut()
            .find(|p| p.player_id == player_id)
            .ok_or_else(|| CoreError::UnknownPlayer(player_id.to_string()))?;

        payment.has_paid = !payment.has_paid;
        payment.amount_paid = if payment.has_paid { fee } else { 0.0 };
        Ok(())
    }

    /// Players who have not settled the game fee yet.
    pub fn unpaid_players(&self) -> Vec<&str> {
        self.payments
            .iter()
            .filter(|p| !p.has_paid)
            .map(|p| p.player_id.as_str())
            .collect()
    }
}

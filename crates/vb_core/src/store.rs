//! Persistence collaborator interfaces
//!
//! The core only reads players and evaluations and proposes updates; real
//! storage lives behind these traits. They are synchronous on purpose
//! (the engine is synchronous); async backends adapt outside the crate.
//!
//! The uniqueness invariant for evaluations — at most one per
//! (game, evaluator, evaluated) triple — is enforced here by upserting on
//! [`Evaluation::key`], not by callers filtering their UI.

use crate::error::{CoreError, Result};
use crate::models::{Attributes, Evaluation, Player};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One staged attribute update, produced by evaluation application.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerUpdate {
    pub player_id: String,
    pub attributes: Attributes,
}

/// Read/write access to the player roster.
pub trait PlayerStore {
    fn players(&self) -> Result<Vec<Player>>;
    fn player(&self, id: &str) -> Result<Option<Player>>;
    fn update_attributes(&mut self, id: &str, attributes: &Attributes) -> Result<()>;
}

/// Read/write access to peer evaluations.
pub trait EvaluationStore {
    fn evaluations_for_game(&self, game_id: &str) -> Result<Vec<Evaluation>>;
    /// Insert, or replace an existing evaluation with the same key.
    fn record_evaluation(&mut self, evaluation: Evaluation) -> Result<()>;
    /// Remove every evaluation for a game, returning how many were cleared.
    fn clear_game_evaluations(&mut self, game_id: &str) -> Result<usize>;
}

/// Combined store with the atomic commit used by evaluation application.
pub trait ClubStore: PlayerStore + EvaluationStore {
    /// Apply every staged player update and clear the game's evaluations
    /// as one unit: either all of it happens or none of it does.
    fn commit_evaluation_application(
        &mut self,
        game_id: &str,
        updates: &[PlayerUpdate],
    ) -> Result<()>;
}

/// In-memory store for tests and simple embeddings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: BTreeMap<String, Player>,
    evaluations: Vec<Evaluation>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new player, minting an id.
    pub fn add_player(&mut self, name: impl Into<String>, attributes: Attributes) -> Player {
        let player = Player::new(Uuid::new_v4().to_string(), name, attributes);
        self.players.insert(player.id.clone(), player.clone());
        player
    }

    /// Insert a player that already carries an id (snapshots, fixtures).
    pub fn insert_player(&mut self, player: Player) {
        self.players.insert(player.id.clone(), player);
    }

    pub fn remove_player(&mut self, id: &str) -> Option<Player> {
        self.players.remove(id)
    }

    pub fn evaluation_count(&self) -> usize {
        self.evaluations.len()
    }
}

impl PlayerStore for MemoryStore {
    fn players(&self) -> Result<Vec<Player>> {
        Ok(self.players.values().cloned().collect())
    }

    fn player(&self, id: &str) -> Result<Option<Player>> {
        Ok(self.players.get(id).cloned())
    }

    fn update_attributes(&mut self, id: &str, attributes: &Attributes) -> Result<()> {
        let player = self
            .players
            .get_mut(id)
            .ok_or_else(|| CoreError::UnknownPlayer(id.to_string()))?;
        player.attributes = *attributes;
        Ok(())
    }
}

impl EvaluationStore for MemoryStore {
    fn evaluations_for_game(&self, game_id: &str) -> Result<Vec<Evaluation>> {
        Ok(self
            .evaluations
            .iter()
            .filter(|e| e.game_id == game_id)
            .cloned()
            .collect())
    }

    fn record_evaluation(&mut self, evaluation: Evaluation) -> Result<()> {
        match self.evaluations.iter_mut().find(|e| e.key() == evaluation.key()) {
            Some(existing) => *existing = evaluation,
            None => self.evaluations.push(evaluation),
        }
        Ok(())
    }

    fn clear_game_evaluations(&mut self, game_id: &str) -> Result<usize> {
        let before = self.evaluations.len();
        self.evaluations.retain(|e| e.game_id != game_id);
        Ok(before - self.evaluations.len())
    }
}

impl ClubStore for MemoryStore {
    fn commit_evaluation_application(
        &mut self,
        game_id: &str,
        updates: &[PlayerUpdate],
    ) -> Result<()> {
        // Validate the whole batch before touching anything so a bad
        // update cannot leave the roster half-applied.
        for update in updates {
            if !self.players.contains_key(&update.player_id) {
                return Err(CoreError::UnknownPlayer(update.player_id.clone()));
            }
        }

        for update in updates {
            if let Some(player) = self.players.get_mut(&update.player_id) {
                player.attributes = update.attributes;
            }
        }
        self.evaluations.retain(|e| e.game_id != game_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_player_mints_a_unique_id() {
        let mut store = MemoryStore::new();
        let a = store.add_player("Ana", Attributes::uniform(3.0));
        let b = store.add_player("Bia", Attributes::uniform(2.0));

        assert_ne!(a.id, b.id);
        assert_eq!(store.players().unwrap().len(), 2);
        assert_eq!(store.player(&a.id).unwrap().unwrap().name, "Ana");
    }

    #[test]
    fn recording_a_duplicate_key_upserts() {
        let mut store = MemoryStore::new();
        store
            .record_evaluation(Evaluation::new("g1", "p1", "p2", Attributes::uniform(2.0)))
            .unwrap();
        store
            .record_evaluation(Evaluation::new("g1", "p1", "p2", Attributes::uniform(4.0)))
            .unwrap();

        let evaluations = store.evaluations_for_game("g1").unwrap();
        assert_eq!(evaluations.len(), 1, "same triple must not duplicate");
        assert_eq!(evaluations[0].ratings, Attributes::uniform(4.0));
    }

    #[test]
    fn evaluations_are_scoped_to_their_game() {
        let mut store = MemoryStore::new();
        store
            .record_evaluation(Evaluation::new("g1", "p1", "p2", Attributes::uniform(2.0)))
            .unwrap();
        store
            .record_evaluation(Evaluation::new("g2", "p1", "p2", Attributes::uniform(3.0)))
            .unwrap();

        assert_eq!(store.evaluations_for_game("g1").unwrap().len(), 1);
        assert_eq!(store.clear_game_evaluations("g1").unwrap(), 1);
        assert_eq!(store.evaluation_count(), 1, "other games keep their evaluations");
    }

    #[test]
    fn commit_is_all_or_nothing() {
        let mut store = MemoryStore::new();
        let player = store.add_player("Ana", Attributes::uniform(3.0));
        store
            .record_evaluation(Evaluation::new("g1", "x", &player.id, Attributes::uniform(5.0)))
            .unwrap();

        let updates = vec![
            PlayerUpdate { player_id: player.id.clone(), attributes: Attributes::uniform(3.1) },
            PlayerUpdate { player_id: "ghost".into(), attributes: Attributes::uniform(1.0) },
        ];

        let err = store.commit_evaluation_application("g1", &updates).unwrap_err();
        assert!(matches!(err, CoreError::UnknownPlayer(id) if id == "ghost"));

        // Nothing moved: attributes untouched, evaluations still pending.
        let reloaded = store.player(&player.id).unwrap().unwrap();
        assert_eq!(reloaded.attributes, Attributes::uniform(3.0));
        assert_eq!(store.evaluation_count(), 1);
    }
}

//! Peer evaluation record
//!
//! One teammate's post-game rating of another, scoped to a single game.
//! At most one evaluation may exist per (game, evaluator, evaluated)
//! triple; the store enforces this by upserting on [`Evaluation::key`].

use crate::models::attributes::Attributes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub game_id: String,
    pub evaluator_id: String,
    pub evaluated_id: String,
    pub ratings: Attributes,
    pub created_at: DateTime<Utc>,
}

impl Evaluation {
    pub fn new(
        game_id: impl Into<String>,
        evaluator_id: impl Into<String>,
        evaluated_id: impl Into<String>,
        ratings: Attributes,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            evaluator_id: evaluator_id.into(),
            evaluated_id: evaluated_id.into(),
            ratings,
            created_at: Utc::now(),
        }
    }

    /// Uniqueness key: one evaluation per evaluator per teammate per game.
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.game_id, &self.evaluator_id, &self.evaluated_id)
    }
}

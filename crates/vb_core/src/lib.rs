//! # vb_core - Volleyball Club Rating & Team-Balancing Engine
//!
//! Deterministic core of a recreational volleyball club manager:
//!
//! - reduce eight skill attributes to a single comparable overall rating,
//! - infer a player's best-fit position,
//! - partition a player pool into balanced teams under a scarce-setter
//!   constraint (greedy, O(n log n), reproducible for a fixed seed),
//! - aggregate team-level stats comparable to individual overalls,
//! - nudge ratings toward post-game peer consensus, applied atomically.
//!
//! All engines are pure, synchronous functions over in-memory data.
//! Persistence lives behind the [`store`] traits; hosts that prefer a
//! string boundary can use the [`api`] JSON surface.

pub mod api;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod rating;
pub mod store;
pub mod team;

pub use api::{apply_evaluations_json, generate_teams_json};
pub use error::{BalanceError, CoreError, Result, ValidationError};
pub use evaluation::{
    apply_game_evaluations, Adjustments, EvaluationAggregator, DEFAULT_SCALING_FACTOR,
};
pub use models::{
    Attributes, Evaluation, Game, Payment, Player, Team, ATTRIBUTE_COUNT, ATTRIBUTE_MAX,
    ATTRIBUTE_MIN, ATTRIBUTE_NAMES,
};
pub use rating::{
    AttributeValidator, OverallScorer, Position, PositionClassifier, OVERALL_WEIGHTS,
};
pub use store::{ClubStore, EvaluationStore, MemoryStore, PlayerStore, PlayerUpdate};
pub use team::{
    TeamAssignment, TeamBalancer, TeamStats, TeamStatsAggregator, TieBreak, SETTER_THRESHOLD,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;

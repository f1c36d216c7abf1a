//! Peer-evaluation aggregation and atomic application.

pub mod aggregator;
pub mod apply;

pub use aggregator::{Adjustments, EvaluationAggregator, DEFAULT_SCALING_FACTOR};
pub use apply::apply_game_evaluations;

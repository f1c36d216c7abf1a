//! Team generation: greedy balancing, explicit assignments with swap
//! corrections, and team-level aggregate statistics.

pub mod assignment;
pub mod balancer;
pub mod stats;

pub use assignment::TeamAssignment;
pub use balancer::{TeamBalancer, TieBreak, SETTER_THRESHOLD};
pub use stats::{TeamStats, TeamStatsAggregator, MAX_TEAM_STDEV};

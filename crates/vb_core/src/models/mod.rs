//! Data model: attributes, players, teams, games and peer evaluations.

pub mod attributes;
pub mod evaluation;
pub mod game;
pub mod player;
pub mod team;

pub use attributes::{Attributes, ATTRIBUTE_COUNT, ATTRIBUTE_MAX, ATTRIBUTE_MIN, ATTRIBUTE_NAMES};
pub use evaluation::Evaluation;
pub use game::{Game, Payment};
pub use player::Player;
pub use team::Team;

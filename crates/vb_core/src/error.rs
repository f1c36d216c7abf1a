use thiserror::Error;

/// Failures of the team balancer, surfaced as values so callers must
/// handle them (team generation is user-initiated and the message is
/// displayed as-is).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("the club has only {available} registered players, {requested} requested")]
    InsufficientPlayers { available: usize, requested: usize },

    #[error("team size must be at least 1")]
    InvalidTeamSize,

    #[error("cannot form a single team of {team_size} from {total_players} players")]
    NoTeams { total_players: usize, team_size: usize },
}

/// Boundary validation failures for attribute sets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("attribute {attribute} is not a finite number")]
    NotFinite { attribute: &'static str },

    #[error("attribute {attribute} is {value}, outside the 0-5 scale")]
    OutOfRange { attribute: &'static str, value: f64 },
}

/// Top-level error type for store-backed operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("balancing failed: {0}")]
    Balance(#[from] BalanceError),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("unknown game: {0}")]
    UnknownGame(String),

    #[error("team index {index} out of range ({teams} teams)")]
    TeamIndexOutOfRange { index: usize, teams: usize },

    #[error("player {player_id} is not on team {team_index}")]
    PlayerNotOnTeam { player_id: String, team_index: usize },

    #[error("swap requires two different teams")]
    SwapWithinTeam,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

//! Greedy team balancing under a scarce-setter constraint
//!
//! Two-phase partition of a player pool into equal-size teams:
//!
//! 1. Setter pre-assignment: players with `set >= 4.0` are a scarce role
//!    on a recreational roster, so each team is anchored with one setter
//!    (highest overall first) before anything else happens.
//! 2. Greedy fill: the remaining pool, sorted descending by overall, is
//!    drained one player at a time onto the not-yet-full team with the
//!    lowest running overall total.
//!
//! This is a greedy approximation to multiway number partitioning, chosen
//! for O(n log n) practicality; it carries no optimality guarantee.
//!
//! Sort order can be perturbed by an injected tie-break strategy so that
//! repeated runs over the same roster produce varied but reproducible
//! line-ups (same seed, same teams).

use crate::error::BalanceError;
use crate::models::{Player, Team};
use crate::team::assignment::TeamAssignment;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// `set` rating at or above which a player counts as a setter.
pub const SETTER_THRESHOLD: f64 = 4.0;

/// Half-width of the seeded sort perturbation.
const NOISE_AMPLITUDE: f64 = 0.5;

/// How equal-overall players are ordered during balancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Deterministic: overall descending, player id ascending.
    Stable,
    /// Reproducible variety: each player's sort key is perturbed by
    /// ChaCha8 noise in (-0.5, 0.5) derived from the seed.
    Seeded(u64),
}

enum TieBreakState {
    Stable,
    Seeded(ChaCha8Rng),
}

impl TieBreak {
    fn state(self) -> TieBreakState {
        match self {
            TieBreak::Stable => TieBreakState::Stable,
            TieBreak::Seeded(seed) => TieBreakState::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

/// Player plus its precomputed overall; the sort key carries tie-break noise.
struct Rated {
    player: Player,
    overall: f64,
    key: f64,
}

impl Rated {
    fn new(player: Player) -> Self {
        let overall = player.overall();
        Self { player, overall, key: overall }
    }
}

#[derive(Default)]
struct TeamSlot {
    players: Vec<Player>,
    total_overall: f64,
}

/// Two-phase greedy team generator.
#[derive(Debug)]
pub struct TeamBalancer;

impl TeamBalancer {
    /// Partition `players` into `total_players / team_size` teams.
    ///
    /// Floor division is deliberate: when `team_size` does not divide
    /// `total_players`, the remainder is returned in
    /// [`TeamAssignment::unassigned`] instead of being silently dropped.
    pub fn generate_teams(
        players: &[Player],
        team_size: usize,
        total_players: usize,
        tie_break: TieBreak,
    ) -> Result<TeamAssignment, BalanceError> {
        if team_size == 0 {
            return Err(BalanceError::InvalidTeamSize);
        }
        if total_players < team_size {
            return Err(BalanceError::NoTeams { total_players, team_size });
        }
        if players.len() < total_players {
            return Err(BalanceError::InsufficientPlayers {
                available: players.len(),
                requested: total_players,
            });
        }

        let num_teams = total_players / team_size;
        let mut state = tie_break.state();

        let (mut setters, others): (Vec<Rated>, Vec<Rated>) = players
            .iter()
            .cloned()
            .map(Rated::new)
            .partition(|r| r.player.attributes.set >= SETTER_THRESHOLD);

        // Phase 1: one setter anchor per team while setters last.
        Self::sort_descending(&mut setters, &mut state);
        let mut setters: VecDeque<Rated> = setters.into();
        let mut teams: Vec<TeamSlot> = (0..num_teams).map(|_| TeamSlot::default()).collect();
        for slot in teams.iter_mut() {
            match setters.pop_front() {
                Some(rated) => {
                    slot.total_overall += rated.overall;
                    slot.players.push(rated.player);
                }
                None => break,
            }
        }

        // Phase 2: merge leftover setters back and greedily level totals.
        let mut remaining: Vec<Rated> = setters.into_iter().chain(others).collect();
        Self::sort_descending(&mut remaining, &mut state);
        let mut remaining: VecDeque<Rated> = remaining.into();

        while let Some(index) = Self::lowest_open_team(&teams, team_size) {
            let Some(rated) = remaining.pop_front() else { break };
            teams[index].total_overall += rated.overall;
            teams[index].players.push(rated.player);
        }

        tracing::debug!(
            teams = num_teams,
            team_size,
            unassigned = remaining.len(),
            "team generation complete"
        );

        Ok(TeamAssignment {
            teams: teams.into_iter().map(|slot| Team::new(slot.players)).collect(),
            unassigned: remaining.into_iter().map(|r| r.player).collect(),
        })
    }

    /// Sort a pool descending by key, id as the final stable criterion.
    ///
    /// Seeded noise is sampled once per player per sort (not inside the
    /// comparator) so the ordering stays a strict total order.
    fn sort_descending(pool: &mut [Rated], state: &mut TieBreakState) {
        if let TieBreakState::Seeded(rng) = state {
            for rated in pool.iter_mut() {
                rated.key = rated.overall + rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);
            }
        }
        pool.sort_by(|a, b| {
            b.key
                .total_cmp(&a.key)
                .then_with(|| a.player.id.cmp(&b.player.id))
        });
    }

    /// Index of the not-yet-full team with the lowest running total.
    fn lowest_open_team(teams: &[TeamSlot], team_size: usize) -> Option<usize> {
        teams
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.players.len() < team_size)
            .min_by(|(_, a), (_, b)| a.total_overall.total_cmp(&b.total_overall))
            .map(|(index, _)| index)
    }
}

//! Atomic application of a game's peer evaluations
//!
//! Every affected player's adjusted attributes are computed up front, then
//! the whole batch plus the evaluation clear is handed to the store as one
//! commit. A crash before the commit changes nothing; a store that honors
//! [`ClubStore::commit_evaluation_application`] changes everything at once.

use crate::error::Result;
use crate::evaluation::aggregator::EvaluationAggregator;
use crate::models::Evaluation;
use crate::store::{ClubStore, PlayerUpdate};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Aggregate, adjust and commit all evaluations recorded for `game_id`.
///
/// Returns the staged updates that were committed. Players that received
/// no evaluations are skipped; evaluations pointing at players no longer
/// in the store are dropped with a warning rather than poisoning the
/// batch (the player was deleted while evaluations were pending).
pub fn apply_game_evaluations<S: ClubStore>(
    store: &mut S,
    game_id: &str,
    scaling_factor: f64,
) -> Result<Vec<PlayerUpdate>> {
    let evaluations = store.evaluations_for_game(game_id)?;
    if evaluations.is_empty() {
        debug!(game_id, "no evaluations to apply");
        return Ok(Vec::new());
    }

    // BTreeMap keeps the batch order deterministic.
    let mut by_player: BTreeMap<String, Vec<Evaluation>> = BTreeMap::new();
    for evaluation in evaluations {
        by_player
            .entry(evaluation.evaluated_id.clone())
            .or_default()
            .push(evaluation);
    }

    let mut updates = Vec::with_capacity(by_player.len());
    for (player_id, player_evaluations) in &by_player {
        let Some(player) = store.player(player_id)? else {
            warn!(player_id = %player_id, game_id, "evaluated player no longer exists, skipping");
            continue;
        };

        let adjustments = EvaluationAggregator::relative_adjustments(
            player_evaluations,
            &player.attributes,
            scaling_factor,
        );
        updates.push(PlayerUpdate {
            player_id: player_id.clone(),
            attributes: adjustments.apply_to(&player.attributes),
        });
    }

    store.commit_evaluation_application(game_id, &updates)?;
    info!(game_id, players = updates.len(), "applied game evaluations");
    Ok(updates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::aggregator::DEFAULT_SCALING_FACTOR;
    use crate::models::{Attributes, Evaluation};
    use crate::store::{EvaluationStore, MemoryStore, PlayerStore};

    fn store_with_game() -> (MemoryStore, String, String) {
        let mut store = MemoryStore::new();
        let target = store.add_player("Ana", Attributes::uniform(3.0));
        let peer = store.add_player("Bia", Attributes::uniform(3.0));

        store
            .record_evaluation(Evaluation::new(
                "g1",
                &peer.id,
                &target.id,
                Attributes::uniform(4.0),
            ))
            .unwrap();
        (store, target.id, peer.id)
    }

    #[test]
    fn applies_damped_consensus_and_clears_the_game() {
        let (mut store, target_id, _) = store_with_game();

        let updates =
            apply_game_evaluations(&mut store, "g1", DEFAULT_SCALING_FACTOR).unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].player_id, target_id);

        // delta = (4.0 - 3.0) * 0.1 on every attribute.
        let reloaded = store.player(&target_id).unwrap().unwrap();
        for value in reloaded.attributes.to_array() {
            assert!((value - 3.1).abs() < 1e-12);
        }
        assert_eq!(store.evaluation_count(), 0, "consumed evaluations are cleared");
    }

    #[test]
    fn game_without_evaluations_is_a_no_op() {
        let (mut store, target_id, _) = store_with_game();

        let updates = apply_game_evaluations(&mut store, "other-game", 0.1).unwrap();
        assert!(updates.is_empty());

        let reloaded = store.player(&target_id).unwrap().unwrap();
        assert_eq!(reloaded.attributes, Attributes::uniform(3.0));
        assert_eq!(store.evaluation_count(), 1, "pending evaluations stay put");
    }

    #[test]
    fn deleted_player_is_skipped_without_failing_the_batch() {
        let (mut store, target_id, peer_id) = store_with_game();
        store
            .record_evaluation(Evaluation::new(
                "g1",
                &target_id,
                &peer_id,
                Attributes::uniform(2.0),
            ))
            .unwrap();
        store.remove_player(&peer_id);

        let updates = apply_game_evaluations(&mut store, "g1", 0.1).unwrap();
        assert_eq!(updates.len(), 1, "only the surviving player is updated");
        assert_eq!(updates[0].player_id, target_id);
        assert_eq!(store.evaluation_count(), 0);
    }

    #[test]
    fn multiple_evaluators_average_before_damping() {
        let (mut store, target_id, _) = store_with_game();
        let another = store.add_player("Cle", Attributes::uniform(3.0));
        store
            .record_evaluation(Evaluation::new(
                "g1",
                &another.id,
                &target_id,
                Attributes::uniform(2.0),
            ))
            .unwrap();

        apply_game_evaluations(&mut store, "g1", 0.1).unwrap();

        // Peer mean (4 + 2) / 2 = 3.0 equals current, so no movement.
        let reloaded = store.player(&target_id).unwrap().unwrap();
        assert_eq!(reloaded.attributes, Attributes::uniform(3.0));
    }
}

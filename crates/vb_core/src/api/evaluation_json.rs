//! JSON API for applying a game's peer evaluations
//!
//! The caller supplies the affected players and the game's evaluation set;
//! the response carries the updated players and how many evaluations were
//! consumed. The application itself is the atomic routine from
//! [`crate::evaluation::apply`], run against an in-memory staging store.

use crate::api::{check_schema_version, err_code, error_codes};
use crate::evaluation::{apply_game_evaluations, DEFAULT_SCALING_FACTOR};
use crate::models::{Evaluation, Player};
use crate::store::{EvaluationStore, MemoryStore, PlayerStore};
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use tracing::info;

fn default_scaling_factor() -> f64 {
    DEFAULT_SCALING_FACTOR
}

#[derive(Debug, Deserialize)]
pub struct ApplyEvaluationsRequest {
    pub schema_version: u8,
    pub game_id: String,
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: f64,
    pub players: Vec<Player>,
    pub evaluations: Vec<Evaluation>,
}

#[derive(Debug, Serialize)]
pub struct ApplyEvaluationsResponse {
    pub schema_version: u8,
    /// Players whose attributes changed, with their adjusted values.
    pub updated_players: Vec<Player>,
    pub cleared_evaluations: usize,
}

/// Apply all of a game's evaluations from a JSON request.
pub fn apply_evaluations_json(request_json: &str) -> Result<String, String> {
    let request: ApplyEvaluationsRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    let mut store = MemoryStore::new();
    for player in request.players {
        store.insert_player(player);
    }
    let staged = request.evaluations.len();
    for evaluation in request.evaluations {
        // Upsert keeps duplicate (game, evaluator, evaluated) triples out.
        store
            .record_evaluation(evaluation)
            .map_err(|e| err_code(error_codes::INTERNAL, e))?;
    }
    let recorded = store.evaluation_count();

    let updates = apply_game_evaluations(&mut store, &request.game_id, request.scaling_factor)
        .map_err(|e| err_code(error_codes::APPLY_FAILED, e))?;
    let cleared = recorded - store.evaluation_count();

    let mut updated_players = Vec::with_capacity(updates.len());
    for update in &updates {
        match store
            .player(&update.player_id)
            .map_err(|e| err_code(error_codes::INTERNAL, e))?
        {
            Some(player) => updated_players.push(player),
            None => {
                return Err(err_code(
                    error_codes::INTERNAL,
                    format!("committed update for missing player {}", update.player_id),
                ))
            }
        }
    }

    info!(
        game_id = %request.game_id,
        staged,
        cleared,
        updated = updated_players.len(),
        "applied evaluations via json api"
    );

    serde_json::to_string(&ApplyEvaluationsResponse {
        schema_version: SCHEMA_VERSION,
        updated_players,
        cleared_evaluations: cleared,
    })
    .map_err(|e| err_code(error_codes::INTERNAL, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attributes;
    use chrono::Utc;
    use serde_json::json;

    fn request() -> serde_json::Value {
        let target = Player::new("p1", "Ana", Attributes::uniform(3.0));
        let peer = Player::new("p2", "Bia", Attributes::uniform(3.0));
        let evaluation = Evaluation {
            game_id: "g1".into(),
            evaluator_id: "p2".into(),
            evaluated_id: "p1".into(),
            ratings: Attributes::uniform(4.0),
            created_at: Utc::now(),
        };
        json!({
            "schema_version": 1,
            "game_id": "g1",
            "players": [target, peer],
            "evaluations": [evaluation],
        })
    }

    #[test]
    fn applies_default_damping_and_reports_updates() {
        let response = apply_evaluations_json(&request().to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["cleared_evaluations"], 1);
        let updated = parsed["updated_players"].as_array().unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0]["id"], "p1");
        // (4.0 - 3.0) * default 0.1
        assert!((updated[0]["attack"].as_f64().unwrap() - 3.1).abs() < 1e-9);
    }

    #[test]
    fn explicit_zero_scaling_factor_changes_nothing() {
        let mut req = request();
        req["scaling_factor"] = json!(0.0);

        let response = apply_evaluations_json(&req.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();
        let updated = parsed["updated_players"].as_array().unwrap();
        assert_eq!(updated[0]["attack"].as_f64().unwrap(), 3.0);
    }

    #[test]
    fn duplicate_triples_collapse_before_application() {
        let mut req = request();
        let mut duplicate = req["evaluations"][0].clone();
        duplicate["ratings"] = json!(Attributes::uniform(2.0));
        // Same (game, evaluator, evaluated) triple rated twice: the later
        // submission wins, it does not average with the earlier one.
        req["evaluations"].as_array_mut().unwrap().push(duplicate);

        let response = apply_evaluations_json(&req.to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["cleared_evaluations"], 1);
        let updated = parsed["updated_players"].as_array().unwrap();
        // (2.0 - 3.0) * 0.1 = -0.1
        assert!((updated[0]["attack"].as_f64().unwrap() - 2.9).abs() < 1e-9);
    }

    #[test]
    fn malformed_request_is_an_invalid_request_error() {
        let err = apply_evaluations_json("{not json").unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_REQUEST), "got: {}", err);
    }
}

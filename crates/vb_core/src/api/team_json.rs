//! JSON API for team generation
//!
//! String-in, string-out surface for embedding the balancer behind a UI
//! layer without linking against the crate's types. Errors come back as
//! code-prefixed messages suitable for display.

use crate::api::{check_schema_version, err_code, error_codes};
use crate::models::Player;
use crate::rating::AttributeValidator;
use crate::team::{TeamAssignment, TeamBalancer, TeamStats, TieBreak};
use crate::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub struct GenerateTeamsRequest {
    pub schema_version: u8,
    /// Fixed seed for reproducible line-ups; omitted means stable ordering.
    #[serde(default)]
    pub seed: Option<u64>,
    pub team_size: usize,
    pub total_players: usize,
    pub players: Vec<Player>,
}

#[derive(Debug, Serialize)]
pub struct TeamPayload {
    pub players: Vec<Player>,
    pub stats: TeamStats,
}

#[derive(Debug, Serialize)]
pub struct GenerateTeamsResponse {
    pub schema_version: u8,
    pub teams: Vec<TeamPayload>,
    pub unassigned: Vec<Player>,
}

impl GenerateTeamsResponse {
    fn from_assignment(assignment: TeamAssignment) -> Self {
        let teams = assignment
            .teams
            .into_iter()
            .map(|team| TeamPayload { stats: team.stats(), players: team.players })
            .collect();
        Self { schema_version: SCHEMA_VERSION, teams, unassigned: assignment.unassigned }
    }
}

/// Generate balanced teams from a JSON request.
pub fn generate_teams_json(request_json: &str) -> Result<String, String> {
    let request: GenerateTeamsRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    for player in &request.players {
        if let Err(e) = AttributeValidator::validate(&player.attributes) {
            warn!(player_id = %player.id, error = %e, "rejecting invalid roster entry");
            return Err(err_code(
                error_codes::INVALID_ATTRIBUTES,
                format!("player {}: {}", player.id, e),
            ));
        }
    }

    let tie_break = match request.seed {
        Some(seed) => TieBreak::Seeded(seed),
        None => TieBreak::Stable,
    };

    let assignment = TeamBalancer::generate_teams(
        &request.players,
        request.team_size,
        request.total_players,
        tie_break,
    )
    .map_err(|e| err_code(error_codes::BALANCING_FAILED, e))?;

    info!(
        teams = assignment.teams.len(),
        unassigned = assignment.unassigned.len(),
        "generated teams via json api"
    );

    serde_json::to_string(&GenerateTeamsResponse::from_assignment(assignment))
        .map_err(|e| err_code(error_codes::INTERNAL, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attributes;
    use serde_json::json;

    fn player_json(id: &str, set: f64) -> serde_json::Value {
        let mut attrs = Attributes::uniform(3.0);
        attrs.set = set;
        serde_json::to_value(Player::new(id, id.to_uppercase(), attrs)).unwrap()
    }

    fn request(players: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "schema_version": 1,
            "seed": 7,
            "team_size": 2,
            "total_players": 4,
            "players": players,
        })
    }

    #[test]
    fn generates_teams_and_reports_stats() {
        let players = vec![
            player_json("p1", 5.0),
            player_json("p2", 4.0),
            player_json("p3", 2.0),
            player_json("p4", 1.0),
        ];
        let response = generate_teams_json(&request(players).to_string()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&response).unwrap();

        assert_eq!(parsed["schema_version"], 1);
        assert_eq!(parsed["teams"].as_array().unwrap().len(), 2);
        assert!(parsed["teams"][0]["stats"]["overall"].is_number());
        assert!(parsed["unassigned"].as_array().unwrap().is_empty());
    }

    #[test]
    fn schema_version_mismatch_is_rejected() {
        let mut req = request(vec![player_json("p1", 3.0)]);
        req["schema_version"] = json!(99);

        let err = generate_teams_json(&req.to_string()).unwrap_err();
        assert!(err.starts_with(error_codes::SCHEMA_VERSION_MISMATCH), "got: {}", err);
    }

    #[test]
    fn insufficient_players_surfaces_the_balancer_message() {
        let players = vec![player_json("p1", 3.0), player_json("p2", 3.0)];
        let err = generate_teams_json(&request(players).to_string()).unwrap_err();
        assert!(err.starts_with(error_codes::BALANCING_FAILED), "got: {}", err);
        assert!(err.contains("2 registered players"), "got: {}", err);
    }

    #[test]
    fn out_of_range_attributes_are_rejected_at_the_boundary() {
        let mut bad = player_json("p1", 3.0);
        bad["attack"] = json!(9.0);
        let players =
            vec![bad, player_json("p2", 3.0), player_json("p3", 3.0), player_json("p4", 3.0)];

        let err = generate_teams_json(&request(players).to_string()).unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_ATTRIBUTES), "got: {}", err);
        assert!(err.contains("p1"), "got: {}", err);
    }
}

//! JSON request/response surface
//!
//! String-based entry points for host applications: requests carry a
//! `schema_version`, failures come back as `CODE: message` strings.

pub mod evaluation_json;
pub mod team_json;

pub use evaluation_json::{
    apply_evaluations_json, ApplyEvaluationsRequest, ApplyEvaluationsResponse,
};
pub use team_json::{generate_teams_json, GenerateTeamsRequest, GenerateTeamsResponse};

use crate::SCHEMA_VERSION;

/// Error code prefixes used by the JSON surface.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const SCHEMA_VERSION_MISMATCH: &str = "SCHEMA_VERSION_MISMATCH";
    pub const INVALID_ATTRIBUTES: &str = "INVALID_ATTRIBUTES";
    pub const BALANCING_FAILED: &str = "BALANCING_FAILED";
    pub const APPLY_FAILED: &str = "APPLY_FAILED";
    pub const INTERNAL: &str = "INTERNAL";
}

pub(crate) fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

pub(crate) fn check_schema_version(version: u8) -> Result<(), String> {
    if version == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(err_code(
            error_codes::SCHEMA_VERSION_MISMATCH,
            format!("expected {SCHEMA_VERSION}, got {version}"),
        ))
    }
}

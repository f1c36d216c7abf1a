//! Player entity
//!
//! The core never creates or destroys players on its own; they arrive from
//! the player store and leave as proposed attribute updates. The eight
//! skill attributes are flattened into the player document so the JSON
//! shape matches the stored record (`{"id": .., "name": .., "attack": ..}`).

use crate::models::attributes::Attributes;
use crate::rating::{OverallScorer, Position, PositionClassifier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, attributes: Attributes) -> Self {
        Self { id: id.into(), name: name.into(), image_url: None, attributes }
    }

    /// Single scalar rating, see [`OverallScorer`].
    pub fn overall(&self) -> f64 {
        OverallScorer::overall(&self.attributes)
    }

    /// Best-fit role, see [`PositionClassifier`].
    pub fn position(&self) -> Position {
        PositionClassifier::assign_position(&self.attributes)
    }

    /// Setter scarcity threshold used by the balancer's pre-assignment.
    pub fn is_setter_candidate(&self) -> bool {
        self.attributes.set >= crate::team::SETTER_THRESHOLD
    }
}

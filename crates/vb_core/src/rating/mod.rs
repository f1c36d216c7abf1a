//! Rating system: overall scoring, position inference and boundary
//! validation over the eight-attribute model.

pub mod overall;
pub mod position;
pub mod validation;

pub use overall::{
    OverallScorer, BALANCE_BONUS_CEILING, MAX_ATTRIBUTE_STDEV, OVERALL_CAP, OVERALL_WEIGHTS,
};
pub use position::{Position, PositionClassifier};
pub use validation::AttributeValidator;

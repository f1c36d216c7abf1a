//! Boundary validation for attribute sets
//!
//! The scoring functions are total over arbitrary reals; data hygiene
//! happens here, at the edge where attributes enter the core. Callers can
//! either reject bad input (`validate`) or repair it (`clamped`).

use crate::error::ValidationError;
use crate::models::attributes::{Attributes, ATTRIBUTE_MAX, ATTRIBUTE_MIN};

/// Attribute boundary validator.
#[derive(Debug)]
pub struct AttributeValidator;

impl AttributeValidator {
    /// Reject non-finite or out-of-range attribute values.
    pub fn validate(attrs: &Attributes) -> Result<(), ValidationError> {
        for (attribute, value) in attrs.iter_named() {
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { attribute });
            }
            if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
                return Err(ValidationError::OutOfRange { attribute, value });
            }
        }
        Ok(())
    }

    /// Clamp every attribute onto the nominal 0-5 scale.
    pub fn clamped(attrs: &Attributes) -> Attributes {
        Attributes::from_array(attrs.to_array().map(|v| v.clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX)))
    }
}

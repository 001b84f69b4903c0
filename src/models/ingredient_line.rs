//! Ingredient line model
//!
//! One free-text ingredient row of a recipe, as authored by the editing
//! surface. Validated once at construction, read-only afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected at the boundary, before a line enters the pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ingredient name is empty")]
    EmptyName,

    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(String),
}

/// A single recipe ingredient line: name, quantity, unit, optional notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    raw_name: String,
    quantity: f64,
    raw_unit: String,
    notes: Option<String>,
}

impl IngredientLine {
    /// Build a validated line. The engine assumes lines constructed here
    /// are well-formed and does not re-validate.
    pub fn new(
        raw_name: impl Into<String>,
        quantity: f64,
        raw_unit: impl Into<String>,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let raw_name = raw_name.into();
        if raw_name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !(quantity > 0.0) || !quantity.is_finite() {
            return Err(ValidationError::NonPositiveQuantity(quantity.to_string()));
        }
        Ok(Self {
            raw_name,
            quantity,
            raw_unit: raw_unit.into(),
            notes,
        })
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn raw_unit(&self) -> &str {
        &self.raw_unit
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_line() {
        let line = IngredientLine::new("olive oil", 2.0, "tbsp", None).unwrap();
        assert_eq!(line.raw_name(), "olive oil");
        assert_eq!(line.quantity(), 2.0);
        assert_eq!(line.raw_unit(), "tbsp");
        assert!(line.notes().is_none());
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = IngredientLine::new("   ", 1.0, "g", None).unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        assert!(IngredientLine::new("flour", 0.0, "g", None).is_err());
        assert!(IngredientLine::new("flour", -3.0, "g", None).is_err());
        assert!(IngredientLine::new("flour", f64::NAN, "g", None).is_err());
    }
}

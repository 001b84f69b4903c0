//! Recipe-level computation results
//!
//! Ephemeral values returned to the caller; persisted (if at all) by an
//! external collaborator.

use serde::{Deserialize, Serialize};

use super::{IngredientLine, NutrientVector};

/// Which resolution tier produced an ingredient's vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    Cache,
    External,
    Estimate,
}

impl ResolutionSource {
    /// True for the tiers backed by real data rather than heuristics.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionSource::Cache | ResolutionSource::External)
    }
}

/// Per-ingredient outcome: the line, its vector scaled to the line's
/// actual quantity, and the tier that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub line: IngredientLine,
    pub vector_at_quantity: NutrientVector,
    pub source: ResolutionSource,
}

/// Whole-recipe confidence, from the fraction of lines resolved by
/// non-estimated tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// High when at least 90% of lines resolved via cache or external
    /// lookup, medium at 60%, low otherwise.
    pub fn from_resolved_fraction(fraction: f64) -> Self {
        if fraction >= 0.9 {
            Confidence::High
        } else if fraction >= 0.6 {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// The engine's answer for one recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeNutritionResult {
    pub per_serving: NutrientVector,
    pub total: NutrientVector,
    pub breakdown: Vec<ResolutionResult>,
    pub confidence: Confidence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bands() {
        assert_eq!(Confidence::from_resolved_fraction(1.0), Confidence::High);
        assert_eq!(Confidence::from_resolved_fraction(0.9), Confidence::High);
        assert_eq!(Confidence::from_resolved_fraction(0.89), Confidence::Medium);
        assert_eq!(Confidence::from_resolved_fraction(0.6), Confidence::Medium);
        assert_eq!(Confidence::from_resolved_fraction(0.59), Confidence::Low);
        assert_eq!(Confidence::from_resolved_fraction(0.0), Confidence::Low);
    }

    #[test]
    fn test_confidence_ordering() {
        // Ord is derived Low < Medium < High so monotonicity checks can
        // compare tiers directly.
        assert!(Confidence::Low < Confidence::Medium);
        assert!(Confidence::Medium < Confidence::High);
    }

    #[test]
    fn test_source_is_resolved() {
        assert!(ResolutionSource::Cache.is_resolved());
        assert!(ResolutionSource::External.is_resolved());
        assert!(!ResolutionSource::Estimate.is_resolved());
    }
}

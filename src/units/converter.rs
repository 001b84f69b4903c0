//! Unit conversion functions
//!
//! Converts quantities onto the canonical base units (grams,
//! millilitres) and combines quantities within one dimension. Pure
//! functions, no side effects.

use thiserror::Error;

use super::descriptors::{find_unit, Dimension, UnitDescriptor, ML_PER_LITER};

/// Recoverable conversion error. The caller decides how to treat the
/// items that could not be combined.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("cannot combine '{left}' with '{right}': incompatible dimensions")]
    Incompatible { left: String, right: String },
}

/// A quantity expressed on its dimension's base unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedQuantity {
    /// Amount in grams (weight), millilitres (volume), or unchanged (count)
    pub amount: f64,
    pub dimension: Dimension,
    /// False when the unit string matched no descriptor and the amount
    /// passed through untouched — the signal to fall back to the weight
    /// estimator.
    pub was_converted: bool,
}

/// A combined quantity reported in a human-readable unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedQuantity {
    pub quantity: f64,
    pub unit: String,
}

/// Convert a quantity to its dimension's base unit.
///
/// Matching is case-insensitive and alias-tolerant (tbsp, tablespoon,
/// tablespoons all hit one descriptor). Unknown units pass through with
/// dimension Count and `was_converted = false`.
pub fn to_base_unit(quantity: f64, unit: &str) -> ConvertedQuantity {
    match find_unit(unit) {
        Some(d) => ConvertedQuantity {
            amount: quantity * d.factor_to_base,
            dimension: d.dimension,
            was_converted: true,
        },
        None => ConvertedQuantity {
            amount: quantity,
            dimension: Dimension::Count,
            was_converted: false,
        },
    }
}

/// Combine two quantities into one, when their dimensions allow it.
///
/// Both quantities are converted to base units and summed; the sum is
/// reported in the more human-readable of the two input units: grams are
/// preferred over milligrams (and over kilograms — 500 g + 1 kg reads as
/// 1500 g), litres are preferred over millilitre-scale units only once
/// the sum reaches a litre.
pub fn combine(q1: f64, u1: &str, q2: f64, u2: &str) -> Result<CombinedQuantity, UnitError> {
    let incompatible = || UnitError::Incompatible {
        left: u1.trim().to_string(),
        right: u2.trim().to_string(),
    };

    let (d1, d2) = match (find_unit(u1), find_unit(u2)) {
        (Some(d1), Some(d2)) => (d1, d2),
        // Two unrecognized units only combine when they are literally the
        // same word; nothing else is known to share a dimension.
        (None, None) => {
            let w1 = u1.trim().to_lowercase();
            let w2 = u2.trim().to_lowercase();
            if w1 == w2 {
                return Ok(CombinedQuantity {
                    quantity: q1 + q2,
                    unit: w1,
                });
            }
            return Err(incompatible());
        }
        _ => return Err(incompatible()),
    };

    if d1.dimension != d2.dimension {
        return Err(incompatible());
    }

    let total_base = q1 * d1.factor_to_base + q2 * d2.factor_to_base;

    let report = match d1.dimension {
        Dimension::Weight => choose_weight_unit(d1, d2),
        Dimension::Volume => choose_volume_unit(d1, d2, total_base),
        Dimension::Count => d1,
    };

    Ok(CombinedQuantity {
        quantity: total_base / report.factor_to_base,
        unit: report.canonical.to_string(),
    })
}

/// Readability ranking for weight units: grams first, milligrams last.
fn choose_weight_unit(
    a: &'static UnitDescriptor,
    b: &'static UnitDescriptor,
) -> &'static UnitDescriptor {
    const RANK: &[&str] = &["g", "kg", "oz", "lb", "mg"];
    let rank = |d: &UnitDescriptor| {
        RANK.iter()
            .position(|c| *c == d.canonical)
            .unwrap_or(RANK.len())
    };
    if rank(a) <= rank(b) {
        a
    } else {
        b
    }
}

/// Millilitre-scale units read better below a litre; litres win once the
/// sum crosses that threshold and a litre-scale input is present.
fn choose_volume_unit(
    a: &'static UnitDescriptor,
    b: &'static UnitDescriptor,
    total_ml: f64,
) -> &'static UnitDescriptor {
    if total_ml >= ML_PER_LITER {
        if let Some(litre) = [a, b].into_iter().find(|d| d.canonical == "l") {
            return litre;
        }
    }
    if a.canonical == "ml" {
        return a;
    }
    if b.canonical == "ml" {
        return b;
    }
    // Neither side is ml: the finer-grained unit is the more readable.
    if a.factor_to_base <= b.factor_to_base {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base_unit_weight() {
        let c = to_base_unit(2.0, "kg");
        assert_eq!(c.amount, 2000.0);
        assert_eq!(c.dimension, Dimension::Weight);
        assert!(c.was_converted);
    }

    #[test]
    fn test_to_base_unit_volume_aliases() {
        let c = to_base_unit(2.0, "Tablespoons");
        assert!((c.amount - 29.5736).abs() < 0.01);
        assert_eq!(c.dimension, Dimension::Volume);
        assert!(c.was_converted);
    }

    #[test]
    fn test_to_base_unit_unknown_passes_through() {
        let c = to_base_unit(3.0, "scoop");
        assert_eq!(c.amount, 3.0);
        assert_eq!(c.dimension, Dimension::Count);
        assert!(!c.was_converted);
    }

    #[test]
    fn test_combine_grams_and_kilograms_reports_grams() {
        let c = combine(500.0, "g", 1.0, "kg").unwrap();
        assert_eq!(c.quantity, 1500.0);
        assert_eq!(c.unit, "g");
    }

    #[test]
    fn test_combine_rejects_mismatched_dimensions() {
        let err = combine(500.0, "g", 250.0, "ml").unwrap_err();
        assert!(matches!(err, UnitError::Incompatible { .. }));
    }

    #[test]
    fn test_combine_prefers_grams_over_milligrams() {
        let c = combine(500.0, "mg", 2.0, "g").unwrap();
        assert!((c.quantity - 2.5).abs() < 1e-9);
        assert_eq!(c.unit, "g");
    }

    #[test]
    fn test_combine_upgrades_to_litres_past_threshold() {
        let c = combine(1.0, "l", 500.0, "ml").unwrap();
        assert!((c.quantity - 1.5).abs() < 1e-9);
        assert_eq!(c.unit, "l");

        // Below a litre the ml-scale unit wins.
        let c = combine(0.25, "l", 100.0, "ml").unwrap();
        assert!((c.quantity - 350.0).abs() < 1e-9);
        assert_eq!(c.unit, "ml");
    }

    #[test]
    fn test_combine_volume_in_kitchen_units() {
        let c = combine(1.0, "cup", 2.0, "tbsp").unwrap();
        // Reported in tbsp, the finer of the two.
        assert_eq!(c.unit, "tbsp");
        assert!((c.quantity - 18.0).abs() < 0.01);
    }

    #[test]
    fn test_combine_count_units() {
        let c = combine(2.0, "whole", 3.0, "pieces").unwrap();
        assert_eq!(c.quantity, 5.0);
        assert_eq!(c.unit, "each");
    }

    #[test]
    fn test_combine_identical_unknown_units() {
        let c = combine(1.0, "scoop", 2.0, "Scoop").unwrap();
        assert_eq!(c.quantity, 3.0);
        assert_eq!(c.unit, "scoop");
    }

    #[test]
    fn test_combine_distinct_unknown_units_rejected() {
        assert!(combine(1.0, "scoop", 1.0, "handful").is_err());
        assert!(combine(1.0, "scoop", 1.0, "g").is_err());
    }
}

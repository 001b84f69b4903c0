//! Unit metadata and conversion constants
//!
//! Canonical unit descriptors with alias-tolerant, case-insensitive
//! lookup. Each unit belongs to exactly one dimension.

use serde::{Deserialize, Serialize};

/// The conversion family a unit belongs to. Quantities are never
/// combined across dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Mass units, base unit grams
    Weight,
    /// Volume units, base unit millilitres
    Volume,
    /// Discrete units (whole, piece, each) and anything unrecognized
    Count,
}

impl Dimension {
    /// The canonical base unit string for this dimension
    pub fn base_unit(&self) -> &'static str {
        match self {
            Dimension::Weight => "g",
            Dimension::Volume => "ml",
            Dimension::Count => "each",
        }
    }
}

/// Metadata for one canonical unit: aliases, dimension, and the factor
/// to the dimension's base unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitDescriptor {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub dimension: Dimension,
    pub factor_to_base: f64,
}

// ============================================================================
// Volume Conversion Constants (to millilitres)
// ============================================================================

pub const ML_PER_TSP: f64 = 4.92892;
pub const ML_PER_TBSP: f64 = 14.7868;
pub const ML_PER_FL_OZ: f64 = 29.5735;
pub const ML_PER_CUP: f64 = 236.588;
pub const ML_PER_PINT: f64 = 473.176;
pub const ML_PER_QUART: f64 = 946.353;
pub const ML_PER_LITER: f64 = 1000.0;
pub const ML_PER_GALLON: f64 = 3785.41;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

pub const G_PER_MG: f64 = 0.001;
pub const G_PER_KG: f64 = 1000.0;
pub const G_PER_OZ: f64 = 28.3495;
pub const G_PER_LB: f64 = 453.592;

/// The static unit registry. One descriptor per unit, one dimension per
/// descriptor.
pub const UNIT_TABLE: &[UnitDescriptor] = &[
    // Weight
    UnitDescriptor {
        canonical: "g",
        aliases: &["g", "gram", "grams", "gramme", "grammes"],
        dimension: Dimension::Weight,
        factor_to_base: 1.0,
    },
    UnitDescriptor {
        canonical: "mg",
        aliases: &["mg", "milligram", "milligrams"],
        dimension: Dimension::Weight,
        factor_to_base: G_PER_MG,
    },
    UnitDescriptor {
        canonical: "kg",
        aliases: &["kg", "kilogram", "kilograms", "kilo", "kilos"],
        dimension: Dimension::Weight,
        factor_to_base: G_PER_KG,
    },
    UnitDescriptor {
        canonical: "oz",
        aliases: &["oz", "ounce", "ounces"],
        dimension: Dimension::Weight,
        factor_to_base: G_PER_OZ,
    },
    UnitDescriptor {
        canonical: "lb",
        aliases: &["lb", "lbs", "pound", "pounds"],
        dimension: Dimension::Weight,
        factor_to_base: G_PER_LB,
    },
    // Volume
    UnitDescriptor {
        canonical: "ml",
        aliases: &["ml", "milliliter", "milliliters", "millilitre", "millilitres"],
        dimension: Dimension::Volume,
        factor_to_base: 1.0,
    },
    UnitDescriptor {
        canonical: "l",
        aliases: &["l", "liter", "liters", "litre", "litres"],
        dimension: Dimension::Volume,
        factor_to_base: ML_PER_LITER,
    },
    UnitDescriptor {
        canonical: "tsp",
        aliases: &["tsp", "teaspoon", "teaspoons"],
        dimension: Dimension::Volume,
        factor_to_base: ML_PER_TSP,
    },
    UnitDescriptor {
        canonical: "tbsp",
        aliases: &["tbsp", "tbs", "tablespoon", "tablespoons"],
        dimension: Dimension::Volume,
        factor_to_base: ML_PER_TBSP,
    },
    UnitDescriptor {
        canonical: "fl oz",
        aliases: &["fl oz", "floz", "fl. oz", "fluid ounce", "fluid ounces"],
        dimension: Dimension::Volume,
        factor_to_base: ML_PER_FL_OZ,
    },
    UnitDescriptor {
        canonical: "cup",
        aliases: &["cup", "cups"],
        dimension: Dimension::Volume,
        factor_to_base: ML_PER_CUP,
    },
    UnitDescriptor {
        canonical: "pint",
        aliases: &["pint", "pints"],
        dimension: Dimension::Volume,
        factor_to_base: ML_PER_PINT,
    },
    UnitDescriptor {
        canonical: "quart",
        aliases: &["quart", "quarts"],
        dimension: Dimension::Volume,
        factor_to_base: ML_PER_QUART,
    },
    UnitDescriptor {
        canonical: "gallon",
        aliases: &["gallon", "gallons"],
        dimension: Dimension::Volume,
        factor_to_base: ML_PER_GALLON,
    },
    // Count
    UnitDescriptor {
        canonical: "each",
        aliases: &[
            "each", "whole", "piece", "pieces", "item", "items", "unit", "units", "count",
        ],
        dimension: Dimension::Count,
        factor_to_base: 1.0,
    },
];

/// Look up a unit descriptor by any alias, case-insensitively.
pub fn find_unit(unit: &str) -> Option<&'static UnitDescriptor> {
    let needle = unit.trim().to_lowercase();
    UNIT_TABLE
        .iter()
        .find(|d| d.aliases.iter().any(|a| *a == needle))
}

/// True when the unit is one of the generic count words that route
/// through the weight estimator (whole, piece, each, item, unit).
pub fn is_generic_count_unit(unit: &str) -> bool {
    matches!(
        unit.trim().to_lowercase().as_str(),
        "whole" | "piece" | "pieces" | "each" | "item" | "items" | "unit" | "units"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_lookup_is_case_insensitive() {
        let d = find_unit("TBSP").unwrap();
        assert_eq!(d.canonical, "tbsp");
        assert_eq!(d.dimension, Dimension::Volume);

        let d = find_unit("Tablespoons").unwrap();
        assert_eq!(d.canonical, "tbsp");

        let d = find_unit(" Grams ").unwrap();
        assert_eq!(d.canonical, "g");
    }

    #[test]
    fn test_unknown_unit_is_none() {
        assert!(find_unit("scoop").is_none());
        assert!(find_unit("handful").is_none());
    }

    #[test]
    fn test_one_dimension_per_alias() {
        // No alias appears under two descriptors.
        let mut seen = std::collections::HashSet::new();
        for d in UNIT_TABLE {
            for alias in d.aliases {
                assert!(seen.insert(*alias), "duplicate alias {alias}");
            }
        }
    }

    #[test]
    fn test_generic_count_units() {
        for u in ["whole", "piece", "pieces", "each", "item", "items", "unit", "units"] {
            assert!(is_generic_count_unit(u), "{u} should be generic count");
        }
        assert!(!is_generic_count_unit("g"));
        assert!(!is_generic_count_unit("slice"));
    }
}

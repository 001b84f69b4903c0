//! Shared nutrient profile structure
//!
//! Used by the cache, the external lookup, the estimator, and the
//! recipe-level results. Values are per 100 g unless explicitly scaled.

use serde::{Deserialize, Serialize};

/// A nutrient profile. Per 100 g of edible mass unless scaled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientVector {
    pub calories_kcal: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub sugar_g: f64,
    pub sodium_mg: f64,
}

impl NutrientVector {
    /// Create a NutrientVector with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn new(
        calories_kcal: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        fiber_g: f64,
        sugar_g: f64,
        sodium_mg: f64,
    ) -> Self {
        Self {
            calories_kcal,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g,
            sugar_g,
            sodium_mg,
        }
    }

    /// Scale all fields by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories_kcal: self.calories_kcal * multiplier,
            protein_g: self.protein_g * multiplier,
            carbs_g: self.carbs_g * multiplier,
            fat_g: self.fat_g * multiplier,
            fiber_g: self.fiber_g * multiplier,
            sugar_g: self.sugar_g * multiplier,
            sodium_mg: self.sodium_mg * multiplier,
        }
    }

    /// Add another vector to this one
    pub fn add(&self, other: &NutrientVector) -> Self {
        Self {
            calories_kcal: self.calories_kcal + other.calories_kcal,
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fat_g: self.fat_g + other.fat_g,
            fiber_g: self.fiber_g + other.fiber_g,
            sugar_g: self.sugar_g + other.sugar_g,
            sodium_mg: self.sodium_mg + other.sodium_mg,
        }
    }

    /// Clamp every field to zero or above.
    ///
    /// External sources occasionally report small negative values for
    /// trace nutrients; the data model requires all fields >= 0.
    pub fn clamped(&self) -> Self {
        Self {
            calories_kcal: self.calories_kcal.max(0.0),
            protein_g: self.protein_g.max(0.0),
            carbs_g: self.carbs_g.max(0.0),
            fat_g: self.fat_g.max(0.0),
            fiber_g: self.fiber_g.max(0.0),
            sugar_g: self.sugar_g.max(0.0),
            sodium_mg: self.sodium_mg.max(0.0),
        }
    }

    /// Round for per-serving presentation: calories and sodium to whole
    /// numbers, the remaining fields to one decimal place.
    ///
    /// Downstream consumers depend on this exact shape; keep it stable.
    pub fn rounded_for_serving(&self) -> Self {
        fn one_decimal(v: f64) -> f64 {
            (v * 10.0).round() / 10.0
        }
        Self {
            calories_kcal: self.calories_kcal.round(),
            protein_g: one_decimal(self.protein_g),
            carbs_g: one_decimal(self.carbs_g),
            fat_g: one_decimal(self.fat_g),
            fiber_g: one_decimal(self.fiber_g),
            sugar_g: one_decimal(self.sugar_g),
            sodium_mg: self.sodium_mg.round(),
        }
    }
}

impl std::ops::Add for NutrientVector {
    type Output = NutrientVector;

    fn add(self, other: NutrientVector) -> NutrientVector {
        NutrientVector::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutrientVector {
    type Output = NutrientVector;

    fn mul(self, multiplier: f64) -> NutrientVector {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutrientVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientVector::zero(), |acc, n| acc + n)
    }
}

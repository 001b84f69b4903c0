//! Data models
//!
//! Rust structs shared across the resolution pipeline.

mod cache_entry;
mod ingredient_line;
mod nutrient_vector;
mod result;

pub use cache_entry::{CacheEntry, Provenance};
pub use ingredient_line::{IngredientLine, ValidationError};
pub use nutrient_vector::NutrientVector;
pub use result::{Confidence, RecipeNutritionResult, ResolutionResult, ResolutionSource};

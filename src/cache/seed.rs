//! Curated seed dataset
//!
//! Pantry staples with per-100g vectors, embedded as JSON and loaded
//! into a cache store with provenance Manual. Keys are already
//! normalized names. Data sourced from USDA FoodData Central
//! (public domain, CC0).

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{CacheEntry, NutrientVector, Provenance};

use super::store::{CacheResult, CacheStore};

/// Embedded JSON data file.
static SEED_JSON: &str = include_str!("seed_data.json");

#[derive(Deserialize)]
struct SeedFile {
    ingredients: HashMap<String, NutrientVector>,
}

/// Load the curated dataset into a store. Returns the number of entries
/// written. Existing entries under the same keys are overwritten.
pub fn seed_curated(store: &dyn CacheStore) -> CacheResult<usize> {
    let file: SeedFile =
        serde_json::from_str(SEED_JSON).expect("seed_data.json should be valid JSON");

    let mut written = 0;
    for (name, per_100g) in file.ingredients {
        store.put(CacheEntry::new(name, per_100g, None, Provenance::Manual))?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStore;
    use crate::naming::NameNormalizer;

    #[test]
    fn test_seed_loads_into_store() {
        let store = MemoryStore::new();
        let count = seed_curated(&store).unwrap();
        assert!(count >= 20);

        let oil = store.get("olive oil").unwrap().unwrap();
        assert_eq!(oil.per_100g.calories_kcal, 884.0);
        assert_eq!(oil.provenance, Provenance::Manual);
    }

    #[test]
    fn test_seed_keys_are_normalized_fixed_points() {
        let file: SeedFile = serde_json::from_str(SEED_JSON).unwrap();
        let normalizer = NameNormalizer::default();
        for key in file.ingredients.keys() {
            assert_eq!(
                normalizer.normalize(key),
                *key,
                "seed key {key:?} is not a normalized fixed point"
            );
        }
    }
}

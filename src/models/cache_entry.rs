//! Cached nutrition entry
//!
//! A per-100g nutrient vector keyed by normalized ingredient name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NutrientVector;

/// Where a cache entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Written back from a successful external lookup
    External,
    /// Loaded from the curated seed dataset or entered by hand
    Manual,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::External => "external",
            Provenance::Manual => "manual",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "external" => Provenance::External,
            _ => Provenance::Manual,
        }
    }
}

/// A cached per-100g nutrient vector for one normalized name.
///
/// Entries are upserted last-write-wins and never deleted by the engine;
/// eviction belongs to the storage collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub normalized_name: String,
    pub per_100g: NutrientVector,
    /// Identifier of the record in the external database, when known
    pub source_id: Option<String>,
    pub provenance: Provenance,
    pub last_updated: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(
        normalized_name: impl Into<String>,
        per_100g: NutrientVector,
        source_id: Option<String>,
        provenance: Provenance,
    ) -> Self {
        Self {
            normalized_name: normalized_name.into(),
            per_100g: per_100g.clamped(),
            source_id,
            provenance,
            last_updated: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provenance_round_trip() {
        assert_eq!(Provenance::from_str("external"), Provenance::External);
        assert_eq!(Provenance::from_str("EXTERNAL"), Provenance::External);
        assert_eq!(Provenance::from_str("manual"), Provenance::Manual);
        assert_eq!(Provenance::from_str("anything-else"), Provenance::Manual);
        assert_eq!(Provenance::External.as_str(), "external");
    }

    #[test]
    fn test_new_clamps_vector() {
        let entry = CacheEntry::new(
            "butter",
            NutrientVector::new(717.0, 0.9, 0.1, 81.1, 0.0, -0.2, 11.0),
            None,
            Provenance::Manual,
        );
        assert_eq!(entry.per_100g.sugar_g, 0.0);
        assert_eq!(entry.per_100g.fat_g, 81.1);
    }
}

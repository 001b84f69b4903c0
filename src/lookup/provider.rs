//! External nutrition provider seam
//!
//! Trait boundary for third-party nutrition databases, enabling fake
//! providers in tests. Transport failures stay inside the orchestrator;
//! they are converted to a miss, never surfaced to callers.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::NutrientVector;

/// External lookup failure. Always recovered by the orchestrator.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("missing API credentials")]
    MissingCredentials,
}

/// A successful provider match.
#[derive(Debug, Clone)]
pub struct ProviderHit {
    /// Nutrients scaled to the requested gram amount
    pub vector_at_quantity: NutrientVector,
    /// Identifier of the matched record in the external database
    pub source_id: String,
}

/// A queryable external nutrition database.
#[async_trait]
pub trait NutritionProvider: Send + Sync {
    /// Look up nutrients for `grams` of the named ingredient.
    /// `Ok(None)` is the semantic no-match; errors are transport-level.
    async fn lookup(&self, name: &str, grams: f64) -> Result<Option<ProviderHit>, LookupError>;
}

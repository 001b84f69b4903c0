//! Recipe nutrition orchestrator
//!
//! Resolves each ingredient line through the tiered pipeline
//! (cache, external lookup, estimator), accumulates totals, and
//! produces the per-serving result with a confidence tier. The compute
//! function is total: its worst case is a low-confidence, fully
//! estimated result.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::{timeout, Instant};
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::estimator::CategoryEstimator;
use crate::lookup::NutritionProvider;
use crate::models::{
    CacheEntry, Confidence, IngredientLine, NutrientVector, Provenance, RecipeNutritionResult,
    ResolutionResult, ResolutionSource,
};
use crate::naming::NameNormalizer;
use crate::units::{to_base_unit, Dimension};
use crate::weights::WeightEstimator;

/// Tunables for one engine instance.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Budget for a single external lookup call
    pub lookup_timeout: Duration,
    /// Overall budget for one compute call. On expiry, ingredients not
    /// yet resolved are forced through the estimator.
    pub deadline: Option<Duration>,
    /// Mass applied when a count line has no weight-table match
    pub default_item_grams: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            lookup_timeout: Duration::from_secs(5),
            deadline: None,
            default_item_grams: 100.0,
        }
    }
}

/// The ingredient resolution and nutrition computation engine.
#[derive(Clone)]
pub struct NutritionEngine {
    normalizer: Arc<NameNormalizer>,
    weights: Arc<WeightEstimator>,
    estimator: Arc<CategoryEstimator>,
    cache: Arc<dyn CacheStore>,
    provider: Option<Arc<dyn NutritionProvider>>,
    options: EngineOptions,
}

impl NutritionEngine {
    /// Engine over the given cache store, with embedded vocabulary and
    /// profile tables and no external provider.
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self {
            normalizer: Arc::new(NameNormalizer::default()),
            weights: Arc::new(WeightEstimator::embedded()),
            estimator: Arc::new(CategoryEstimator::embedded()),
            cache,
            provider: None,
            options: EngineOptions::default(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn NutritionProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn with_options(mut self, options: EngineOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_normalizer(mut self, normalizer: NameNormalizer) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    pub fn with_weights(mut self, weights: WeightEstimator) -> Self {
        self.weights = Arc::new(weights);
        self
    }

    pub fn with_estimator(mut self, estimator: CategoryEstimator) -> Self {
        self.estimator = Arc::new(estimator);
        self
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }

    /// Compute the recipe's nutrient profile.
    ///
    /// Lines resolve concurrently; results are re-assembled in input
    /// order so identical inputs yield identical output. With external
    /// lookup disabled the computation is fully deterministic.
    pub async fn compute_recipe_nutrition(
        &self,
        lines: &[IngredientLine],
        servings: f64,
        use_external_lookup: bool,
    ) -> RecipeNutritionResult {
        if lines.is_empty() {
            // No ingredients: all-zero vectors, low confidence by
            // convention.
            return RecipeNutritionResult {
                per_serving: NutrientVector::zero(),
                total: NutrientVector::zero(),
                breakdown: Vec::new(),
                confidence: Confidence::Low,
            };
        }

        let started = Instant::now();
        let mut slots: Vec<Option<ResolutionResult>> = vec![None; lines.len()];

        let mut join_set = JoinSet::new();
        for (idx, line) in lines.iter().cloned().enumerate() {
            let engine = self.clone();
            join_set.spawn(async move {
                let result = engine.resolve_line(&line, use_external_lookup).await;
                (idx, result)
            });
        }

        loop {
            let next = match self.options.deadline {
                Some(deadline) => {
                    let remaining = deadline.saturating_sub(started.elapsed());
                    match timeout(remaining, join_set.join_next()).await {
                        Ok(next) => next,
                        Err(_) => {
                            warn!("deadline expired, estimating unresolved ingredients");
                            break;
                        }
                    }
                }
                None => join_set.join_next().await,
            };
            match next {
                Some(Ok((idx, result))) => slots[idx] = Some(result),
                Some(Err(e)) => warn!(error = %e, "resolution task failed"),
                None => break,
            }
        }
        join_set.abort_all();

        let mut breakdown = Vec::with_capacity(lines.len());
        for (idx, line) in lines.iter().enumerate() {
            let result = slots[idx]
                .take()
                .unwrap_or_else(|| self.estimate_line(line));
            breakdown.push(result);
        }

        let total: NutrientVector = breakdown
            .iter()
            .map(|r| r.vector_at_quantity.clone())
            .sum();

        let servings = if servings.is_finite() && servings > 0.0 {
            servings
        } else {
            1.0
        };
        let per_serving = total.scale(1.0 / servings).rounded_for_serving();

        let resolved = breakdown.iter().filter(|r| r.source.is_resolved()).count();
        let confidence =
            Confidence::from_resolved_fraction(resolved as f64 / breakdown.len() as f64);

        RecipeNutritionResult {
            per_serving,
            total,
            breakdown,
            confidence,
        }
    }

    /// Resolve one line: cache, then external lookup, then estimator.
    /// First success wins.
    async fn resolve_line(&self, line: &IngredientLine, use_external: bool) -> ResolutionResult {
        let key = self.normalizer.normalize(line.raw_name());
        let grams = self.grams_for_line(&key, line);

        match self.cache.get(&key) {
            Ok(Some(entry)) => {
                debug!(key = %key, "cache hit");
                return ResolutionResult {
                    line: line.clone(),
                    vector_at_quantity: entry.per_100g.scale(grams / 100.0),
                    source: ResolutionSource::Cache,
                };
            }
            Ok(None) => {}
            // A broken cache degrades to the next tier, never fails the
            // computation.
            Err(e) => warn!(error = %e, key = %key, "cache read failed"),
        }

        if use_external {
            if let Some(provider) = &self.provider {
                match timeout(self.options.lookup_timeout, provider.lookup(&key, grams)).await {
                    Ok(Ok(Some(hit))) => {
                        if grams > 0.0 {
                            let per_100g = hit.vector_at_quantity.scale(100.0 / grams);
                            let entry = CacheEntry::new(
                                key.clone(),
                                per_100g,
                                Some(hit.source_id.clone()),
                                Provenance::External,
                            );
                            if let Err(e) = self.cache.put(entry) {
                                warn!(error = %e, key = %key, "cache write failed");
                            }
                        }
                        return ResolutionResult {
                            line: line.clone(),
                            vector_at_quantity: hit.vector_at_quantity.clamped(),
                            source: ResolutionSource::External,
                        };
                    }
                    Ok(Ok(None)) => debug!(key = %key, "no external match"),
                    Ok(Err(e)) => warn!(error = %e, key = %key, "external lookup failed"),
                    Err(_) => warn!(key = %key, "external lookup timed out"),
                }
            }
        }

        self.estimate_with_key(line, &key, grams)
    }

    fn estimate_line(&self, line: &IngredientLine) -> ResolutionResult {
        let key = self.normalizer.normalize(line.raw_name());
        let grams = self.grams_for_line(&key, line);
        self.estimate_with_key(line, &key, grams)
    }

    fn estimate_with_key(&self, line: &IngredientLine, key: &str, grams: f64) -> ResolutionResult {
        ResolutionResult {
            line: line.clone(),
            vector_at_quantity: self.estimator.estimate(key, grams),
            source: ResolutionSource::Estimate,
        }
    }

    /// Actual mass of the line. Weight converts directly; volume is
    /// taken at 1 g/ml; count units (and unrecognized units) go through
    /// the weight estimator with a default item mass as the backstop.
    fn grams_for_line(&self, key: &str, line: &IngredientLine) -> f64 {
        let converted = to_base_unit(line.quantity(), line.raw_unit());
        match converted.dimension {
            Dimension::Weight => converted.amount,
            Dimension::Volume => converted.amount,
            Dimension::Count => {
                let per_item = self
                    .weights
                    .estimate_grams(key)
                    .unwrap_or(self.options.default_item_grams);
                line.quantity() * per_item
            }
        }
    }
}

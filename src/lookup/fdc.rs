//! USDA FoodData Central client
//!
//! Queries the FDC search API and maps its nutrient list onto the
//! engine's vector. Search results report nutrients per 100 g; the
//! client scales them to the requested amount.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::NutrientVector;

use super::provider::{LookupError, NutritionProvider, ProviderHit};

const DEFAULT_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const PAGE_SIZE: u32 = 5;

// FDC nutrient numbers
const NUTRIENT_ENERGY_KCAL: i64 = 1008;
const NUTRIENT_PROTEIN: i64 = 1003;
const NUTRIENT_CARBS: i64 = 1005;
const NUTRIENT_FAT: i64 = 1004;
const NUTRIENT_FIBER: i64 = 1079;
const NUTRIENT_SUGARS: i64 = 2000;
const NUTRIENT_SODIUM: i64 = 1093;

/// HTTP client for the FoodData Central search endpoint.
pub struct FdcClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl FdcClient {
    /// Build a client with a bounded request timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LookupError> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LookupError::MissingCredentials);
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl NutritionProvider for FdcClient {
    async fn lookup(&self, name: &str, grams: f64) -> Result<Option<ProviderHit>, LookupError> {
        if name.trim().is_empty() {
            return Ok(None);
        }

        let url = format!("{}/foods/search", self.base_url);
        let page_size = PAGE_SIZE.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", name),
                ("pageSize", page_size.as_str()),
                ("dataType", "Foundation,SR Legacy"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Decode(e.to_string()))?;

        // First result carrying an energy value wins; the API already
        // ranks by relevance.
        for food in &parsed.foods {
            if let Some(per_100g) = vector_from_food(food) {
                tracing::debug!(query = name, fdc_id = food.fdc_id, "fdc match");
                return Ok(Some(ProviderHit {
                    vector_at_quantity: per_100g.scale(grams / 100.0).clamped(),
                    source_id: format!("fdc:{}", food.fdc_id),
                }));
            }
        }

        Ok(None)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<FoodHit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodHit {
    fdc_id: i64,
    #[serde(default)]
    food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodNutrient {
    #[serde(default)]
    nutrient_id: Option<i64>,
    #[serde(default)]
    value: Option<f64>,
}

/// Map a food's nutrient list onto a per-100g vector. None when the
/// record has no energy value at all.
fn vector_from_food(food: &FoodHit) -> Option<NutrientVector> {
    let pick = |id: i64| -> f64 {
        food.food_nutrients
            .iter()
            .find(|n| n.nutrient_id == Some(id))
            .and_then(|n| n.value)
            .unwrap_or(0.0)
    };

    food.food_nutrients
        .iter()
        .find(|n| n.nutrient_id == Some(NUTRIENT_ENERGY_KCAL) && n.value.is_some())?;

    Some(
        NutrientVector {
            calories_kcal: pick(NUTRIENT_ENERGY_KCAL),
            protein_g: pick(NUTRIENT_PROTEIN),
            carbs_g: pick(NUTRIENT_CARBS),
            fat_g: pick(NUTRIENT_FAT),
            fiber_g: pick(NUTRIENT_FIBER),
            sugar_g: pick(NUTRIENT_SUGARS),
            sodium_mg: pick(NUTRIENT_SODIUM),
        }
        .clamped(),
    )
}

//! nutricore
//!
//! Reads a recipe computation request as JSON on stdin, writes the
//! nutrition result as JSON on stdout. Logs go to stderr so stdout
//! stays machine-readable.

use std::io::Read;
use std::sync::Arc;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use nutricore::build_info;
use nutricore::cache::{seed_curated, CacheStore, MemoryStore, SqliteStore};
use nutricore::config::EngineConfig;
use nutricore::engine::NutritionEngine;
use nutricore::lookup::FdcClient;
use nutricore::models::IngredientLine;

/// One ingredient row of the request.
#[derive(Debug, Deserialize)]
struct RequestLine {
    name: String,
    quantity: f64,
    #[serde(default)]
    unit: String,
    notes: Option<String>,
}

/// The stdin request shape.
#[derive(Debug, Deserialize)]
struct ComputeRequest {
    lines: Vec<RequestLine>,
    #[serde(default = "default_servings")]
    servings: f64,
    #[serde(default)]
    use_external_lookup: bool,
}

fn default_servings() -> f64 {
    1.0
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging to stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutricore=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = EngineConfig::from_env();

    // Cache store: durable SQLite when a path is configured, otherwise
    // in-memory for this run.
    let cache: Arc<dyn CacheStore> = match &config.cache_path {
        Some(path) => {
            eprintln!("Cache database: {}", path.display());
            let store = SqliteStore::open(path)?;
            // Seed the curated dataset on first open only; later runs
            // may hold fresher external entries under the same keys.
            if store.get("flour")?.is_none() {
                let count = seed_curated(&store)?;
                eprintln!("Seeded {} curated entries", count);
            }
            Arc::new(store)
        }
        None => {
            let store = MemoryStore::new();
            let count = seed_curated(&store)?;
            eprintln!("Seeded {} curated entries (in-memory cache)", count);
            Arc::new(store)
        }
    };

    let mut engine = NutritionEngine::new(cache).with_options(config.engine_options());
    if let Some(api_key) = &config.fdc_api_key {
        let client = FdcClient::with_timeout(api_key.clone(), config.lookup_timeout)?;
        engine = engine.with_provider(Arc::new(client));
    }

    // Read the whole request from stdin
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request: ComputeRequest = serde_json::from_str(&input)?;

    // Validate at the boundary; the engine assumes well-formed lines
    let mut lines = Vec::with_capacity(request.lines.len());
    for raw in request.lines {
        let line = IngredientLine::new(raw.name, raw.quantity, raw.unit, raw.notes)?;
        lines.push(line);
    }

    let use_external = request.use_external_lookup && config.fdc_api_key.is_some();
    let result = engine
        .compute_recipe_nutrition(&lines, request.servings, use_external)
        .await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

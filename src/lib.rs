//! nutricore
//!
//! Ingredient resolution and nutrition computation engine: free-text
//! ingredient lines in, a per-serving nutrient profile with a
//! confidence rating out, via a tiered lookup pipeline (cache, curated
//! seed data, external nutrition database, heuristic estimate).

pub mod build_info;
pub mod cache;
pub mod config;
pub mod engine;
pub mod estimator;
pub mod lookup;
pub mod models;
pub mod naming;
pub mod units;
pub mod weights;

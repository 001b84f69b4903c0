//! Engine configuration
//!
//! Environment-driven settings for the binary and embedding callers.
//! The engine itself takes these as plain values; nothing here is
//! ambient global state.

use std::path::PathBuf;
use std::time::Duration;

use crate::engine::EngineOptions;

/// Configuration resolved from the environment.
///
/// - `NUTRICORE_CACHE_PATH`: SQLite cache file; unset means in-memory
/// - `NUTRICORE_FDC_API_KEY`: FoodData Central API key; unset disables
///   the external lookup tier
/// - `NUTRICORE_LOOKUP_TIMEOUT_SECS`: per-call lookup budget
/// - `NUTRICORE_DEADLINE_SECS`: overall budget per compute call
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub cache_path: Option<PathBuf>,
    pub fdc_api_key: Option<String>,
    pub lookup_timeout: Duration,
    pub deadline: Option<Duration>,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let cache_path = std::env::var("NUTRICORE_CACHE_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let fdc_api_key = std::env::var("NUTRICORE_FDC_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let lookup_timeout = parse_secs("NUTRICORE_LOOKUP_TIMEOUT_SECS")
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(5));

        let deadline = parse_secs("NUTRICORE_DEADLINE_SECS").map(Duration::from_secs);

        Self {
            cache_path,
            fdc_api_key,
            lookup_timeout,
            deadline,
        }
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            lookup_timeout: self.lookup_timeout,
            deadline: self.deadline,
            ..EngineOptions::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_path: None,
            fdc_api_key: None,
            lookup_timeout: Duration::from_secs(5),
            deadline: None,
        }
    }
}

fn parse_secs(var: &str) -> Option<u64> {
    std::env::var(var).ok().and_then(|v| v.trim().parse().ok())
}

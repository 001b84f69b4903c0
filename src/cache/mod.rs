//! Nutrition cache module
//!
//! Get/put storage for per-100g vectors keyed by normalized name, with
//! in-memory and SQLite-backed stores plus the curated seed loader.

pub mod seed;
pub mod sqlite;
pub mod store;

pub use seed::seed_curated;
pub use sqlite::SqliteStore;
pub use store::{CacheError, CacheResult, CacheStore, MemoryStore};

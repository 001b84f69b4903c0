//! Cache store trait and in-memory implementation
//!
//! Key/value store of per-100g nutrient vectors keyed by normalized
//! name. Only get/put semantics; eviction belongs to the storage
//! collaborator.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use crate::models::CacheEntry;

/// Cache storage error types
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    Connection(#[from] r2d2::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("cache lock poisoned")]
    Poisoned,
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Storage seam for cached nutrition entries.
///
/// Writes must be idempotent last-write-wins upserts, atomic per key:
/// two concurrent writers for the same normalized name may race, but a
/// reader never observes a partially written entry. No ordering is
/// guaranteed across distinct keys.
pub trait CacheStore: Send + Sync {
    fn get(&self, normalized_name: &str) -> CacheResult<Option<CacheEntry>>;
    fn put(&self, entry: CacheEntry) -> CacheResult<()>;
}

/// Process-local cache store backed by a locked map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, normalized_name: &str) -> CacheResult<Option<CacheEntry>> {
        let map = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(map.get(normalized_name).cloned())
    }

    fn put(&self, entry: CacheEntry) -> CacheResult<()> {
        let mut map = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        map.insert(entry.normalized_name.clone(), entry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutrientVector, Provenance};

    fn entry(name: &str, calories: f64) -> CacheEntry {
        CacheEntry::new(
            name,
            NutrientVector::new(calories, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            None,
            Provenance::Manual,
        )
    }

    #[test]
    fn test_get_miss_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("flour").unwrap().is_none());
    }

    #[test]
    fn test_put_then_get() {
        let store = MemoryStore::new();
        store.put(entry("flour", 364.0)).unwrap();
        let got = store.get("flour").unwrap().unwrap();
        assert_eq!(got.per_100g.calories_kcal, 364.0);
    }

    #[test]
    fn test_put_is_last_write_wins() {
        let store = MemoryStore::new();
        store.put(entry("flour", 100.0)).unwrap();
        store.put(entry("flour", 364.0)).unwrap();
        assert_eq!(store.len(), 1);
        let got = store.get("flour").unwrap().unwrap();
        assert_eq!(got.per_100g.calories_kcal, 364.0);
    }

    #[test]
    fn test_concurrent_writers_same_key() {
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                store.put(entry("flour", 100.0 + i as f64)).unwrap();
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        // Whichever write landed last, the entry is whole.
        let got = store.get("flour").unwrap().unwrap();
        assert!(got.per_100g.calories_kcal >= 100.0);
        assert_eq!(store.len(), 1);
    }
}

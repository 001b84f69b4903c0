//! SQLite-backed cache store
//!
//! Persists cache entries between process runs. Connection pooling and
//! migration handling; the upsert keeps writes idempotent and atomic
//! per key.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Connection, OpenFlags, Row};

use crate::models::{CacheEntry, NutrientVector, Provenance};

use super::store::{CacheResult, CacheStore};

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// Durable cache store on a pooled SQLite database.
#[derive(Clone)]
pub struct SqliteStore {
    pool: Arc<Pool<SqliteConnectionManager>>,
}

impl SqliteStore {
    /// Open (or create) the cache database and run migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> CacheResult<Self> {
        let manager = SqliteConnectionManager::file(path)
            .with_flags(
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_URI,
            )
            .with_init(|conn| {
                conn.execute_batch(
                    "PRAGMA journal_mode = WAL;
                     PRAGMA synchronous = NORMAL;
                     PRAGMA temp_store = MEMORY;",
                )?;
                Ok(())
            });

        let pool = Pool::builder().max_size(10).build(manager)?;
        let store = Self {
            pool: Arc::new(pool),
        };
        store.with_conn(|conn| run_migrations(conn))?;
        Ok(store)
    }

    fn get_conn(&self) -> CacheResult<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    fn with_conn<F, T>(&self, f: F) -> CacheResult<T>
    where
        F: FnOnce(&Connection) -> CacheResult<T>,
    {
        let conn = self.get_conn()?;
        f(&conn)
    }

    fn from_row(row: &Row) -> rusqlite::Result<CacheEntry> {
        let last_updated: String = row.get("last_updated")?;
        Ok(CacheEntry {
            normalized_name: row.get("normalized_name")?,
            per_100g: NutrientVector {
                calories_kcal: row.get("calories_kcal")?,
                protein_g: row.get("protein_g")?,
                carbs_g: row.get("carbs_g")?,
                fat_g: row.get("fat_g")?,
                fiber_g: row.get("fiber_g")?,
                sugar_g: row.get("sugar_g")?,
                sodium_mg: row.get("sodium_mg")?,
            },
            source_id: row.get("source_id")?,
            provenance: Provenance::from_str(row.get::<_, String>("provenance")?.as_str()),
            last_updated: DateTime::parse_from_rfc3339(&last_updated)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}

impl CacheStore for SqliteStore {
    fn get(&self, normalized_name: &str) -> CacheResult<Option<CacheEntry>> {
        self.with_conn(|conn| {
            let mut stmt =
                conn.prepare("SELECT * FROM nutrition_cache WHERE normalized_name = ?1")?;
            let result = stmt.query_row([normalized_name], Self::from_row);
            match result {
                Ok(entry) => Ok(Some(entry)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn put(&self, entry: CacheEntry) -> CacheResult<()> {
        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO nutrition_cache (
                    normalized_name, calories_kcal, protein_g, carbs_g, fat_g,
                    fiber_g, sugar_g, sodium_mg, source_id, provenance, last_updated
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                ON CONFLICT(normalized_name) DO UPDATE SET
                    calories_kcal = excluded.calories_kcal,
                    protein_g = excluded.protein_g,
                    carbs_g = excluded.carbs_g,
                    fat_g = excluded.fat_g,
                    fiber_g = excluded.fiber_g,
                    sugar_g = excluded.sugar_g,
                    sodium_mg = excluded.sodium_mg,
                    source_id = excluded.source_id,
                    provenance = excluded.provenance,
                    last_updated = excluded.last_updated
                "#,
                params![
                    entry.normalized_name,
                    entry.per_100g.calories_kcal,
                    entry.per_100g.protein_g,
                    entry.per_100g.carbs_g,
                    entry.per_100g.fat_g,
                    entry.per_100g.fiber_g,
                    entry.per_100g.sugar_g,
                    entry.per_100g.sodium_mg,
                    entry.source_id,
                    entry.provenance.as_str(),
                    entry.last_updated.to_rfc3339(),
                ],
            )?;
            Ok(())
        })
    }
}

/// Run all migrations to bring the database up to the current schema
/// version.
fn run_migrations(conn: &Connection) -> CacheResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current_version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    if current_version < SCHEMA_VERSION {
        migrate_v1(conn)?;
        conn.execute("INSERT INTO schema_migrations (version) VALUES (1)", [])?;
    }

    Ok(())
}

/// Migration v1: the cache table
fn migrate_v1(conn: &Connection) -> CacheResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE nutrition_cache (
            normalized_name TEXT PRIMARY KEY,

            -- Nutrient vector, per 100g
            calories_kcal REAL NOT NULL DEFAULT 0,
            protein_g REAL NOT NULL DEFAULT 0,
            carbs_g REAL NOT NULL DEFAULT 0,
            fat_g REAL NOT NULL DEFAULT 0,
            fiber_g REAL NOT NULL DEFAULT 0,
            sugar_g REAL NOT NULL DEFAULT 0,
            sodium_mg REAL NOT NULL DEFAULT 0,

            source_id TEXT,
            provenance TEXT CHECK(provenance IN ('external', 'manual')) NOT NULL DEFAULT 'manual',
            last_updated TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutrientVector, Provenance};

    fn temp_store() -> (tempfile::TempDir, SqliteStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(dir.path().join("cache.db")).unwrap();
        (dir, store)
    }

    fn entry(name: &str, calories: f64, provenance: Provenance) -> CacheEntry {
        CacheEntry::new(
            name,
            NutrientVector::new(calories, 1.0, 2.0, 3.0, 0.5, 0.2, 10.0),
            Some("fdc:12345".to_string()),
            provenance,
        )
    }

    #[test]
    fn test_open_creates_schema() {
        let (_dir, store) = temp_store();
        assert!(store.get("anything").unwrap().is_none());
    }

    #[test]
    fn test_put_get_round_trip() {
        let (_dir, store) = temp_store();
        store.put(entry("olive oil", 884.0, Provenance::External)).unwrap();

        let got = store.get("olive oil").unwrap().unwrap();
        assert_eq!(got.normalized_name, "olive oil");
        assert_eq!(got.per_100g.calories_kcal, 884.0);
        assert_eq!(got.provenance, Provenance::External);
        assert_eq!(got.source_id.as_deref(), Some("fdc:12345"));
    }

    #[test]
    fn test_upsert_overwrites() {
        let (_dir, store) = temp_store();
        store.put(entry("butter", 700.0, Provenance::Manual)).unwrap();
        store.put(entry("butter", 717.0, Provenance::External)).unwrap();

        let got = store.get("butter").unwrap().unwrap();
        assert_eq!(got.per_100g.calories_kcal, 717.0);
        assert_eq!(got.provenance, Provenance::External);
    }

    #[test]
    fn test_reopen_persists_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.db");
        {
            let store = SqliteStore::open(&path).unwrap();
            store.put(entry("flour", 364.0, Provenance::Manual)).unwrap();
        }
        let store = SqliteStore::open(&path).unwrap();
        let got = store.get("flour").unwrap().unwrap();
        assert_eq!(got.per_100g.calories_kcal, 364.0);
    }
}

use super::schema;
use crate::config::CacheConfig;
use crate::errors::StoreError;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Cloneable handle to the shared key/value cache.
///
/// All operations serialize on one connection; each acquires the lock for
/// its full duration and releases it on every exit path. A `get` followed
/// by a `put` (the cache-miss path) is deliberately not atomic as a pair,
/// so concurrent misses for the same key race benignly: last write wins.
#[derive(Clone)]
pub struct CacheStore {
    conn: Arc<Mutex<Connection>>,
}

impl CacheStore {
    /// Open a file-backed store, creating the schema if absent.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::init_connection(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Create an isolated in-memory store (for testing).
    pub fn memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Self::init_connection(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn from_config(config: &CacheConfig) -> Result<Self, StoreError> {
        Self::open(&config.path)
    }

    fn init_connection(conn: &Connection) -> Result<(), StoreError> {
        // WAL for file-backed DBs (no-op for in-memory)
        let _ = conn.execute("PRAGMA journal_mode = WAL", []);
        conn.execute_batch(schema::DDL)?;
        Ok(())
    }

    /// Point lookup. Absence is a normal outcome, not a failure.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let value = conn
            .query_row(
                "SELECT value FROM cache WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Upsert: insert a new row or replace the existing row's value and
    /// timestamp. Idempotent under repetition with the same arguments.
    pub fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO cache(key, value, timestamp) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value, timestamp=excluded.timestamp",
            params![key, value, super::now_epoch_ms()],
        )?;
        Ok(())
    }

    pub fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }

    /// Remove all entries. Leaves the schema in place.
    pub fn clear(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM cache", [])?;
        Ok(())
    }

    pub fn len(&self) -> Result<u64, StoreError> {
        let conn = self.conn.lock().unwrap();
        let n: i64 = conn.query_row("SELECT COUNT(*) FROM cache", [], |row| row.get(0))?;
        Ok(n as u64)
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

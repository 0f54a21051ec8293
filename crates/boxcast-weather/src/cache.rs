//! SQLite-backed persistent cache for archive responses.
//!
//! Entries are keyed by the full request parameter string and never expire:
//! historical weather for a past date does not change, so a cached response
//! is served forever and repeated fetches for the same date stay off the
//! network.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::error::WeatherError;

/// SQLite cache for raw archive response bodies.
pub struct ResponseCache {
    conn: Connection,
}

impl ResponseCache {
    /// Open (or create) a cache at the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, WeatherError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let cache = Self { conn };
        cache.init_schema()?;
        Ok(cache)
    }

    /// Create an in-memory cache (for testing).
    #[cfg(test)]
    pub fn in_memory() -> Result<Self, WeatherError> {
        let conn = Connection::open_in_memory()?;
        let cache = Self { conn };
        cache.init_schema()?;
        Ok(cache)
    }

    fn init_schema(&self) -> Result<(), WeatherError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS responses (
                key TEXT PRIMARY KEY,
                body TEXT NOT NULL,
                cached_at INTEGER NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Look up a cached response body.
    pub fn get(&self, key: &str) -> Result<Option<String>, WeatherError> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM responses WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(body)
    }

    /// Store a response body, replacing any previous entry for the key.
    pub fn put(&self, key: &str, body: &str) -> Result<(), WeatherError> {
        let now = Utc::now().timestamp_millis();
        self.conn.execute(
            "INSERT OR REPLACE INTO responses (key, body, cached_at) VALUES (?1, ?2, ?3)",
            params![key, body, now],
        )?;
        Ok(())
    }

    /// Remove all cached responses.
    pub fn clear(&self) -> Result<(), WeatherError> {
        self.conn.execute_batch("DELETE FROM responses;")?;
        Ok(())
    }
}

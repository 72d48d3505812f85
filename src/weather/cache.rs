//! Persistent HTTP response cache keyed by request URL.

use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::WeatherError;

#[derive(Serialize, Deserialize)]
struct StoredEntry {
    body: String,
    expires_at: u64, // Unix timestamp (seconds)
}

pub struct ResponseCache {
    _keyspace: Keyspace,
    partition: PartitionHandle,
}

impl ResponseCache {
    /// Open (or create) the cache database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WeatherError> {
        let keyspace = Config::new(path)
            .open()
            .map_err(|e| WeatherError::Cache(e.to_string()))?;
        let partition = keyspace
            .open_partition("responses", PartitionCreateOptions::default())
            .map_err(|e| WeatherError::Cache(e.to_string()))?;
        Ok(Self {
            _keyspace: keyspace,
            partition,
        })
    }

    /// Store a response body with a time-to-live.
    pub fn put(&self, key: &str, body: &str, ttl: Duration) -> Result<(), WeatherError> {
        let expires_at = unix_now() + ttl.as_secs();
        let entry = StoredEntry {
            body: body.to_string(),
            expires_at,
        };
        let bytes = postcard::to_stdvec(&entry).map_err(|e| WeatherError::Cache(e.to_string()))?;
        self.partition
            .insert(key, bytes)
            .map_err(|e| WeatherError::Cache(e.to_string()))?;
        Ok(())
    }

    /// Retrieve a body if it exists and has not expired. Expired entries
    /// are removed on read.
    pub fn get(&self, key: &str) -> Result<Option<String>, WeatherError> {
        let Some(bytes) = self
            .partition
            .get(key)
            .map_err(|e| WeatherError::Cache(e.to_string()))?
        else {
            debug!(key, "cache miss");
            return Ok(None);
        };

        let entry: StoredEntry =
            postcard::from_bytes(&bytes).map_err(|e| WeatherError::Cache(e.to_string()))?;
        if unix_now() < entry.expires_at {
            debug!(key, "cache hit");
            Ok(Some(entry.body))
        } else {
            debug!(key, "cache entry expired");
            self.remove(key)?;
            Ok(None)
        }
    }

    /// Manually remove a key.
    pub fn remove(&self, key: &str) -> Result<(), WeatherError> {
        self.partition
            .remove(key)
            .map_err(|e| WeatherError::Cache(e.to_string()))
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

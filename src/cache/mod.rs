//! Local result cache
//!
//! Fetched data is persisted as schema-explicit JSON, one file per username,
//! named by the hex-encoded SHA-256 of the username (a filesystem-safe key,
//! not a security measure). There is no staleness check: a cache hit is used
//! unconditionally, and its age is only logged. A corrupt cache file is a
//! fatal error; the remedy is to delete the file or run with caching
//! disabled.

use crate::api::FetchResult;
use crate::{CacheError, CacheResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

/// Extension of cache files
const CACHE_EXTENSION: &str = "json";

/// On-disk envelope around a [`FetchResult`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedFetch {
    /// When the data was fetched from the API
    pub fetched_at: DateTime<Utc>,

    /// The fetched data itself
    pub data: FetchResult,
}

impl CachedFetch {
    pub fn new(data: FetchResult) -> Self {
        Self {
            fetched_at: Utc::now(),
            data,
        }
    }

    /// Returns how long ago the data was fetched
    pub fn age(&self) -> chrono::Duration {
        Utc::now() - self.fetched_at
    }
}

/// File-backed cache of fetch results
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
    enabled: bool,
}

impl CacheStore {
    /// Creates a store rooted at `dir`
    ///
    /// A disabled store bypasses both loading and saving entirely.
    pub fn new(dir: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            dir: dir.into(),
            enabled,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the cache file path for a username
    pub fn path_for(&self, username: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(username.as_bytes());
        let key = hex::encode(hasher.finalize());
        self.dir.join(format!("{}.{}", key, CACHE_EXTENSION))
    }

    /// Loads a previously cached result, if one exists
    ///
    /// Returns `Ok(None)` when caching is disabled or no file exists for
    /// this username. A file that cannot be read or parsed is an error, not
    /// a miss.
    pub fn load(&self, username: &str) -> CacheResult<Option<FetchResult>> {
        if !self.enabled {
            return Ok(None);
        }

        let path = self.path_for(username);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|source| CacheError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let cached: CachedFetch =
            serde_json::from_str(&content).map_err(|source| CacheError::Corrupt {
                path: path.display().to_string(),
                source,
            })?;

        tracing::debug!(
            "cache hit for '{}', fetched {} hours ago",
            username,
            cached.age().num_hours()
        );
        Ok(Some(cached.data))
    }

    /// Persists a result, overwriting any existing cache file
    ///
    /// A no-op when caching is disabled.
    pub fn save(&self, username: &str, result: &FetchResult) -> CacheResult<()> {
        if !self.enabled {
            return Ok(());
        }

        let path = self.path_for(username);
        let cached = CachedFetch::new(result.clone());
        let content =
            serde_json::to_string_pretty(&cached).map_err(|source| CacheError::Encode { source })?;
        fs::write(&path, content).map_err(|source| CacheError::Write {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!("saved {} followers to {}", result.followers.len(), path.display());
        Ok(())
    }
}

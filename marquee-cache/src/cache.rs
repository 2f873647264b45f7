//! In-memory TTL cache for computed responses.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use marquee_core::constants::DEFAULT_CACHE_TTL_SECONDS;
use marquee_core::traits::CacheStore;

/// Cache entry with TTL.
#[derive(Clone)]
struct CacheEntry {
    value: Value,
    inserted_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL applied to every entry, in seconds
    pub default_ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
        }
    }
}

impl CacheConfig {
    /// Creates a config with the given TTL.
    pub fn with_ttl_seconds(default_ttl_seconds: u64) -> Self {
        Self { default_ttl_seconds }
    }

    /// TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_seconds)
    }
}

/// In-memory response cache.
///
/// Thread-safe and supports TTL-based expiration. There is no size bound
/// and no LRU: every key lives until its TTL elapses, so the key space grows
/// with the number of distinct requests seen within one TTL window.
/// Expired entries stop being visible immediately and are reclaimed by
/// [`TtlCache::cleanup_expired`].
pub struct TtlCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    config: CacheConfig,
}

impl TtlCache {
    /// Creates a new cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Gets a cached value by key.
    ///
    /// Returns None if not cached or expired.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read();
        entries.get(key).and_then(|e| {
            if e.is_expired() {
                None
            } else {
                Some(e.value.clone())
            }
        })
    }

    /// Caches a value with the default TTL.
    pub fn set(&self, key: &str, value: Value) {
        self.set_with_ttl(key, value, self.config.ttl());
    }

    /// Caches a value with a custom TTL.
    pub fn set_with_ttl(&self, key: &str, value: Value, ttl: Duration) {
        trace!(key, ttl_ms = ttl.as_millis() as u64, "Caching response");
        self.entries.write().insert(key.to_string(), CacheEntry {
            value,
            inserted_at: Instant::now(),
            ttl,
        });
    }

    /// Clears all cached entries.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Removes all expired entries, returning how many were dropped.
    pub fn cleanup_expired(&self) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, e| !e.is_expired());
        before - entries.len()
    }

    /// Returns the number of stored entries, including expired ones not yet reclaimed.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.read();
        let expired = entries.values().filter(|e| e.is_expired()).count();
        CacheStats {
            total_entries: entries.len(),
            expired_entries: expired,
            valid_entries: entries.len().saturating_sub(expired),
        }
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for TtlCache {
    async fn get(&self, key: &str) -> Option<Value> {
        TtlCache::get(self, key)
    }

    async fn set(&self, key: &str, value: Value) {
        TtlCache::set(self, key, value)
    }

    fn entry_count(&self) -> Option<usize> {
        Some(self.stats().valid_entries)
    }
}

/// Cache statistics.
#[derive(Clone, Debug, Serialize)]
pub struct CacheStats {
    /// Entries held, expired or not
    pub total_entries: usize,
    /// Entries past their TTL awaiting the sweep
    pub expired_entries: usize,
    /// Entries still served
    pub valid_entries: usize,
}

//! Common traits for Marquee.
//!
//! These traits define the two seams of the aggregation layer: where data
//! comes from and where computed responses are kept. Endpoint logic only
//! ever sees `dyn MovieSource` and `dyn CacheStore`.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::UpstreamError;
use crate::types::UpstreamRequest;

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM SOURCE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for the upstream movie metadata API.
///
/// Implementations might be:
/// - An HTTP client against the real API
/// - A canned fake (for testing)
#[async_trait]
pub trait MovieSource: Send + Sync {
    /// Performs one authenticated GET and returns the decoded JSON body.
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies all fail
    /// with an [`UpstreamError`].
    async fn fetch(&self, request: &UpstreamRequest) -> Result<Value, UpstreamError>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE STORE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for response caching with a uniform time-to-live.
///
/// Implementations might use:
/// - An in-process map with per-entry expiry
/// - An external key-value store
///
/// Values are the exact JSON payloads returned to clients.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the value for `key`, or `None` if never set or expired.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, overwriting and restarting its TTL.
    async fn set(&self, key: &str, value: Value);

    /// Number of stored entries, if the store can report it cheaply.
    fn entry_count(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MapStore(Mutex<HashMap<String, Value>>);

    #[async_trait]
    impl CacheStore for MapStore {
        async fn get(&self, key: &str) -> Option<Value> {
            self.0.lock().unwrap().get(key).cloned()
        }

        async fn set(&self, key: &str, value: Value) {
            self.0.lock().unwrap().insert(key.to_string(), value);
        }
    }

    #[tokio::test]
    async fn test_store_default_entry_count() {
        let store = MapStore(Mutex::new(HashMap::new()));
        store.set("genres", serde_json::json!([])).await;
        assert!(store.get("genres").await.is_some());
        assert_eq!(store.entry_count(), None);
    }
}

//! TTL cache for Marquee responses.
//!
//! In-memory key → JSON store with a uniform expiration window.

mod cache;

pub use cache::{CacheConfig, CacheStats, TtlCache};

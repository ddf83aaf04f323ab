pub mod memory;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::error::Result;

pub use memory::MemoryCache;

/// Freshness window of a cached upstream response
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Maximum number of cached URLs before LRU eviction kicks in
pub const DEFAULT_CAPACITY: usize = 1000;

/// Trait for upstream response cache implementations
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Get a fresh payload for the exact URL; stale entries count as misses
    async fn get(&self, url: &str) -> Result<Option<CachedResponse>>;

    /// Store a payload under the URL, replacing any previous entry
    async fn put(&self, url: &str, payload: Value) -> Result<()>;

    /// Get cache statistics
    async fn stats(&self) -> Result<CacheStats>;

    /// Drop every stale entry, returning how many were removed
    async fn cleanup(&self) -> Result<u64>;
}

/// Cached payload with metadata
#[derive(Debug, Clone)]
pub struct CachedResponse {
    pub url: String,
    pub payload: Value,
    pub cached_at: chrono::DateTime<chrono::Utc>,
}

/// Cache statistics
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub total_entries: u64,
    pub capacity: u64,
    pub ttl_secs: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub oldest_entry: Option<chrono::DateTime<chrono::Utc>>,
    pub newest_entry: Option<chrono::DateTime<chrono::Utc>>,
}

impl CacheStats {
    /// Share of lookups answered from cache (0.0 - 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

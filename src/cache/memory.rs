use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tokio::time::Instant;

use crate::cache::{CacheStats, CachedResponse, ResponseCache, DEFAULT_CAPACITY, DEFAULT_TTL};
use crate::error::{ProxyError, Result};

struct Entry {
    payload: Value,
    captured: Instant,
    cached_at: DateTime<Utc>,
}

/// In-process response cache keyed by fully resolved upstream URL.
///
/// Entries are fresh for `ttl` after capture. Past `capacity` distinct URLs
/// the least recently used entry is evicted. The lock only guards map
/// operations; callers never hold it across network I/O.
pub struct MemoryCache {
    entries: Mutex<LruCache<String, Entry>>,
    ttl: Duration,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl MemoryCache {
    /// Create new cache; a zero capacity is raised to one entry
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
            capacity: capacity.get(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> Result<MutexGuard<'_, LruCache<String, Entry>>> {
        self.entries
            .lock()
            .map_err(|_| ProxyError::Cache("cache lock poisoned".to_string()))
    }

    fn is_fresh(&self, entry: &Entry) -> bool {
        entry.captured.elapsed() < self.ttl
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn get(&self, url: &str) -> Result<Option<CachedResponse>> {
        let mut entries = self.lock()?;

        let found = entries.get(url).and_then(|entry| {
            self.is_fresh(entry).then(|| CachedResponse {
                url: url.to_string(),
                payload: entry.payload.clone(),
                cached_at: entry.cached_at,
            })
        });

        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };

        Ok(found)
    }

    async fn put(&self, url: &str, payload: Value) -> Result<()> {
        let mut entries = self.lock()?;

        let entry = Entry {
            payload,
            captured: Instant::now(),
            cached_at: Utc::now(),
        };

        if let Some((evicted, _)) = entries.push(url.to_string(), entry) {
            if evicted != url {
                self.evictions.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Evicted least recently used cache entry");
            }
        }

        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        let entries = self.lock()?;

        let oldest_entry = entries.iter().map(|(_, e)| e.cached_at).min();
        let newest_entry = entries.iter().map(|(_, e)| e.cached_at).max();

        Ok(CacheStats {
            total_entries: entries.len() as u64,
            capacity: self.capacity as u64,
            ttl_secs: self.ttl.as_secs(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            oldest_entry,
            newest_entry,
        })
    }

    async fn cleanup(&self) -> Result<u64> {
        let mut entries = self.lock()?;

        let stale: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| !self.is_fresh(entry))
            .map(|(url, _)| url.clone())
            .collect();

        for url in &stale {
            entries.pop(url);
        }

        Ok(stale.len() as u64)
    }
}

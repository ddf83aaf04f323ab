use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;

use crate::cache::{CacheStats, MemoryCache, ResponseCache};
use crate::config::ProxyConfig;
use crate::core::Filter;
use crate::discovery::{RandomGameSelector, SimilarGameResolver};
use crate::error::{ProxyError, Result};
use crate::fetcher::CachedFetcher;
use crate::query::QueryTranslator;
use crate::sampling::{Sampler, SeededSampler, ThreadRngSampler};

/// Main discovery orchestrator.
///
/// Built once per process and shared behind an `Arc`; owns the response
/// cache for its whole lifetime.
pub struct DiscoveryEngine {
    translator: Arc<QueryTranslator>,
    fetcher: Arc<CachedFetcher>,
    random: RandomGameSelector,
    similar: SimilarGameResolver,
}

impl DiscoveryEngine {
    /// Create engine from configuration with an in-memory cache
    pub fn new(config: &ProxyConfig) -> Result<Self> {
        config.validate()?;

        let cache = Arc::new(MemoryCache::new(config.cache_ttl(), config.cache_capacity));
        let fetcher = CachedFetcher::new(cache, config.upstream_timeout())?;
        let sampler: Arc<dyn Sampler> = match config.random_seed {
            Some(seed) => Arc::new(SeededSampler::new(seed)),
            None => Arc::new(ThreadRngSampler::new()),
        };

        tracing::info!(
            "Discovery engine ready (upstream {}, cache ttl {}s, capacity {}, sampler {})",
            config.base_url,
            config.cache_ttl_secs,
            config.cache_capacity,
            sampler.name()
        );

        Ok(Self::from_parts(
            QueryTranslator::new(&config.base_url, &config.api_key),
            fetcher,
            sampler,
        ))
    }

    /// Assemble from already-built components
    pub fn from_parts(
        translator: QueryTranslator,
        fetcher: CachedFetcher,
        sampler: Arc<dyn Sampler>,
    ) -> Self {
        let translator = Arc::new(translator);
        let fetcher = Arc::new(fetcher);

        Self {
            random: RandomGameSelector::new(translator.clone(), fetcher.clone(), sampler),
            similar: SimilarGameResolver::new(translator.clone(), fetcher.clone()),
            translator,
            fetcher,
        }
    }

    pub fn translator(&self) -> &QueryTranslator {
        &self.translator
    }

    /// Filtered, paginated game list
    pub async fn list_games(&self, filter: &Filter) -> Result<Value> {
        let start = Instant::now();
        let payload = self.fetcher.resolve(&self.translator.games_url(filter)).await?;

        tracing::debug!(
            "Listed games page {} in {:.2}ms",
            filter.page,
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(payload)
    }

    /// One random game's detail; `NoCandidates` when the sampled pool is empty
    pub async fn random_game(&self, filter: &Filter) -> Result<Value> {
        self.random
            .select(filter)
            .await?
            .ok_or(ProxyError::NoCandidates)
    }

    pub async fn game_detail(&self, id: &str) -> Result<Value> {
        self.fetcher.resolve(&self.translator.detail_url(id)).await
    }

    pub async fn similar_games(&self, id: &str) -> Result<Value> {
        self.similar.resolve(id).await
    }

    pub async fn genres(&self) -> Result<Value> {
        self.fetcher.resolve(&self.translator.genres_url()).await
    }

    pub async fn platforms(&self) -> Result<Value> {
        self.fetcher.resolve(&self.translator.platforms_url()).await
    }

    /// Get cache statistics
    pub async fn cache_stats(&self) -> Result<CacheStats> {
        self.fetcher.cache().stats().await
    }

    /// Drop stale cache entries
    pub async fn cleanup_cache(&self) -> Result<u64> {
        self.fetcher.cache().cleanup().await
    }
}

use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::core::{Filter, GamePage};
use crate::error::Result;
use crate::fetcher::CachedFetcher;
use crate::query::QueryTranslator;
use crate::sampling::Sampler;

/// Orderings the random pool is drawn from
pub const RANDOM_ORDERINGS: [&str; 7] = [
    "-rating",
    "-released",
    "-added",
    "-created",
    "-updated",
    "-metacritic",
    "-name",
];

/// Pool pages are drawn from `1..=RANDOM_PAGE_COUNT`
pub const RANDOM_PAGE_COUNT: u32 = 5;

#[derive(Debug, Deserialize)]
struct PoolEntry {
    id: u64,
}

/// Picks one game matching a filter.
///
/// The API has no random endpoint, so this samples uniformly within one
/// randomly chosen (ordering, page) window of 40 results. Games outside the
/// first five pages of every ordering are never picked.
pub struct RandomGameSelector {
    translator: Arc<QueryTranslator>,
    fetcher: Arc<CachedFetcher>,
    sampler: Arc<dyn Sampler>,
}

impl RandomGameSelector {
    pub fn new(
        translator: Arc<QueryTranslator>,
        fetcher: Arc<CachedFetcher>,
        sampler: Arc<dyn Sampler>,
    ) -> Self {
        Self {
            translator,
            fetcher,
            sampler,
        }
    }

    /// Full detail of a randomly picked game, or `None` when the pool is empty
    pub async fn select(&self, filter: &Filter) -> Result<Option<Value>> {
        let ordering = RANDOM_ORDERINGS[self.sampler.pick(RANDOM_ORDERINGS.len())];
        let page = self.sampler.pick(RANDOM_PAGE_COUNT as usize) as u32 + 1;

        let pool_url = self.translator.random_pool_url(filter, ordering, page);
        let pool: GamePage<PoolEntry> = serde_json::from_value(self.fetcher.resolve(&pool_url).await?)?;

        if pool.is_empty() {
            tracing::info!("Random pool empty (ordering {}, page {})", ordering, page);
            return Ok(None);
        }

        let index = self.sampler.pick(pool.results.len());
        let chosen = pool.results[index].id;

        tracing::debug!(
            "Random pick {} of {} (ordering {}, page {}, sampler {}) -> game {}",
            index + 1,
            pool.results.len(),
            ordering,
            page,
            self.sampler.name(),
            chosen
        );

        let detail = self
            .fetcher
            .resolve(&self.translator.detail_url(&chosen.to_string()))
            .await?;

        Ok(Some(detail))
    }
}

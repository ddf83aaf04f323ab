use serde_json::Value;
use std::sync::Arc;

use crate::core::{Genre, MANDATORY_TAG};
use crate::error::Result;
use crate::fetcher::CachedFetcher;
use crate::query::QueryTranslator;

/// A series lookup with fewer results than this falls back to genre similarity
pub const SERIES_MIN_RESULTS: usize = 3;

/// Genres borrowed from the original game, besides the mandatory tag
pub const MAX_EXTRA_GENRES: usize = 2;

/// Mandatory tag plus the first two other distinct genre slugs, in source order
pub fn fallback_genre_clause(genres: &[Genre]) -> String {
    let mut clause = vec![MANDATORY_TAG];
    for slug in genres.iter().map(|g| g.slug.as_str()) {
        if clause.len() > MAX_EXTRA_GENRES {
            break;
        }
        if !clause.contains(&slug) {
            clause.push(slug);
        }
    }
    clause.join(",")
}

fn result_count(page: &Value) -> usize {
    page.get("results")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Resolves games related to a given one: same series first, similar genres otherwise
pub struct SimilarGameResolver {
    translator: Arc<QueryTranslator>,
    fetcher: Arc<CachedFetcher>,
}

impl SimilarGameResolver {
    pub fn new(translator: Arc<QueryTranslator>, fetcher: Arc<CachedFetcher>) -> Self {
        Self {
            translator,
            fetcher,
        }
    }

    pub async fn resolve(&self, id: &str) -> Result<Value> {
        let series = self.fetcher.resolve(&self.translator.series_url(id)).await?;

        if result_count(&series) >= SERIES_MIN_RESULTS {
            return Ok(series);
        }

        let detail = self.fetcher.resolve(&self.translator.detail_url(id)).await?;
        let genres: Vec<Genre> = match detail.get("genres") {
            Some(genres) if !genres.is_null() => serde_json::from_value(genres.clone())?,
            _ => Vec::new(),
        };

        if genres.is_empty() {
            tracing::debug!("Game {} has no genres, returning series lookup", id);
            return Ok(series);
        }

        let clause = fallback_genre_clause(&genres);
        tracing::debug!("Series lookup for {} too small, falling back to genres {}", id, clause);

        let mut similar = self.fetcher.resolve(&self.translator.similar_url(&clause)).await?;

        // A non-numeric id never matches a result id
        let own_id = id.parse::<u64>().ok();
        if let (Some(own_id), Some(results)) = (
            own_id,
            similar.get_mut("results").and_then(Value::as_array_mut),
        ) {
            results.retain(|game| game.get("id").and_then(Value::as_u64) != Some(own_id));
        }

        Ok(similar)
    }
}

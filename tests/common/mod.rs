#![allow(dead_code)]

use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::MockServer;

use indie_game_proxy::sampling::Sampler;
use indie_game_proxy::{CachedFetcher, DiscoveryEngine, MemoryCache, QueryTranslator};

pub const API_KEY: &str = "test-key";

/// Sampler that replays a fixed list of picks, then falls back to 0
pub struct ScriptedSampler {
    picks: Mutex<VecDeque<usize>>,
}

impl ScriptedSampler {
    pub fn new(picks: &[usize]) -> Arc<Self> {
        Arc::new(Self {
            picks: Mutex::new(picks.iter().copied().collect()),
        })
    }
}

impl Sampler for ScriptedSampler {
    fn pick(&self, len: usize) -> usize {
        let pick = self.picks.lock().unwrap().pop_front().unwrap_or(0);
        assert!(pick < len, "scripted pick {} out of range 0..{}", pick, len);
        pick
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

pub fn engine_with(
    server: &MockServer,
    cache: Arc<MemoryCache>,
    sampler: Arc<dyn Sampler>,
) -> DiscoveryEngine {
    let fetcher = CachedFetcher::new(cache, Some(Duration::from_secs(5))).unwrap();
    DiscoveryEngine::from_parts(QueryTranslator::new(server.uri(), API_KEY), fetcher, sampler)
}

pub fn engine_for(server: &MockServer) -> DiscoveryEngine {
    engine_with(
        server,
        Arc::new(MemoryCache::new(Duration::from_secs(600), 100)),
        ScriptedSampler::new(&[]),
    )
}

pub fn game(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase().replace(' ', "-"),
        "background_image": null,
        "released": "2018-01-25",
        "metacritic": 88,
        "rating": 4.2,
        "ratings_count": 1500,
        "genres": [{"id": 51, "name": "Indie", "slug": "indie"}]
    })
}

pub fn page(results: Vec<Value>) -> Value {
    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    })
}

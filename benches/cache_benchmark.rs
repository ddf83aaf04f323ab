use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indie_game_proxy::cache::{MemoryCache, ResponseCache};
use serde_json::json;
use std::time::Duration;

fn url(i: usize) -> String {
    format!("https://api.rawg.io/api/games?key=k&genres=indie&page={}&page_size=20", i)
}

async fn setup_cache() -> MemoryCache {
    let cache = MemoryCache::new(Duration::from_secs(600), 1000);

    // Populate with test data
    for i in 0..100 {
        let payload = json!({"count": 1, "results": [{"id": i, "name": format!("Game {}", i)}]});
        cache.put(&url(i), payload).await.unwrap();
    }

    cache
}

fn bench_cache_get(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let cache = runtime.block_on(setup_cache());
    let hit = url(50);
    let miss = url(5000);

    c.bench_function("cache_get_hit", |b| {
        b.to_async(&runtime).iter(|| async {
            black_box(cache.get(&hit).await.unwrap())
        });
    });

    c.bench_function("cache_get_miss", |b| {
        b.to_async(&runtime).iter(|| async {
            black_box(cache.get(&miss).await.unwrap())
        });
    });
}

fn bench_cache_put_with_eviction(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let cache = MemoryCache::new(Duration::from_secs(600), 64);
    let mut i = 0usize;

    c.bench_function("cache_put_evicting", |b| {
        b.to_async(&runtime).iter(|| {
            i += 1;
            let key = url(i);
            let cache = &cache;
            async move { black_box(cache.put(&key, json!({"id": 1})).await.unwrap()) }
        });
    });
}

fn bench_cache_cleanup(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let cache = runtime.block_on(setup_cache());

    c.bench_function("cache_cleanup_all_fresh", |b| {
        b.to_async(&runtime).iter(|| async {
            black_box(cache.cleanup().await.unwrap())
        });
    });
}

criterion_group!(
    benches,
    bench_cache_get,
    bench_cache_put_with_eviction,
    bench_cache_cleanup
);
criterion_main!(benches);

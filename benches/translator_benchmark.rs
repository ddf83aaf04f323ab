use criterion::{black_box, criterion_group, criterion_main, Criterion};
use indie_game_proxy::{Filter, QueryTranslator};

fn bench_translation(c: &mut Criterion) {
    let translator = QueryTranslator::new("https://api.rawg.io/api", "k");

    let minimal = Filter::default();
    let full = Filter {
        genres: Some(vec!["indie".into(), "action".into(), "rpg".into()]),
        min_rating: Some(75),
        min_reviews: Some(100),
        year_start: Some(2010),
        year_end: Some(2024),
        platforms: Some(vec![1, 2, 3, 7]),
        search: Some("roguelike deck builder".into()),
        page: 3,
        page_size: 40,
        ..Filter::default()
    };

    c.bench_function("games_url_minimal", |b| {
        b.iter(|| black_box(translator.games_url(black_box(&minimal))));
    });

    c.bench_function("games_url_full", |b| {
        b.iter(|| black_box(translator.games_url(black_box(&full))));
    });

    c.bench_function("random_pool_url", |b| {
        b.iter(|| black_box(translator.random_pool_url(black_box(&full), "-metacritic", 5)));
    });
}

criterion_group!(benches, bench_translation);
criterion_main!(benches);

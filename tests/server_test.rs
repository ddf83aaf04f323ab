//! Router tests: inbound requests through axum, upstream mocked with wiremock.

#![cfg(feature = "server")]

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{engine_for, game, page};
use indie_game_proxy::server::router;

fn app(server: &MockServer) -> Router {
    router(Arc::new(engine_for(server)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    let (status, body) = get(app(&server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], indie_game_proxy::VERSION);
}

#[tokio::test]
async fn test_games_route_translates_filter() {
    let server = MockServer::start().await;

    let upstream = page(vec![game(1, "Hades")]);
    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("genres", "action,indie"))
        .and(query_param("metacritic", "80,100"))
        .and(query_param("parent_platforms", "1,7"))
        .and(query_param("ordering", "-ratings_count"))
        .and(query_param("page_size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let (status, body) = get(
        app(&server),
        "/api/games?genres=action&genres=indie&minRating=80&minReviews=10&platforms=1&platforms=7",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, upstream);
}

#[tokio::test]
async fn test_invalid_filter_is_generic_server_error() {
    let server = MockServer::start().await;
    let (status, body) = get(app(&server), "/api/games?page_size=99").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Failed to fetch games"}));
}

#[tokio::test]
async fn test_random_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(Vec::new())))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/api/games/random?yearStart=2029").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "No games found matching the criteria"}));
}

#[tokio::test]
async fn test_random_ignores_paging_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("page_size", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![game(4, "Tunic")])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/games/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(game(4, "Tunic")))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/api/games/random?page=9&page_size=500").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Tunic");
}

#[tokio::test]
async fn test_upstream_failure_hides_details() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/games/42"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/api/games/42").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Failed to fetch game details"}));
}

#[tokio::test]
async fn test_similar_route() {
    let server = MockServer::start().await;

    let series = page(vec![game(2, "A"), game(3, "B"), game(4, "C")]);
    Mock::given(method("GET"))
        .and(path("/games/1/game-series"))
        .respond_with(ResponseTemplate::new(200).set_body_json(series.clone()))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/api/games/1/similar").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, series);
}

#[tokio::test]
async fn test_genres_and_platforms_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = get(app(&server), "/api/genres").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch genres");

    let (status, body) = get(app(&server), "/api/platforms").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Failed to fetch platforms");
}

#[tokio::test]
async fn test_cache_stats_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/genres"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let app = app(&server);
    get(app.clone(), "/api/genres").await;
    get(app.clone(), "/api/genres").await;

    let (status, body) = get(app, "/api/cache/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_entries"], 1);
    assert_eq!(body["hits"], 1);
    assert_eq!(body["misses"], 1);
}

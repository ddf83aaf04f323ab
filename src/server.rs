//! HTTP surface: axum router, handlers and error mapping.
//!
//! Every handler maps core failures to a static message. Only an empty
//! random pool gets a 404; everything else, validation included, is a 500.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::cache::CacheStats;
use crate::core::Filter;
use crate::engine::DiscoveryEngine;
use crate::error::ProxyError;

const GAMES_FAILED: &str = "Failed to fetch games";
const RANDOM_FAILED: &str = "Failed to get random game";
const DETAIL_FAILED: &str = "Failed to fetch game details";
const SIMILAR_FAILED: &str = "Failed to fetch similar games";
const GENRES_FAILED: &str = "Failed to fetch genres";
const PLATFORMS_FAILED: &str = "Failed to fetch platforms";
const STATS_FAILED: &str = "Failed to read cache statistics";
const NO_CANDIDATES: &str = "No games found matching the criteria";

/// Query keys honoured by the random route; paging and ordering are chosen by the selector
const RANDOM_KEYS: [&str; 8] = [
    "genres",
    "genres[]",
    "minRating",
    "minReviews",
    "yearStart",
    "yearEnd",
    "platforms",
    "platforms[]",
];

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DiscoveryEngine>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

type QueryPairs = Query<Vec<(String, String)>>;

/// Build the application router around a shared engine
pub fn router(engine: Arc<DiscoveryEngine>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/games", get(list_games_handler))
        .route("/api/games/random", get(random_game_handler))
        .route("/api/games/:id", get(game_detail_handler))
        .route("/api/games/:id/similar", get(similar_games_handler))
        .route("/api/genres", get(genres_handler))
        .route("/api/platforms", get(platforms_handler))
        .route("/api/cache/stats", get(stats_handler))
        .layer(CorsLayer::permissive())
        .with_state(AppState { engine })
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

async fn list_games_handler(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Json<Value>, AppError> {
    let filter = Filter::from_query_pairs(&params).map_err(fail(GAMES_FAILED))?;
    tracing::debug!("Games request: {:?}", filter);

    let data = state.engine.list_games(&filter).await.map_err(fail(GAMES_FAILED))?;
    Ok(Json(data))
}

async fn random_game_handler(
    State(state): State<AppState>,
    Query(params): QueryPairs,
) -> Result<Json<Value>, AppError> {
    let params: Vec<(String, String)> = params
        .into_iter()
        .filter(|(key, _)| RANDOM_KEYS.contains(&key.as_str()))
        .collect();
    let filter = Filter::from_query_pairs(&params).map_err(fail(RANDOM_FAILED))?;

    let game = state.engine.random_game(&filter).await.map_err(fail(RANDOM_FAILED))?;

    tracing::info!(
        "🎲 Random game: {}",
        game.get("name").and_then(serde_json::Value::as_str).unwrap_or("<unnamed>")
    );

    Ok(Json(game))
}

async fn game_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let data = state.engine.game_detail(&id).await.map_err(fail(DETAIL_FAILED))?;
    Ok(Json(data))
}

async fn similar_games_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let data = state.engine.similar_games(&id).await.map_err(fail(SIMILAR_FAILED))?;
    Ok(Json(data))
}

async fn genres_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let data = state.engine.genres().await.map_err(fail(GENRES_FAILED))?;
    Ok(Json(data))
}

async fn platforms_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let data = state.engine.platforms().await.map_err(fail(PLATFORMS_FAILED))?;
    Ok(Json(data))
}

async fn stats_handler(State(state): State<AppState>) -> Result<Json<CacheStats>, AppError> {
    let stats = state.engine.cache_stats().await.map_err(fail(STATS_FAILED))?;
    Ok(Json(stats))
}

// Error handling
pub struct AppError {
    error: ProxyError,
    message: &'static str,
}

fn fail(message: &'static str) -> impl Fn(ProxyError) -> AppError {
    move |error| AppError { error, message }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.error {
            ProxyError::NoCandidates => (StatusCode::NOT_FOUND, NO_CANDIDATES),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.message),
        };

        tracing::error!("❌ {} - {}: {}", status, message, self.error);

        (status, Json(MessageResponse { message })).into_response()
    }
}

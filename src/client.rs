use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::{Filter, GameDetail, GamePage};
use crate::error::{ProxyError, Result};

/// Client for the proxy's own `/api` surface.
///
/// List and random calls always carry the mandatory tag in the genre
/// selection (the client-side half of the genre default).
#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

/// Inbound query string for a filter: repeated `genres`/`platforms` keys, then scalar fields
pub fn build_query_string(filter: &Filter) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    for genre in filter.genres.iter().flatten() {
        params.push(("genres", genre.clone()));
    }
    if let Some(rating) = filter.min_rating {
        params.push(("minRating", rating.to_string()));
    }
    if let Some(reviews) = filter.min_reviews {
        params.push(("minReviews", reviews.to_string()));
    }
    if let Some(start) = filter.year_start {
        params.push(("yearStart", start.to_string()));
    }
    if let Some(end) = filter.year_end {
        params.push(("yearEnd", end.to_string()));
    }
    for platform in filter.platforms.iter().flatten() {
        params.push(("platforms", platform.to_string()));
    }
    if let Some(ordering) = &filter.ordering {
        params.push(("ordering", ordering.clone()));
    }
    if let Some(search) = &filter.search {
        params.push(("search", search.clone()));
    }
    params.push(("page", filter.page.to_string()));
    params.push(("page_size", filter.page_size.to_string()));

    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

impl ProxyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn games(&self, filter: &Filter) -> Result<GamePage> {
        let filter = filter.clone().with_mandatory_tag();
        self.get_json(&format!("/api/games?{}", build_query_string(&filter))).await
    }

    pub async fn random_game(&self, filter: &Filter) -> Result<GameDetail> {
        let filter = filter.clone().with_mandatory_tag();
        self.get_json(&format!("/api/games/random?{}", build_query_string(&filter)))
            .await
    }

    pub async fn game(&self, id: &str) -> Result<GameDetail> {
        self.get_json(&format!("/api/games/{}", urlencoding::encode(id))).await
    }

    pub async fn similar_games(&self, id: &str) -> Result<GamePage> {
        self.get_json(&format!("/api/games/{}/similar", urlencoding::encode(id)))
            .await
    }

    pub async fn genres(&self) -> Result<Value> {
        self.get_json("/api/genres").await
    }

    pub async fn platforms(&self) -> Result<Value> {
        self.get_json("/api/platforms").await
    }
}

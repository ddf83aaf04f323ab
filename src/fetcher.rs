use reqwest::{Client, Url};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::ResponseCache;
use crate::error::{ProxyError, Result};

/// Cache-fronted upstream fetcher.
///
/// Every upstream GET goes through [`CachedFetcher::resolve`]: a fresh cache
/// entry for the exact URL short-circuits the network, a miss fetches and
/// stores the decoded body. Failures are returned as-is and never cached.
pub struct CachedFetcher {
    client: Client,
    cache: Arc<dyn ResponseCache>,
}

impl CachedFetcher {
    /// Create fetcher with its own HTTP client; `None` disables the request timeout
    pub fn new(cache: Arc<dyn ResponseCache>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, cache))
    }

    pub fn with_client(client: Client, cache: Arc<dyn ResponseCache>) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &Arc<dyn ResponseCache> {
        &self.cache
    }

    /// Resolve an upstream URL to its decoded JSON payload
    pub async fn resolve(&self, url: &str) -> Result<Value> {
        if let Some(cached) = self.cache.get(url).await? {
            tracing::debug!("Cache hit: {}", redact_key(url));
            return Ok(cached.payload);
        }

        tracing::debug!("Cache miss, fetching {}", redact_key(url));

        let response = self.client.get(url).send().await.map_err(|e| {
            let e = e.without_url();
            tracing::warn!("Upstream request failed for {}: {}", redact_key(url), e);
            ProxyError::HttpRequest(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Upstream returned HTTP {} for {}", status, redact_key(url));
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json().await.map_err(|e| ProxyError::HttpRequest(e.without_url()))?;

        if let Err(e) = self.cache.put(url, payload.clone()).await {
            tracing::warn!("Failed to save to cache: {}", e);
        }

        Ok(payload)
    }
}

/// Mask the API key in a URL before it reaches the logs
pub fn redact_key(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    if !pairs.is_empty() {
        parsed.query_pairs_mut().clear().extend_pairs(pairs);
    }

    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_key() {
        let redacted = redact_key("https://api.rawg.io/api/games?key=secret&page=2");
        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("key=***") || redacted.contains("key=%2A%2A%2A"));
        assert!(redacted.contains("page=2"));
    }

    #[test]
    fn test_redact_leaves_unparseable_input() {
        assert_eq!(redact_key("not a url"), "not a url");
    }
}

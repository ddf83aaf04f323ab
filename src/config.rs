//! Runtime configuration.
//!
//! Values come from environment variables, falling back to defaults:
//!
//! | Variable | Default |
//! |---|---|
//! | `RAWG_API_KEY` | required |
//! | `RAWG_BASE_URL` | `https://api.rawg.io/api` |
//! | `PORT` | `5000` |
//! | `CACHE_TTL_SECS` | `600` |
//! | `CACHE_CAPACITY` | `1000` |
//! | `UPSTREAM_TIMEOUT_SECS` | `10` (`0` disables) |
//! | `RANDOM_SEED` | unset (thread RNG) |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL};
use crate::error::{ProxyError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Upstream API key, sent as the `key` query parameter
    pub api_key: String,

    pub base_url: String,

    /// HTTP listen port
    pub port: u16,

    /// Freshness window of cached responses
    pub cache_ttl_secs: u64,

    /// LRU bound on cached URLs
    pub cache_capacity: usize,

    /// Upstream request timeout; 0 means none
    pub upstream_timeout_secs: u64,

    /// Fixed seed for reproducible random picks
    pub random_seed: Option<u64>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            port: 5000,
            cache_ttl_secs: DEFAULT_TTL.as_secs(),
            cache_capacity: DEFAULT_CAPACITY,
            upstream_timeout_secs: 10,
            random_seed: None,
        }
    }
}

fn parse_var<T: FromStr>(vars: &HashMap<String, String>, name: &str) -> Result<Option<T>> {
    match vars.get(name).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ProxyError::Config(format!("{} has an invalid value: {:?}", name, raw))),
        None => Ok(None),
    }
}

impl ProxyConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Load from a variable map, applying defaults for anything missing
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            api_key: parse_var(vars, "RAWG_API_KEY")?.unwrap_or(defaults.api_key),
            base_url: parse_var(vars, "RAWG_BASE_URL")?.unwrap_or(defaults.base_url),
            port: parse_var(vars, "PORT")?.unwrap_or(defaults.port),
            cache_ttl_secs: parse_var(vars, "CACHE_TTL_SECS")?.unwrap_or(defaults.cache_ttl_secs),
            cache_capacity: parse_var(vars, "CACHE_CAPACITY")?.unwrap_or(defaults.cache_capacity),
            upstream_timeout_secs: parse_var(vars, "UPSTREAM_TIMEOUT_SECS")?
                .unwrap_or(defaults.upstream_timeout_secs),
            random_seed: parse_var(vars, "RANDOM_SEED")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ProxyError::Config("RAWG_API_KEY must be set".to_string()));
        }
        if self.cache_ttl_secs == 0 {
            return Err(ProxyError::Config("CACHE_TTL_SECS must be positive".to_string()));
        }
        if self.cache_capacity == 0 {
            return Err(ProxyError::Config("CACHE_CAPACITY must be positive".to_string()));
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        (self.upstream_timeout_secs > 0).then(|| Duration::from_secs(self.upstream_timeout_secs))
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

//! # Indie Game Proxy
//!
//! Game discovery proxy in front of the RAWG metadata API:
//! - Filter → upstream query translation (mandatory `indie` genre fallback)
//! - Time-bounded, LRU-capped response cache keyed by full upstream URL
//! - Random game selection over a randomly chosen result window
//! - Similar games via series lookup with a genre-similarity fallback
//! - Interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use indie_game_proxy::{DiscoveryEngine, Filter, ProxyConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ProxyConfig::from_env()?;
//!     let engine = DiscoveryEngine::new(&config)?;
//!
//!     let filter = Filter {
//!         year_start: Some(2015),
//!         min_rating: Some(80),
//!         ..Filter::default()
//!     };
//!     let game = engine.random_game(&filter).await?;
//!
//!     println!("Try: {}", game["name"]);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod core;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod query;
pub mod sampling;

#[cfg(feature = "server")]
pub mod server;

// Re-export primary types
pub use cache::{CacheStats, MemoryCache, ResponseCache};
pub use client::ProxyClient;
pub use config::ProxyConfig;
pub use crate::core::{Filter, GameDetail, GamePage, GameSummary, Genre, MANDATORY_TAG};
pub use engine::DiscoveryEngine;
pub use error::{ProxyError, Result};
pub use fetcher::CachedFetcher;
pub use query::QueryTranslator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

use thiserror::Error;

/// Main error type for the discovery proxy
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Inbound filter failed shape or range checks
    #[error("Invalid filter: {0}")]
    Validation(String),

    /// Upstream API answered with a non-success status
    #[error("Upstream API returned HTTP {status}")]
    Upstream { status: u16 },

    /// HTTP request errors (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Random selection found nothing to pick from
    #[error("No games found matching the criteria")]
    NoCandidates,

    /// Cache errors
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProxyError {
    /// True for failures that came from talking to the upstream API
    pub fn is_upstream(&self) -> bool {
        matches!(self, ProxyError::Upstream { .. } | ProxyError::HttpRequest(_))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ProxyError>;

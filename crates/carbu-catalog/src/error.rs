use thiserror::Error;

/// Failure of a catalog request. Every variant aborts the unit of work that
/// issued the request; nothing is retried.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The underlying `reqwest::Client` could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Network failure, TLS failure or timeout while talking to `url`.
    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

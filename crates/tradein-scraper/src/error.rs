use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid API endpoint \"{endpoint}\": {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("option depth limit {max_depth} exceeded at {path}")]
    DepthExceeded { path: String, max_depth: usize },

    #[error("unusable leaf at {path}: {reason}")]
    Extraction { path: String, reason: String },
}

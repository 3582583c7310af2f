//! Error types for restora-core

use thiserror::Error;

/// Result type alias for restora-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while talking to the backend or handling local state
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with `status: "error"`
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("WebSocket error: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse TOML config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to serialize TOML config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Error::WebSocket(Box::new(err))
    }
}

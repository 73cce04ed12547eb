use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("metrics system already initialized")]
    AlreadyInitialized,

    #[error("metrics system not initialized")]
    NotInitialized,

    #[error("failed to install metrics recorder: {0}")]
    Recorder(String),

    #[error("pushgateway returned status {status}")]
    Push { status: u16 },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, MetricsError>;

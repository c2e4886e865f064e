use thiserror::Error;

#[derive(Error, Debug)]
pub enum HermesError {
    // Configuration errors
    #[error("{0}")]
    Usage(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("{0}")]
    Status(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Parsing errors
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HermesResult<T> = Result<T, HermesError>;

/// Error types for loading the dataset
use thiserror::Error;

/// Reasons the dataset could not be made available.
///
/// Shape problems inside individual records are not errors; they are absorbed
/// during decoding. Only transport and top-level format failures end up here.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading a local dataset file failed
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a JSON array of records
    #[error("Failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A gzip-compressed export could not be inflated
    #[error("Failed to decompress dataset: {0}")]
    Decompression(String),

    /// The server answered with a non-success status
    #[error("Dataset request returned status {0}")]
    Status(u16),

    /// The request itself failed (browser fetch, network)
    #[error("Dataset request failed: {0}")]
    Request(String),

    /// HTTP client error
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;

//! Custom error types for the application.
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`CatalogError`] - Failures of the catalog API as seen by page flows
//! - [`CacheError`] - sessionStorage write failures
//! - [`PosterError`] - Poster images that fail to load
//! - [`ConfigError`] - Invalid catalog configuration

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Non-2xx response carrying the backend's error message
    #[error("HTTP error {status}: {message}")]
    Api { status: u16, message: String },
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Catalog API failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The request did not produce a successful response.
    #[error("network failure: {0}")]
    Network(FetchError),
    /// The response body was not the expected JSON.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<FetchError> for CatalogError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::JsonParseError(msg) => Self::Malformed(msg),
            other => Self::Network(other),
        }
    }
}

/// Cache operation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CacheError {
    /// sessionStorage not available.
    #[error("sessionStorage not available")]
    StorageUnavailable,
    /// Failed to serialize data to JSON.
    #[error("failed to serialize cache entry: {0}")]
    SerializationFailed(String),
    /// Failed to write to storage (quota exceeded, storage disabled).
    #[error("failed to write to sessionStorage")]
    WriteFailed,
}

/// Poster image load failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PosterError {
    #[error("poster failed to load: {0}")]
    LoadFailed(String),
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid catalog config: {0}")]
    Parse(String),
    #[error("invalid section name '{0}' (use lowercase letters, digits, '_' or '-')")]
    InvalidSection(String),
    #[error("api.timeout_ms must be greater than zero")]
    InvalidTimeout,
}

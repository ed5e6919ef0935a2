//! Client error types.

use reqwest::header::HeaderMap;
use thiserror::Error;
use toggl_core::reports::ReportsError;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No context was supplied; the request was never sent.
    #[error("The provided context must be non-nil")]
    ContextRequired,

    #[error("Request cancelled")]
    Cancelled,

    #[error("Request deadline exceeded")]
    Timeout,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Reports(#[from] ReportsError),

    #[error(transparent)]
    Track(#[from] TrackError),
}

impl ClientError {
    /// HTTP status of an API error, `None` for transport-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Reports(error) => Some(error.code),
            ClientError::Track(error) => Some(error.status),
            _ => None,
        }
    }
}

/// Error returned by the Track API on an unsuccessful request.
///
/// The Track API has no structured error body: `message` is the raw body text.
#[derive(Error, Debug, Clone)]
#[error("HTTP Status: {status}\n{message}")]
pub struct TrackError {
    pub status: u16,
    pub message: String,
    pub headers: HeaderMap,
}

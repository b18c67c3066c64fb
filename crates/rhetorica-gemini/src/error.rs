//! Error types for Gemini operations.

use thiserror::Error;

/// Errors that can occur when talking to the Gemini API.
#[derive(Error, Debug)]
pub enum GeminiError {
    /// Server could not be reached at all.
    #[error("Could not reach the Gemini API at {host}. Check your network connection.")]
    Unreachable { host: String },

    /// Request timeout.
    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// API returned an error response.
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Response contained no usable text.
    #[error("The model returned an empty response")]
    EmptyResponse,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, GeminiError>;

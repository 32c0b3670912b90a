//! SDK error types
//!
//! Errors raised by the default HTTP transport. The routes service never
//! wraps these; it hands back whatever its transport produced.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Authentication failed or credentials are invalid
    #[error("Authentication failed: {message}")]
    Unauthorized {
        /// Error message
        message: String,
        /// HTTP status code
        status_code: u16,
    },

    /// Access to the resource is forbidden
    #[error("Access forbidden: {message}")]
    Forbidden {
        /// Error message
        message: String,
    },

    /// Resource was not found
    #[error("Resource not found: {path}")]
    NotFound {
        /// Request path that was not found
        path: String,
    },

    /// The server rejected the request body
    #[error("Validation failed: {message}")]
    ValidationError {
        /// Error message as returned by the server
        message: String,
    },

    /// Conflict with existing resource
    #[error("Conflict: {message}")]
    Conflict {
        /// Error message
        message: String,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded. Retry after {retry_after:?} seconds")]
    RateLimited {
        /// Seconds until rate limit resets
        retry_after: Option<u64>,
    },

    /// Request timeout
    #[error("Request timed out after {duration:?}")]
    Timeout {
        /// Duration before timeout
        duration: Duration,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Server error
    #[error("Server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },

    /// API returned a body that could not be parsed
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Error message
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Any other non-success status
    #[error("API error ({status_code}): {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error code reported by the server, if any
        code: Option<String>,
        /// Error message
        message: String,
        /// Additional details
        details: Option<serde_json::Value>,
    },
}

impl SdkError {
    /// Check if the error is retryable.
    ///
    /// The SDK never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            SdkError::Timeout { .. } => true,
            SdkError::NetworkError { .. } => true,
            SdkError::RateLimited { .. } => true,
            SdkError::ServerError { .. } => true,
            _ => false,
        }
    }

    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SdkError::Unauthorized { status_code, .. } => Some(*status_code),
            SdkError::ServerError { status_code, .. } => Some(*status_code),
            SdkError::ApiError { status_code, .. } => Some(*status_code),
            SdkError::NotFound { .. } => Some(404),
            SdkError::Forbidden { .. } => Some(403),
            SdkError::ValidationError { .. } => Some(400),
            SdkError::Conflict { .. } => Some(409),
            SdkError::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}

/// Convert from reqwest errors
///
/// Timeouts and HTTP statuses are handled by the client before this point.
impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            SdkError::NetworkError {
                message: "Connection failed".to_string(),
                source: Some(Box::new(err)),
            }
        } else if err.is_builder() {
            SdkError::SerializationError {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        } else {
            SdkError::NetworkError {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

/// Convert from JSON errors
impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::SerializationError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

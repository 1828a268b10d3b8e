//! Error types for the platform client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the hosting platform
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The platform rejected the call with a structured error
    #[error("{message}")]
    Remote {
        /// HTTP status code
        status: u16,
        /// Message supplied by the platform
        message: String,
    },

    /// API returned a non-success status without a structured error body
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Raw response body
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Reading the archive from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// The platform-supplied message, if this is a structured remote error
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Self::Remote { message, .. } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_displays_platform_message() {
        let err = ClientError::Remote {
            status: 403,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "quota exceeded");
        assert_eq!(err.remote_message(), Some("quota exceeded"));
    }

    #[test]
    fn test_untyped_errors_have_no_remote_message() {
        let err = ClientError::api_error(502, "Bad Gateway");
        assert!(err.remote_message().is_none());
        assert!(err.to_string().contains("502"));
    }
}

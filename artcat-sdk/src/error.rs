//! SDK error types and handling
//!
//! This module provides error handling for the SDK: transport failures,
//! non-success responses, and bodies that cannot be decoded.

use artcat_core::FetchError;
use thiserror::Error;

/// The main error type for the SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// Network or connection error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// API returned a non-success status
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body does not match the expected structure
    #[error("could not decode response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// URL parsing error
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for SDK operations
pub type SdkResult<T> = std::result::Result<T, SdkError>;

/// Error payload some endpoints return alongside a non-success status
#[derive(Debug, serde::Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SdkError {
    /// Create a status error, extracting the server's message when the body
    /// carries one
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    "no response body".to_string()
                } else {
                    trimmed.chars().take(200).collect()
                }
            });

        SdkError::Status { status, message }
    }

    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SdkError::Status { status, .. } => Some(*status),
            SdkError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

// Decode failures are the only parse-class failures; everything else the
// transport can produce reads as a network-class failure to the controller.
impl From<SdkError> for FetchError {
    fn from(err: SdkError) -> Self {
        match err {
            SdkError::Parse(e) => FetchError::Parse(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_extracts_json_message() {
        let body = r#"{"error": "backend unavailable"}"#;
        let error = SdkError::from_status(500, body);

        match error {
            SdkError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "backend unavailable");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_status_falls_back_to_body_text() {
        let error = SdkError::from_status(502, "Bad Gateway");
        assert_eq!(error.status_code(), Some(502));
        assert!(error.to_string().contains("Bad Gateway"));
    }

    #[test]
    fn test_fetch_error_classification() {
        let parse = SdkError::from(serde_json::from_str::<u32>("[").unwrap_err());
        assert!(matches!(FetchError::from(parse), FetchError::Parse(_)));

        let status = SdkError::from_status(500, "");
        assert!(matches!(FetchError::from(status), FetchError::Network(_)));

        let timeout = SdkError::Timeout(30);
        let fetch: FetchError = timeout.into();
        assert!(matches!(fetch, FetchError::Network(_)));
        assert!(fetch.to_string().contains("timed out"));
    }
}

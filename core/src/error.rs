//! Error type for property service requests.
//!
//! Every failed request surfaces as a [`FetchError`]. The variants carry
//! enough detail for logging; views treat them all the same way.

use thiserror::Error;

// =============================================================================
// Fetch Errors
// =============================================================================

/// Errors from a single request to the property service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type alias for property service requests.
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Property;

    #[test]
    fn test_status_display() {
        let err = FetchError::Status {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (404): Not Found");
    }

    #[test]
    fn test_decode_from_serde() {
        let err: FetchError = serde_json::from_str::<Property>("not json").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to parse response"));
    }
}

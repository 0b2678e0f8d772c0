/// Core transport trait and error types
///
/// This module defines the contract every API transport must implement.
/// A transport resolves a URL to a parsed JSON payload; everything above
/// it (caching, payload navigation, filtering) lives in the client.
///
/// # Transport Contract
///
/// All transports must:
/// 1. Implement the `ApiTransport` trait (async)
/// 2. Return the parsed JSON body for successful responses
/// 3. Surface non-success statuses as `TransportError::Status`
/// 4. Never panic on malformed input

use async_trait::async_trait;
use serde_json::Value as JsonValue;

/// Transport error types
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be decoded
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },
}

/// Transport result type alias
pub type TransportResult<T> = Result<T, TransportError>;

/// Core transport trait
///
/// Implementations fetch a URL and hand back the decoded JSON body.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Performs a GET request and decodes the response body as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response status is not a
    /// success, or the body is not valid JSON
    async fn get_json(&self, url: &str) -> TransportResult<JsonValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = TransportError::Status {
            status: 404,
            url: "https://api.github.com/orgs/missing".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "unexpected status 404 from https://api.github.com/orgs/missing"
        );
    }
}

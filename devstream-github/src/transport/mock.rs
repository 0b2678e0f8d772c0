/// Mock transport for testing and demos
///
/// This transport serves canned JSON payloads keyed by URL and records
/// every request it receives. It's useful for:
/// - Testing the org client without touching the network
/// - Asserting how many calls a memoized property actually makes
/// - Demonstrating client behavior with deterministic data
///
/// # Example
///
/// ```
/// use devstream_github::transport::{ApiTransport, MockTransport};
/// use serde_json::json;
///
/// # async fn example() {
/// let transport = MockTransport::new()
///     .with_response("https://api.github.com/orgs/acme", json!({"login": "acme"}));
///
/// let payload = transport
///     .get_json("https://api.github.com/orgs/acme")
///     .await
///     .unwrap();
///
/// assert_eq!(payload["login"], "acme");
/// assert_eq!(transport.calls(), vec!["https://api.github.com/orgs/acme"]);
/// # }
/// ```

use crate::transport::api::{ApiTransport, TransportError, TransportResult};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock transport implementation
///
/// URLs with no registered response answer with a 404 status error, which
/// mirrors how the real API reports unknown resources.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: HashMap<String, JsonValue>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Creates an empty mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a canned response for a URL
    pub fn with_response(mut self, url: impl Into<String>, payload: JsonValue) -> Self {
        self.responses.insert(url.into(), payload);
        self
    }

    /// Returns every URL requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    /// Returns how many requests have been made
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock poisoned").len()
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get_json(&self, url: &str) -> TransportResult<JsonValue> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(url.to_string());

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

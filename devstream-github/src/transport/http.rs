/// reqwest-backed transport for the real GitHub API
///
/// Sends the standard GitHub media type, identifies itself with a
/// project User-Agent (the API rejects anonymous agents), and attaches a
/// bearer token when one is configured.
///
/// # Example
///
/// ```no_run
/// use devstream_github::transport::{ApiTransport, HttpTransport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let token = std::env::var("GITHUB_TOKEN").ok();
/// let transport = HttpTransport::new(token)?;
///
/// let org = transport.get_json("https://api.github.com/orgs/rust-lang").await?;
/// println!("org id: {}", org["id"]);
/// # Ok(())
/// # }
/// ```

use crate::transport::api::{ApiTransport, TransportError, TransportResult};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("devstream/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport implementation
pub struct HttpTransport {
    client: reqwest::Client,
    token: Option<String>,
}

impl HttpTransport {
    /// Creates a new HTTP transport
    ///
    /// Pass a personal access token to raise the API rate limit; `None`
    /// uses unauthenticated access.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client can't be built
    pub fn new(token: Option<String>) -> TransportResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(HttpTransport { client, token })
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn get_json(&self, url: &str) -> TransportResult<JsonValue> {
        debug!(url, "Fetching JSON payload");

        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let payload = response.json::<JsonValue>().await?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_builds_without_token() {
        assert!(HttpTransport::new(None).is_ok());
    }

    #[test]
    fn test_transport_builds_with_token() {
        let transport = HttpTransport::new(Some("ghp_example".to_string())).unwrap();
        assert!(transport.token.is_some());
    }

    #[test]
    fn test_user_agent_names_the_project() {
        assert!(USER_AGENT.starts_with("devstream/"));
    }
}

/// GitHub organization client
///
/// This module provides `OrgClient`, a client for one GitHub organization.
/// The org payload and the repository listing are fetched through the
/// transport seam and memoized per client instance, so repeated property
/// access costs exactly one API call each.
///
/// # Example
///
/// ```no_run
/// use devstream_github::client::OrgClient;
/// use devstream_github::transport::HttpTransport;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = Arc::new(HttpTransport::new(None)?);
/// let client = OrgClient::new("rust-lang", transport);
///
/// // One API call, then served from the memo
/// let org = client.org().await?;
/// let again = client.org().await?;
/// assert_eq!(org, again);
///
/// // Repos filtered by license key
/// let apache = client.public_repos(Some("apache-2.0")).await?;
/// println!("{} Apache-2.0 repos", apache.len());
/// # Ok(())
/// # }
/// ```

use crate::nested::{lookup_path, PathError};
use crate::transport::{ApiTransport, TransportError};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

/// Default base URL of the GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Client error types
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The transport failed to produce a payload
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A required key was missing from a payload
    #[error(transparent)]
    Path(#[from] PathError),

    /// A payload had an unexpected shape (wrong JSON type)
    #[error("unexpected payload shape: {0}")]
    UnexpectedShape(String),
}

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Client for a single GitHub organization
///
/// Cheap to construct; nothing is fetched until a property is accessed.
pub struct OrgClient {
    org: String,
    base_url: String,
    transport: Arc<dyn ApiTransport>,
    org_payload: OnceCell<JsonValue>,
    repos_payload: OnceCell<JsonValue>,
}

impl OrgClient {
    /// Creates a client for `org` against the public GitHub API
    pub fn new(org: impl Into<String>, transport: Arc<dyn ApiTransport>) -> Self {
        Self::with_base_url(org, transport, DEFAULT_API_URL)
    }

    /// Creates a client against a custom API base URL
    ///
    /// Used for GitHub Enterprise instances and for pointing tests at a
    /// substituted transport namespace.
    pub fn with_base_url(
        org: impl Into<String>,
        transport: Arc<dyn ApiTransport>,
        base_url: impl Into<String>,
    ) -> Self {
        OrgClient {
            org: org.into(),
            base_url: base_url.into(),
            transport,
            org_payload: OnceCell::new(),
            repos_payload: OnceCell::new(),
        }
    }

    /// Returns the organization name this client serves
    pub fn org_name(&self) -> &str {
        &self.org
    }

    /// Returns the URL of the organization endpoint
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.base_url, self.org)
    }

    /// Returns the organization payload
    ///
    /// Fetched once per client instance; later calls return the memoized
    /// value without touching the transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails
    pub async fn org(&self) -> ClientResult<&JsonValue> {
        self.org_payload
            .get_or_try_init(|| async {
                let url = self.org_url();
                debug!(org = %self.org, url, "Fetching organization payload");
                Ok(self.transport.get_json(&url).await?)
            })
            .await
    }

    /// Returns the URL of the organization's public repository listing
    ///
    /// Read from the `repos_url` field of the org payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the org payload can't be fetched, lacks
    /// `repos_url`, or carries a non-string value there
    pub async fn public_repos_url(&self) -> ClientResult<String> {
        let org = self.org().await?;
        let url = lookup_path(org, &["repos_url"])?;

        url.as_str()
            .map(str::to_string)
            .ok_or_else(|| ClientError::UnexpectedShape("repos_url is not a string".to_string()))
    }

    /// Returns the repository listing payload
    ///
    /// Fetched once per client instance from
    /// [`public_repos_url`](Self::public_repos_url); later calls return the
    /// memoized value.
    ///
    /// # Errors
    ///
    /// Returns an error if either fetch fails
    pub async fn repos_payload(&self) -> ClientResult<&JsonValue> {
        self.repos_payload
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?;
                debug!(org = %self.org, url, "Fetching repository listing");
                Ok(self.transport.get_json(&url).await?)
            })
            .await
    }

    /// Returns the names of the organization's public repositories
    ///
    /// With `license`, only repositories whose `license.key` equals the
    /// given key are included.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing can't be fetched, is not an array,
    /// or contains a repository without a string `name`
    pub async fn public_repos(&self, license: Option<&str>) -> ClientResult<Vec<String>> {
        let payload = self.repos_payload().await?;

        let repos = payload.as_array().ok_or_else(|| {
            ClientError::UnexpectedShape("repository listing is not an array".to_string())
        })?;

        let mut names = Vec::new();
        for repo in repos {
            if let Some(key) = license {
                if !Self::has_license(repo, key) {
                    continue;
                }
            }

            let name = lookup_path(repo, &["name"])?
                .as_str()
                .ok_or_else(|| {
                    ClientError::UnexpectedShape("repository name is not a string".to_string())
                })?;

            names.push(name.to_string());
        }

        Ok(names)
    }

    /// Checks whether a repository payload carries the given license key
    ///
    /// Repositories without license metadata simply don't match.
    pub fn has_license(repo: &JsonValue, license_key: &str) -> bool {
        lookup_path(repo, &["license", "key"])
            .ok()
            .and_then(JsonValue::as_str)
            .map(|key| key == license_key)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;

    fn client_with(
        org: &str,
        transport: MockTransport,
    ) -> (OrgClient, Arc<MockTransport>) {
        let transport = Arc::new(transport);
        let client = OrgClient::new(org, transport.clone() as Arc<dyn ApiTransport>);
        (client, transport)
    }

    #[tokio::test]
    async fn test_org_returns_payload_for_each_org() {
        // Same contract across org names
        for org_name in ["google", "abc"] {
            let url = format!("{}/orgs/{}", DEFAULT_API_URL, org_name);
            let payload = json!({"login": org_name, "id": 123});

            let (client, transport) = client_with(
                org_name,
                MockTransport::new().with_response(&url, payload.clone()),
            );

            let org = client.org().await.expect("org fetch should succeed");
            assert_eq!(org, &payload, "org {}", org_name);
            assert_eq!(transport.calls(), vec![url], "org {}", org_name);
        }
    }

    #[tokio::test]
    async fn test_org_is_fetched_exactly_once() {
        let url = format!("{}/orgs/acme", DEFAULT_API_URL);
        let (client, transport) = client_with(
            "acme",
            MockTransport::new().with_response(&url, json!({"login": "acme"})),
        );

        let first = client.org().await.expect("first access").clone();
        let second = client.org().await.expect("second access").clone();

        assert_eq!(first, second, "memoized value never changes");
        assert_eq!(transport.call_count(), 1, "only one transport call");
    }

    #[tokio::test]
    async fn test_public_repos_url_comes_from_org_payload() {
        let org_url = format!("{}/orgs/acme", DEFAULT_API_URL);
        let (client, _transport) = client_with(
            "acme",
            MockTransport::new().with_response(
                &org_url,
                json!({"repos_url": "https://api.github.com/orgs/acme/repos"}),
            ),
        );

        let url = client
            .public_repos_url()
            .await
            .expect("repos_url should resolve");
        assert_eq!(url, "https://api.github.com/orgs/acme/repos");
    }

    #[tokio::test]
    async fn test_public_repos_url_missing_field() {
        let org_url = format!("{}/orgs/acme", DEFAULT_API_URL);
        let (client, _transport) = client_with(
            "acme",
            MockTransport::new().with_response(&org_url, json!({"login": "acme"})),
        );

        let err = client
            .public_repos_url()
            .await
            .expect_err("missing repos_url should fail");
        assert!(matches!(err, ClientError::Path(_)));
    }

    #[tokio::test]
    async fn test_has_license_matches_key() {
        // (repo payload, license key, expected)
        let cases = [
            (json!({"license": {"key": "my_license"}}), "my_license", true),
            (json!({"license": {"key": "other_license"}}), "my_license", false),
            (json!({"license": null}), "my_license", false),
            (json!({}), "my_license", false),
        ];

        for (repo, key, expected) in &cases {
            assert_eq!(
                OrgClient::has_license(repo, key),
                *expected,
                "repo {:?} / key {}",
                repo,
                key
            );
        }
    }

    #[tokio::test]
    async fn test_unknown_org_surfaces_status_error() {
        let (client, _transport) = client_with("missing", MockTransport::new());

        let err = client.org().await.expect_err("404 should propagate");
        assert!(matches!(
            err,
            ClientError::Transport(TransportError::Status { status: 404, .. })
        ));
    }
}

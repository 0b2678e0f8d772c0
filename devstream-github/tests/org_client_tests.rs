/// Integration tests for the org client over the mock transport
///
/// These tests exercise the full property chain (org payload, repos URL,
/// repository listing, license filtering) against fixture payloads, with
/// the transport substituted so no network access happens.

use devstream_github::client::{ClientError, OrgClient, DEFAULT_API_URL};
use devstream_github::transport::{ApiTransport, MockTransport, TransportError};
use serde_json::{json, Value as JsonValue};
use std::sync::Arc;

const ORG: &str = "acme";

fn org_payload() -> JsonValue {
    json!({
        "login": ORG,
        "id": 1342004,
        "repos_url": format!("{}/orgs/{}/repos", DEFAULT_API_URL, ORG),
    })
}

fn repos_payload() -> JsonValue {
    json!([
        {
            "id": 1,
            "name": "alpha",
            "license": {"key": "apache-2.0", "name": "Apache License 2.0"},
        },
        {
            "id": 2,
            "name": "beta",
            "license": {"key": "mit", "name": "MIT License"},
        },
        {
            "id": 3,
            "name": "gamma",
            "license": null,
        },
        {
            "id": 4,
            "name": "delta",
            "license": {"key": "apache-2.0", "name": "Apache License 2.0"},
        },
    ])
}

fn fixture_client() -> (OrgClient, Arc<MockTransport>) {
    let transport = Arc::new(
        MockTransport::new()
            .with_response(format!("{}/orgs/{}", DEFAULT_API_URL, ORG), org_payload())
            .with_response(
                format!("{}/orgs/{}/repos", DEFAULT_API_URL, ORG),
                repos_payload(),
            ),
    );

    let client = OrgClient::new(ORG, transport.clone() as Arc<dyn ApiTransport>);
    (client, transport)
}

#[tokio::test]
async fn test_public_repos_lists_every_name() {
    let (client, _transport) = fixture_client();

    let repos = client
        .public_repos(None)
        .await
        .expect("listing should succeed");

    assert_eq!(repos, vec!["alpha", "beta", "gamma", "delta"]);
}

#[tokio::test]
async fn test_public_repos_filters_by_license() {
    let (client, _transport) = fixture_client();

    let apache = client
        .public_repos(Some("apache-2.0"))
        .await
        .expect("listing should succeed");
    assert_eq!(apache, vec!["alpha", "delta"]);

    let mit = client
        .public_repos(Some("mit"))
        .await
        .expect("listing should succeed");
    assert_eq!(mit, vec!["beta"]);

    let none = client
        .public_repos(Some("gpl-3.0"))
        .await
        .expect("listing should succeed");
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_property_chain_costs_two_calls_total() {
    let (client, transport) = fixture_client();

    // Drive every property, several times each
    client.org().await.expect("org");
    client.public_repos_url().await.expect("repos url");
    client.public_repos(None).await.expect("all repos");
    client.public_repos(Some("apache-2.0")).await.expect("filtered");
    client.public_repos(Some("mit")).await.expect("filtered again");

    // One call for the org payload, one for the listing
    assert_eq!(
        transport.calls(),
        vec![
            format!("{}/orgs/{}", DEFAULT_API_URL, ORG),
            format!("{}/orgs/{}/repos", DEFAULT_API_URL, ORG),
        ]
    );
}

#[tokio::test]
async fn test_same_substituted_payload_gives_same_value_every_time() {
    let (client, _transport) = fixture_client();

    let first = client.public_repos(None).await.expect("first");
    let second = client.public_repos(None).await.expect("second");
    let third = client.public_repos(None).await.expect("third");

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[tokio::test]
async fn test_transport_error_propagates_from_listing() {
    // Org payload resolves, the repos URL does not
    let transport = Arc::new(MockTransport::new().with_response(
        format!("{}/orgs/{}", DEFAULT_API_URL, ORG),
        org_payload(),
    ));

    let client = OrgClient::new(ORG, transport as Arc<dyn ApiTransport>);

    let err = client
        .public_repos(None)
        .await
        .expect_err("missing listing should fail");
    assert!(matches!(
        err,
        ClientError::Transport(TransportError::Status { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_custom_base_url_is_respected() {
    let base = "https://github.example.internal/api/v3";
    let transport = Arc::new(
        MockTransport::new().with_response(
            format!("{}/orgs/{}", base, ORG),
            json!({"login": ORG, "id": 7}),
        ),
    );

    let client = OrgClient::with_base_url(ORG, transport.clone() as Arc<dyn ApiTransport>, base);

    let org = client.org().await.expect("org fetch should succeed");
    assert_eq!(org["id"], 7);
    assert_eq!(transport.calls(), vec![format!("{}/orgs/{}", base, ORG)]);
}

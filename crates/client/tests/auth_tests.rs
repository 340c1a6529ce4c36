//! HTTP Digest handshake tests.
//!
//! # Invariants
//! - A challenge is answered exactly once per request
//! - Later requests reuse the cached challenge with an incremented nonce count
//! - A rejected answer is reported as `Unauthorized`, never retried

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{header_exists, header_regex, method, path};

const CHALLENGE: &str = r#"Digest realm="MMS Public API", domain="", nonce="OSDV3ZXQ4Hr4Y/xJdLz8iu3RoUNXOKLJ", algorithm=MD5, qop="auth", stale=false"#;

async fn mount_challenge(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("WWW-Authenticate", CHALLENGE)
                .set_body_json(json!({
                    "error": 401,
                    "detail": "You are not authorized for this resource.",
                    "reason": "Unauthorized"
                })),
        )
        .with_priority(10)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_challenge_is_answered_and_reused() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{API}/groups")))
        .and(header_exists("authorization"))
        .and(header_regex("authorization", r#"^Digest username="PUBLIC""#))
        .and(header_regex("authorization", r#"realm="MMS Public API""#))
        .and(header_regex("authorization", r#"uri="/api/atlas/v1\.0/groups\?"#))
        .and(header_regex("authorization", r"qop=auth, nc=0000000[12]"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .with_priority(1)
        .mount(&mock_server)
        .await;
    mount_challenge(&mock_server).await;

    let client = unscoped_client(&mock_server);
    assert!(client.list_projects().await.unwrap().is_empty());
    assert!(client.list_projects().await.unwrap().is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    // Unauthenticated probe, answered request, then one pre-emptive request.
    assert_eq!(requests.len(), 3);
    assert!(!requests[0].headers.contains_key("authorization"));
    let third = requests[2].headers["authorization"].to_str().unwrap();
    assert!(third.contains("nc=00000002"), "{third}");
}

#[tokio::test]
async fn test_rejected_answer_is_unauthorized() {
    let mock_server = MockServer::start().await;
    mount_challenge(&mock_server).await;

    let err = unscoped_client(&mock_server)
        .list_projects()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized(_)), "got {err:?}");
    assert!(err.is_auth_error());
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_unauthorized_without_challenge_is_not_answered() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": 401})))
        .mount(&mock_server)
        .await;

    let err = unscoped_client(&mock_server)
        .list_projects()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Unauthorized(_)));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}

use anyhow::Result;
use fcm_legacy::{FcmClient, FcmError, HttpMessage, HttpResponse, NotificationPayload};
use serde_json::json;
use tokio::net::TcpListener;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const SERVER_KEY: &str = "test-server-key";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fcm_legacy=debug")
        .with_test_writer()
        .try_init();
}

fn client_for(server: &MockServer) -> FcmClient {
    FcmClient::new(SERVER_KEY).with_endpoint_url(format!("{}/fcm/send", server.uri()))
}

/// Test: A 200 reply is parsed into a fully populated response
#[tokio::test]
async fn test_successful_send_parses_response() -> Result<()> {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fcm/send"))
        .and(header("Authorization", "key=test-server-key"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "multicast_id": 123,
            "success": 1,
            "failure": 0,
            "canonical_ids": 0,
            "message_id": 456
        })))
        .expect(1)
        .mount(&server)
        .await;

    let message = HttpMessage::new()
        .with_to("device-token")
        .with_notification(NotificationPayload::new("T", "B"));

    let response = client_for(&server).send(&message).await?;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.multicast_id, 123);
    assert_eq!(response.success, 1);
    assert_eq!(response.failure, 0);
    assert_eq!(response.canonical_ids, 0);
    assert_eq!(response.message_id, Some(456));
    assert!(response.results.is_empty());
    assert!(response.is_success());

    Ok(())
}

/// Test: The request body omits every unset field
#[tokio::test]
async fn test_request_body_matches_message() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_json(json!({
            "registration_ids": ["a", "b"],
            "priority": "high",
            "time_to_live": 120,
            "dry_run": true,
            "data": { "k": "v" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "multicast_id": 1,
            "success": 2,
            "failure": 0,
            "canonical_ids": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let message = HttpMessage::new()
        .with_registration_ids(["a"])
        .with_registration_ids(["b"])
        .with_priority("high")
        .with_time_to_live(120)
        .with_dry_run(true)
        .with_data(json!({ "k": "v" }));

    let response = client_for(&server).send(&message).await?;

    assert_eq!(response.success, 2);
    assert_eq!(response.message_id, None);

    Ok(())
}

/// Test: Multicast results keep per-recipient order and errors
#[tokio::test]
async fn test_multicast_results_are_parsed() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "multicast_id": 99,
            "success": 1,
            "failure": 1,
            "canonical_ids": 0,
            "results": [
                { "message_id": 1001 },
                { "error": "NotRegistered" }
            ]
        })))
        .mount(&server)
        .await;

    let message = HttpMessage::new().with_registration_ids(["ok", "gone"]);
    let response = client_for(&server).send(&message).await?;

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].message_id, 1001);
    assert_eq!(response.results[0].error, None);
    assert_eq!(response.results[1].error.as_deref(), Some("NotRegistered"));

    let failed: Vec<usize> = response.failed_results().map(|(index, _)| index).collect();
    assert_eq!(failed, vec![1]);

    Ok(())
}

/// Test: A non-200 status is returned without an error and without parsing
#[tokio::test]
async fn test_non_success_status_returns_only_status_code() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("<html>Unauthorized</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let message = HttpMessage::new().with_to("device-token");
    let response = client_for(&server).send(&message).await?;

    assert_eq!(response, HttpResponse::with_status(401));
    assert!(!response.is_success());

    Ok(())
}

/// Test: A 200 reply with a malformed body surfaces a parse error
#[tokio::test]
async fn test_malformed_body_is_deserialization_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ invalid json }"))
        .mount(&server)
        .await;

    let message = HttpMessage::new().with_to("device-token");
    let result = client_for(&server).send(&message).await;

    let error = result.expect_err("malformed body should fail");
    assert!(matches!(
        error,
        FcmError::Deserialization {
            status_code: 200,
            ..
        }
    ));
    assert_eq!(error.status_code(), Some(200));

    Ok(())
}

/// Test: An unreachable endpoint returns a transport error instead of panicking
#[tokio::test]
async fn test_connection_failure_is_transport_error() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    drop(listener);

    let client = FcmClient::new(SERVER_KEY).with_endpoint_url(format!("http://{}/fcm/send", address));
    let result = client.send(&HttpMessage::new().with_to("device-token")).await;

    let error = result.expect_err("connection should be refused");
    assert!(matches!(error, FcmError::Transport { .. }));
    assert_eq!(error.status_code(), None);

    Ok(())
}

/// Test: An empty server key is rejected before any request is made
#[tokio::test]
async fn test_empty_server_key_sends_nothing() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = FcmClient::new("").with_endpoint_url(format!("{}/fcm/send", server.uri()));
    let result = client.send(&HttpMessage::new().with_to("device-token")).await;

    assert!(matches!(result, Err(FcmError::MissingServerKey)));

    Ok(())
}

/// Test: Replacing the server key changes the credential header
#[tokio::test]
async fn test_set_server_key_updates_authorization() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("Authorization", "key=rotated-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message_id": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.set_server_key("rotated-key");

    let response = client.send(&HttpMessage::new().with_to("device-token")).await?;

    assert_eq!(response.message_id, Some(7));
    assert_eq!(response.multicast_id, 0);

    Ok(())
}

//! SettingsClient and worker against a mock admin API.

mod common;

use anysettings::api::{command_channel, run_worker, ApiCommand, ApiError, ApiEvent, SettingsClient};
use anysettings::config::{AuthConfig, SecureString, ServerConfig};
use serde_json::{json, Map, Value};

use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, settings_body, TEST_KEY};

fn values(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

#[tokio::test]
async fn fetch_sends_authenticated_get() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(&settings_body().to_string()))
        .await;

    let settings = client_for(&backend).fetch_settings().await.unwrap();
    let keys: Vec<&str> = settings.fields().iter().map(|f| f.key).collect();
    assert_eq!(keys, ["enabled", "mode", "tags", "max_budget", "team"]);
    assert_eq!(
        settings.schema.description.as_deref(),
        Some("Defaults for new internal users")
    );

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/get/internal_user_settings");
    let expected = format!("Bearer {}", TEST_KEY);
    assert_eq!(requests[0].header("authorization"), Some(expected.as_str()));
}

#[tokio::test]
async fn update_patches_values_and_returns_saved() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"settings": {"enabled": true, "mode": "b"}}"#,
        ))
        .await;

    let body = values(json!({ "enabled": true, "mode": "b" }));
    let saved = client_for(&backend).update_settings(&body).await.unwrap();
    assert_eq!(saved, body);

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(requests[0].path, "/update/internal_user_settings");
    assert_eq!(requests[0].body_json(), json!({ "enabled": true, "mode": "b" }));
}

#[tokio::test]
async fn custom_header_name_carries_bearer_value() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(&settings_body().to_string()))
        .await;

    let server = ServerConfig {
        base_url: format!("{}/", backend.base_url()),
        ..ServerConfig::default()
    };
    let auth = AuthConfig {
        header_name: "x-litellm-api-key".to_string(),
        ..AuthConfig::default()
    };
    let client =
        SettingsClient::new(&server, &auth, &SecureString::new("sk-custom".to_string())).unwrap();
    client.fetch_settings().await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].path, "/get/internal_user_settings");
    assert_eq!(
        requests[0].header("x-litellm-api-key"),
        Some("Bearer sk-custom")
    );
    assert_eq!(requests[0].header("authorization"), None);
}

#[tokio::test]
async fn forbidden_maps_to_permission_denied() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::status(
            403,
            r#"{"error": {"message": "Only proxy admins can view this"}}"#,
        ))
        .await;

    let err = client_for(&backend).fetch_settings().await.unwrap_err();
    match &err {
        ApiError::StatusError { status, message } => {
            assert_eq!(*status, 403);
            assert_eq!(message, "Only proxy admins can view this");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.user_message(), "Permission denied");
}

#[tokio::test]
async fn server_error_uses_detail_text() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::status(500, r#"{"detail": "database offline"}"#))
        .await;

    let body = values(json!({ "enabled": false }));
    let err = client_for(&backend).update_settings(&body).await.unwrap_err();
    assert_eq!(err.user_message(), "database offline (500)");
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json("<html>proxy</html>"))
        .await;

    let err = client_for(&backend).fetch_settings().await.unwrap_err();
    assert!(matches!(err, ApiError::DecodeError { .. }));
    assert_eq!(err.error_type(), "decode_error");
}

#[tokio::test]
async fn slow_server_times_out() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(&settings_body().to_string()).with_delay(2_500))
        .await;

    let server = ServerConfig {
        base_url: backend.base_url(),
        timeout_seconds: 1,
        ..ServerConfig::default()
    };
    let client = SettingsClient::new(
        &server,
        &AuthConfig::default(),
        &SecureString::new(TEST_KEY.to_string()),
    )
    .unwrap();

    let err = client.fetch_settings().await.unwrap_err();
    assert!(matches!(err, ApiError::RequestTimeout { duration: 1 }));
}

#[tokio::test]
async fn unreachable_server_is_connection_error() {
    let server = ServerConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..ServerConfig::default()
    };
    let client = SettingsClient::new(
        &server,
        &AuthConfig::default(),
        &SecureString::new(TEST_KEY.to_string()),
    )
    .unwrap();

    let err = client.fetch_settings().await.unwrap_err();
    assert!(matches!(err, ApiError::ConnectionError { .. }));
    assert_eq!(err.user_message(), "Could not reach the server");
}

#[tokio::test]
async fn worker_answers_commands_in_order() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(&settings_body().to_string()))
        .await;
    backend
        .enqueue_response(MockResponse::status(401, r#"{"error": "bad key"}"#))
        .await;

    let (tx, rx) = command_channel();
    let (event_tx, event_rx) = std::sync::mpsc::channel();
    let worker = tokio::spawn(run_worker(client_for(&backend), rx, move |event| {
        let _ = event_tx.send(event);
    }));

    tx.send(ApiCommand::Fetch).await.unwrap();
    tx.send(ApiCommand::Save {
        values: values(json!({ "enabled": true })),
    })
    .await
    .unwrap();
    drop(tx);
    worker.await.unwrap();

    let events: Vec<ApiEvent> = event_rx.try_iter().collect();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], ApiEvent::Fetched(Ok(settings)) if settings.field_count() == 5));
    assert_eq!(
        events[1],
        ApiEvent::Saved(Err("Permission denied".to_string()))
    );

    let requests = backend.captured_requests().await;
    assert_eq!(requests[1].method, "PATCH");
}

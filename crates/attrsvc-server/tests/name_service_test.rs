mod common;

use attrsvc_config::ServiceKind;
use axum::http::{Method, StatusCode};
use common::{send, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_put_then_get_round_trip() {
    let app = TestApp::new(ServiceKind::Name).await;

    let (status, body) = send(
        app.router(),
        Method::PUT,
        "/users/42/name",
        Some(r#"{"name":"Ada"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "User name updated successfully"}));

    let (status, body) = send(app.router(), Method::GET, "/users/42/name", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": "42", "name": "Ada"}));
}

#[tokio::test]
async fn test_get_unknown_user_is_404() {
    let app = TestApp::new(ServiceKind::Name).await;

    let (status, body) = send(app.router(), Method::GET, "/users/999/name", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "User not found"}));
}

#[tokio::test]
async fn test_put_on_unknown_user_creates_it() {
    let app = TestApp::new(ServiceKind::Name).await;

    let (status, _) = send(
        app.router(),
        Method::PUT,
        "/users/new-user/name",
        Some(r#"{"name":"Grace"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app.router(), Method::GET, "/users/new-user/name", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Grace");
}

#[tokio::test]
async fn test_put_overwrites_previous_name() {
    let app = TestApp::new(ServiceKind::Name).await;

    for name in ["Ada", "Ada Lovelace"] {
        let body = json!({ "name": name }).to_string();
        let (status, _) = send(app.router(), Method::PUT, "/users/1/name", Some(&body)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(app.router(), Method::GET, "/users/1/name", None).await;
    assert_eq!(body, json!({"id": "1", "name": "Ada Lovelace"}));
}

#[tokio::test]
async fn test_put_missing_field_is_400_and_writes_nothing() {
    let app = TestApp::new(ServiceKind::Name).await;

    let (status, body) = send(app.router(), Method::PUT, "/users/5/name", Some("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = send(app.router(), Method::GET, "/users/5/name", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_puts_leave_one_of_the_written_values() {
    let app = TestApp::new(ServiceKind::Name).await;
    let candidates: Vec<String> = (0..8).map(|i| format!("writer-{}", i)).collect();

    let mut handles = Vec::new();
    for name in candidates.clone() {
        let router = app.router();
        handles.push(tokio::spawn(async move {
            let body = json!({ "name": name }).to_string();
            send(router, Method::PUT, "/users/shared/name", Some(&body)).await.0
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::OK);
    }

    let (status, body) = send(app.router(), Method::GET, "/users/shared/name", None).await;
    assert_eq!(status, StatusCode::OK);
    let stored = body["name"].as_str().unwrap().to_string();
    assert!(candidates.contains(&stored));
}

#[tokio::test]
async fn test_health_and_readiness() {
    let app = TestApp::new(ServiceKind::Name).await;

    let (status, body) = send(app.router(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "name_service");

    let (status, _) = send(app.router(), Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_not_ready_after_storage_is_closed() {
    let app = TestApp::new(ServiceKind::Name).await;
    app.app.pool().close().await;

    let (status, body) = send(app.router(), Method::GET, "/ready", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_get_after_storage_is_closed_is_500() {
    let app = TestApp::new(ServiceKind::Name).await;
    app.app.pool().close().await;

    let (status, body) = send(app.router(), Method::GET, "/users/1/name", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Database error"));
}

#![allow(dead_code)]

use attrsvc_config::{AppConfig, ServiceKind};
use attrsvc_server::App;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;

/// A service wired against a throwaway database file.
pub struct TestApp {
    pub app: App,
    pub dir: TempDir,
}

impl TestApp {
    pub async fn new(kind: ServiceKind) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::for_service(kind);
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.database.url = format!(
            "sqlite://{}",
            dir.path().join(format!("{}.db", kind.service_name())).display()
        );

        let app = App::build(config).await.unwrap();
        Self { app, dir }
    }

    pub fn router(&self) -> Router {
        self.app.router()
    }
}

pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_owned())
        }
        None => Body::empty(),
    };

    let response = router.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

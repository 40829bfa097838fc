#![allow(dead_code)]

use async_trait::async_trait;
use attrsvc_core::{AttrResult, HealthCheck, HealthStatus, Logger, NamedUser, ScoredUser};
use attrsvc_rest::{create_name_router, create_score_router, HealthState, NameState, ScoreState};
use attrsvc_service::{NameService, ScoreService};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use mockall::mock;
use std::sync::Arc;
use tower::ServiceExt;

mock! {
    pub Names {}

    #[async_trait]
    impl NameService for Names {
        async fn get_user_name(&self, id: &str) -> AttrResult<Option<NamedUser>>;
        async fn update_user_name(&self, id: &str, name: &str) -> AttrResult<()>;
    }
}

mock! {
    pub Scores {}

    #[async_trait]
    impl ScoreService for Scores {
        async fn get_user_score(&self, id: &str) -> AttrResult<Option<ScoredUser>>;
        async fn update_user_score(&self, id: &str, score: i64) -> AttrResult<()>;
    }
}

/// Readiness probe with a fixed answer.
pub struct FixedHealth(pub HealthStatus);

#[async_trait]
impl HealthCheck for FixedHealth {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn check(&self) -> HealthStatus {
        self.0.clone()
    }
}

pub fn healthy(service: &'static str) -> HealthState {
    HealthState::new(service, Arc::new(FixedHealth(HealthStatus::Healthy)))
}

pub fn name_router(service: MockNames) -> Router {
    create_name_router(
        NameState::new(Arc::new(service), Logger::detached()),
        healthy("name_service"),
    )
}

pub fn score_router(service: MockScores) -> Router {
    create_score_router(
        ScoreState::new(Arc::new(service), Logger::detached()),
        healthy("score_service"),
    )
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

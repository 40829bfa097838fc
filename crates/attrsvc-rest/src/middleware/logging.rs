//! Request logging middleware.

use attrsvc_core::Logger;
use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::time::Instant;
use tracing::info;

/// Emits one line per request with method, path, client address, status and latency.
///
/// The client address is only known when the server was started with
/// `into_make_service_with_connect_info`; otherwise it is logged as `-`.
pub async fn logging_middleware(
    State(logger): State<Logger>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let client_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "-".to_string(), |ConnectInfo(addr)| addr.to_string());
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();

    info!(
        target: "http",
        parent: logger.span(),
        method = %method,
        path = %path,
        client_addr = %client_addr,
        status = response.status().as_u16(),
        latency_ms = latency.as_secs_f64() * 1000.0,
        "HTTP request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Router};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use tracing::subscriber::DefaultGuard;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture() -> (CapturedLogs, DefaultGuard) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    fn app() -> Router {
        Router::new()
            .route("/users/:id/name", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(
                Logger::new("name_service"),
                logging_middleware,
            ))
    }

    #[tokio::test]
    async fn test_request_line_carries_every_field() {
        let (logs, _guard) = capture();

        let request = Request::builder()
            .uri("/users/42/name?verbose=1")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), 200);

        let output = logs.contents();
        assert!(output.contains("http: "), "{output}");
        assert!(output.contains("HTTP request completed"), "{output}");
        assert!(output.contains("method=GET"), "{output}");
        assert!(output.contains("path=/users/42/name "), "{output}");
        assert!(output.contains("client_addr=-"), "{output}");
        assert!(output.contains("status=200"), "{output}");
        assert!(output.contains("latency_ms="), "{output}");
        assert!(output.contains("name_service"), "{output}");
    }

    #[tokio::test]
    async fn test_request_line_uses_connect_info() {
        let (logs, _guard) = capture();

        let mut request = Request::builder()
            .method("PUT")
            .uri("/missing")
            .body(Body::empty())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40123))));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), 404);

        let output = logs.contents();
        assert!(output.contains("method=PUT"), "{output}");
        assert!(output.contains("path=/missing"), "{output}");
        assert!(output.contains("client_addr=127.0.0.1:40123"), "{output}");
        assert!(output.contains("status=404"), "{output}");
    }
}

//! HTTP server construction and lifecycle

use crate::{
    config::Config,
    error::{CalcError, Result},
    service::{
        handlers::{add_handler, not_found},
        middleware::apply_middleware,
    },
};
use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// The calculator HTTP service
#[derive(Debug, Clone)]
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server with the given configuration
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Routes wrapped in the full middleware stack
    pub fn router() -> Router {
        apply_middleware(
            Router::new()
                .route("/add/{a}/{b}", get(add_handler))
                .fallback(not_found),
        )
    }

    /// Bind the configured address and serve until shutdown
    #[instrument(skip(self), fields(addr = %self.config.server.listen_addr))]
    pub async fn run(self) -> Result<()> {
        let addr = self.config.server.listen_addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| CalcError::server(format!("Failed to bind to {addr}"), e))?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C or SIGTERM
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let local_addr = listener
            .local_addr()
            .map_err(|e| CalcError::server("Failed to read listener address", e))?;
        info!("Listening on http://{local_addr}");

        axum::serve(listener, Self::router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| CalcError::server("Server terminated", e))?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl-C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tokio::io::{AsyncReadExt as _, AsyncWriteExt as _};
    use tower::ServiceExt as _;
    use tracing_test::traced_test;

    fn create_test_router() -> Router {
        Server::router()
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = create_test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_add_returns_json() {
        let (status, json) = get_json("/add/2/2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"A": 2, "B": 2, "Result": 4}));
    }

    #[tokio::test]
    async fn test_add_negative_operands() {
        let (status, json) = get_json("/add/-10/3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["Result"], -7);
    }

    #[tokio::test]
    async fn test_add_wraps_on_overflow() {
        let (status, json) = get_json("/add/9223372036854775807/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["Result"], i64::MIN);
    }

    #[tokio::test]
    async fn test_invalid_operand_is_bad_request() {
        let (status, json) = get_json("/add/abc/2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["message"],
            "parsing \"abc\": invalid digit found in string"
        );
    }

    #[tokio::test]
    async fn test_second_operand_checked() {
        let (status, json) = get_json("/add/2/1.5").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].as_str().unwrap().contains("\"1.5\""));
    }

    #[tokio::test]
    async fn test_undecodable_segment_is_json_bad_request() {
        let request = Request::builder()
            .method("GET")
            .uri("/add/%FF/2")
            .body(Body::empty())
            .unwrap();

        let response = create_test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json["message"].as_str().unwrap().contains("UTF-8"), "{json}");
    }

    #[tokio::test]
    #[traced_test]
    async fn test_requests_are_logged() {
        let (status, _) = get_json("/add/2/2").await;
        assert_eq!(status, StatusCode::OK);

        assert!(logs_contain("method=GET"));
        assert!(logs_contain("path=/add/2/2"));
        assert!(logs_contain("status=200"));
        assert!(logs_contain("latency_ms"));

        let (status, _) = get_json("/add/abc/2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert!(logs_contain("path=/add/abc/2"));
        assert!(logs_contain("status=400"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, json) = get_json("/sub/2/2").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Not Found");
    }

    #[tokio::test]
    async fn test_wrong_method_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/add/1/2")
            .body(Body::empty())
            .unwrap();

        let response = create_test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_serve_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(Server::new(Config::default()).serve(listener));

        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /add/3/3 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();

        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 200 OK"), "{raw}");
        assert!(raw.ends_with(r#"{"A":3,"B":3,"Result":6}"#), "{raw}");

        server.abort();
    }
}

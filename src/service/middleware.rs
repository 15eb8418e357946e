//! Request logging and panic recovery

use crate::service::handlers::error_response;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use std::{any::Any, time::Duration};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{OnResponse, TraceLayer},
};
use tracing::{Span, error, field::Empty, info};

/// Wrap `router` with the middleware every request goes through.
///
/// Outermost first: request logging, then panic recovery, then the routes.
/// Responses produced by the panic guard are therefore logged too.
pub fn apply_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<Body>| {
                    tracing::info_span!(
                        "http_request",
                        method = %req.method(),
                        path = %req.uri().path(),
                        status = Empty,
                        latency_ms = Empty,
                    )
                })
                .on_response(LogResponse),
        )
}

/// Records status and latency on the request span once a response is ready
#[derive(Debug, Clone, Copy)]
pub struct LogResponse;

impl<B> OnResponse<B> for LogResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status().as_u16();
        let latency_ms = latency.as_millis();

        span.record("status", status);
        span.record("latency_ms", latency_ms);
        info!(status, latency_ms, "request completed");
    }
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "Request handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

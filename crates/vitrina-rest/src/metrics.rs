//! Metrics middleware and instrumentation for the catalog REST API.

use std::sync::OnceLock;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Request duration histogram.
pub const REQUEST_DURATION: &str = "vitrina_request_duration_seconds";

/// Request counter.
pub const REQUEST_TOTAL: &str = "vitrina_request_total";

/// Request error counter (4xx/5xx responses).
pub const REQUEST_ERROR_TOTAL: &str = "vitrina_request_error_total";

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static METRICS_REGISTERED: OnceLock<()> = OnceLock::new();

/// Registers metric descriptions.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn register_metrics() {
    METRICS_REGISTERED.get_or_init(|| {
        describe_histogram!(
            REQUEST_DURATION,
            "Duration of catalog REST requests in seconds"
        );
        describe_counter!(REQUEST_TOTAL, "Total number of catalog REST requests");
        describe_counter!(
            REQUEST_ERROR_TOTAL,
            "Total number of catalog REST requests returning 4xx/5xx"
        );
    });
}

/// Initializes the global Prometheus metrics recorder.
///
/// Safe to call multiple times; subsequent calls are no-ops.
///
/// # Panics
///
/// Panics if the Prometheus recorder cannot be installed. This is a
/// critical initialization failure that should not occur in normal
/// operation.
#[allow(clippy::panic)]
pub fn init_metrics() -> PrometheusHandle {
    PROMETHEUS_HANDLE
        .get_or_init(|| {
            let builder = PrometheusBuilder::new();
            let handle = builder
                .install_recorder()
                .unwrap_or_else(|e| panic!("failed to install prometheus recorder: {e}"));

            register_metrics();

            tracing::info!("catalog metrics recorder initialized");
            handle
        })
        .clone()
}

/// Returns the global Prometheus handle, if initialized.
#[must_use]
pub fn prometheus_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

/// Middleware that records request metrics.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let path = request.extensions().get::<MatchedPath>().map_or_else(
        || request.uri().path().to_string(),
        |mp| mp.as_str().to_string(),
    );
    let method = request.method().to_string();

    let response = next.run(request).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();
    let status_class = status_class(response.status());

    let labels = [
        ("endpoint", path.clone()),
        ("method", method.clone()),
        ("status", status),
        ("status_class", status_class.to_string()),
    ];

    histogram!(REQUEST_DURATION, &labels).record(duration);
    counter!(REQUEST_TOTAL, &labels).increment(1);
    if should_record_error(response.status()) {
        counter!(REQUEST_ERROR_TOTAL, &labels).increment(1);
    }

    if duration > 1.0 {
        tracing::warn!(
            endpoint = %path,
            method = %method,
            duration_secs = %duration,
            "slow catalog request detected"
        );
    }

    response
}

fn status_class(status: StatusCode) -> &'static str {
    match status.as_u16() {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}

fn should_record_error(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

/// Handler for the `/metrics` endpoint.
#[allow(clippy::must_use_candidate)] // Route handler, return value used by framework
pub fn serve_metrics() -> impl IntoResponse {
    prometheus_handle().map_or_else(
        || {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                [("content-type", "text/plain; charset=utf-8")],
                "Metrics not initialized".to_string(),
            )
        },
        |handle| {
            let metrics = handle.render();
            (
                StatusCode::OK,
                [("content-type", "text/plain; charset=utf-8")],
                metrics,
            )
        },
    )
}

//! Prometheus metrics for the API server.

use axum::body::Body;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Initialize the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "emo_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "emo_http_request_duration_seconds";
    pub const HTTP_REQUESTS_IN_FLIGHT: &str = "emo_http_requests_in_flight";

    // Inference metrics
    pub const PREDICTIONS_TOTAL: &str = "emo_predictions_total";
    pub const FACES_DETECTED_TOTAL: &str = "emo_faces_detected_total";
    pub const NO_FACE_REQUESTS_TOTAL: &str = "emo_no_face_requests_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record one prediction pass and how many faces it found.
pub fn record_prediction(faces: usize) {
    counter!(names::PREDICTIONS_TOTAL).increment(1);
    if faces == 0 {
        counter!(names::NO_FACE_REQUESTS_TOTAL).increment(1);
    } else {
        counter!(names::FACES_DETECTED_TOTAL).increment(faces as u64);
    }
}

/// Metrics middleware for HTTP requests.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).increment(1.0);

    let response = next.run(request).await;

    gauge!(names::HTTP_REQUESTS_IN_FLIGHT).decrement(1.0);

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}

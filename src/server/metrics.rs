use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, IntCounter, Opts, Registry, TextEncoder};
use std::time::Duration;

use crate::media::ResolutionSource;
use crate::providers::ProviderError;

/// Metric name prefix for all Ambience metrics
const PREFIX: &str = "ambience";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Generation Metrics
    pub static ref GENERATE_REQUESTS_TOTAL: IntCounter = IntCounter::new(
        format!("{PREFIX}_generate_requests_total"),
        "Total number of prompts processed"
    ).expect("Failed to create generate_requests_total metric");

    pub static ref KEYWORD_EXTRACTIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_keyword_extractions_total"), "Keyword extractions by path taken"),
        &["path"]
    ).expect("Failed to create keyword_extractions_total metric");

    pub static ref MEDIA_RESOLUTIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_media_resolutions_total"), "Resolved media by kind and source"),
        &["kind", "source"]
    ).expect("Failed to create media_resolutions_total metric");

    // Provider Metrics
    pub static ref PROVIDER_ERRORS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_provider_errors_total"), "Media provider failures"),
        &["provider", "error_type"]
    ).expect("Failed to create provider_errors_total metric");

    pub static ref PROVIDER_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_provider_request_duration_seconds"),
            "Media provider request duration in seconds"
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0]),
        &["provider"]
    ).expect("Failed to create provider_request_duration_seconds metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(GENERATE_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(KEYWORD_EXTRACTIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(MEDIA_RESOLUTIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(PROVIDER_ERRORS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(PROVIDER_REQUEST_DURATION_SECONDS.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();
    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

pub fn record_generate_request() {
    GENERATE_REQUESTS_TOTAL.inc();
}

/// `path` is one of "preferred", "degraded" or "empty".
pub fn record_keyword_extraction(path: &str) {
    KEYWORD_EXTRACTIONS_TOTAL.with_label_values(&[path]).inc();
}

pub fn record_media_resolution(kind: &str, source: ResolutionSource) {
    MEDIA_RESOLUTIONS_TOTAL
        .with_label_values(&[kind, source.as_str()])
        .inc();
}

pub fn record_provider_error(provider: &str, error: &ProviderError) {
    PROVIDER_ERRORS_TOTAL
        .with_label_values(&[provider, error.kind()])
        .inc();
}

pub fn record_provider_request(provider: &str, duration: Duration) {
    PROVIDER_REQUEST_DURATION_SECONDS
        .with_label_values(&[provider])
        .observe(duration.as_secs_f64());
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}

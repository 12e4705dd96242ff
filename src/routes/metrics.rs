//! Prometheus metrics endpoint
//!
//! Exposes application metrics in Prometheus format for monitoring.

use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus recorder")
});

/// Initialize metrics (call once at startup)
pub fn init_metrics() {
    // Force initialization of the lazy static
    let _ = &*PROMETHEUS_HANDLE;

    register_metrics();
}

/// Register all custom metrics
fn register_metrics() {
    metrics::describe_counter!(
        "atelier_generations_total",
        "Total number of image generation requests by outcome"
    );
    metrics::describe_histogram!(
        "atelier_generation_duration_seconds",
        "Image generation request duration in seconds"
    );
    metrics::describe_counter!(
        "atelier_session_updates_total",
        "Total session text updates from provider responses"
    );
    metrics::describe_counter!(
        "atelier_prompt_keywords_total",
        "Total keywords appended to prompts"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns metrics in Prometheus text format for scraping.
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE.render()
}

/// Record a generation request
pub fn record_generation(outcome: &str, duration_secs: f64) {
    metrics::counter!("atelier_generations_total", "outcome" => outcome.to_string())
        .increment(1);
    metrics::histogram!("atelier_generation_duration_seconds").record(duration_secs);
}

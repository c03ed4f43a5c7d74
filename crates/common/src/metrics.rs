//! Prometheus metrics for the intake endpoints (default registry).

use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, register_int_counter_vec, Encoder, IntCounter, IntCounterVec, TextEncoder};

pub static SUBMISSIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "client_intake_submissions_total",
        "Total client records persisted via submit"
    )
    .expect("register submissions_total")
});

pub static FETCHES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "client_intake_fetches_total",
        "Total successful fetch requests"
    )
    .expect("register fetches_total")
});

pub static STORE_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "client_intake_store_errors_total",
        "Record store failures by operation",
        &["operation"]
    )
    .expect("register store_errors_total")
});

/// Force registration so `/metrics` lists every series from the first scrape.
pub fn init() {
    Lazy::force(&SUBMISSIONS_TOTAL);
    Lazy::force(&FETCHES_TOTAL);
    Lazy::force(&STORE_ERRORS_TOTAL);
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_output_lists_intake_counters() {
        init();
        SUBMISSIONS_TOTAL.inc();
        STORE_ERRORS_TOTAL.with_label_values(&["fetch"]).inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("client_intake_submissions_total"));
        assert!(body.contains("client_intake_store_errors_total{operation=\"fetch\"}"));
    }
}

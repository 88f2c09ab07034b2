use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

use service::recipe::StoreError;

// Prometheus metrics (default registry)
pub static STORE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "recipe_store_operations_total",
        "Recipe store operations issued by request handlers",
        &["op", "backend"]
    )
    .expect("register store_operations_total")
});

pub static STORE_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "recipe_store_errors_total",
        "Recipe store operations that returned an error",
        &["op", "kind"]
    )
    .expect("register store_errors_total")
});

/// Count one store call and, if it failed, its error kind.
pub fn record<T>(op: &str, backend: &str, result: &Result<T, StoreError>) {
    STORE_OPERATIONS_TOTAL.with_label_values(&[op, backend]).inc();
    if let Err(e) = result {
        STORE_ERRORS_TOTAL.with_label_values(&[op, e.kind()]).inc();
    }
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}

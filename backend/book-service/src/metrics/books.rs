use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, HistogramVec, IntCounterVec,
};
use std::time::Instant;

lazy_static! {
    /// Book operations by outcome (ok, not_found, invalid, error).
    pub static ref BOOK_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "book_operations_total",
        "Book usecase calls segmented by operation and result",
        &["operation", "result"]
    )
    .expect("failed to register book_operations_total");

    pub static ref BOOK_OPERATION_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "book_operation_duration_seconds",
        "Book usecase latency including the database round trip",
        &["operation"]
    )
    .expect("failed to register book_operation_duration_seconds");
}

/// Record one finished usecase call.
pub fn record_operation(operation: &str, result: &str, started: Instant) {
    BOOK_OPERATIONS_TOTAL
        .with_label_values(&[operation, result])
        .inc();
    BOOK_OPERATION_DURATION_SECONDS
        .with_label_values(&[operation])
        .observe(started.elapsed().as_secs_f64());
}

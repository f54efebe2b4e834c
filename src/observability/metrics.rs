//! Metrics collection.
//!
//! # Metrics
//! - `web3_rpc_requests_total` (counter): RPC calls by method and outcome
//! - `web3_rpc_duration_seconds` (histogram): RPC latency by method
//! - `web3_fallbacks_total` (counter): sentinel values substituted for failures
//! - `web3_transactions_submitted_total` (counter): raw transactions accepted by the node

use std::time::Duration;

/// Record the outcome and latency of a single RPC call.
pub fn record_rpc_call(method: &'static str, success: bool, elapsed: Duration) {
    let outcome = if success { "ok" } else { "error" };
    metrics::counter!("web3_rpc_requests_total", "method" => method, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("web3_rpc_duration_seconds", "method" => method)
        .record(elapsed.as_secs_f64());
}

/// Record that an operation swallowed an error and returned its fallback value.
pub fn record_fallback(operation: &'static str) {
    metrics::counter!("web3_fallbacks_total", "operation" => operation).increment(1);
}

/// Record a transaction accepted by `eth_sendRawTransaction`.
pub fn record_transaction_submitted() {
    metrics::counter!("web3_transactions_submitted_total").increment(1);
}

//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! blockchain / web3 layers produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (RPC counters and latency histograms)
//!
//! Consumers:
//!     → stderr via tracing-subscriber fmt layer
//!     → whatever `metrics` recorder the host process installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a metrics exporter; without a recorder the
//!   macros are no-ops
//! - Private keys are never part of any log event

pub mod logging;
pub mod metrics;

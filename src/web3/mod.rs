//! The `Web3Client` facade.
//!
//! # Data Flow
//! ```text
//! caller intent (balance, transfer, contract read)
//!     → client.rs (construction, credential, settings)
//!     → query.rs (reads: balances, gas, code, token metadata, ENS, receipts)
//!     → submit.rs (writes: signed transfers and contract calls, message signing)
//!     → blockchain::* (RPC, batching, signing)
//! ```
//!
//! # Failure Policy
//! Every operation comes in two forms. `try_*` returns a [`Web3Result`] so the
//! caller can tell a node error from a decode error from a missing credential.
//! The plain form swallows the error and returns a sentinel (`None`, zero, an
//! empty vec or a configured default), logging the cause at debug level and
//! counting it in `web3_fallbacks_total`.
//!
//! [`Web3Result`]: crate::blockchain::Web3Result

pub mod client;
pub mod query;
pub mod submit;

pub use client::{Web3Client, Web3ClientBuilder};

use crate::blockchain::Web3Result;
use crate::observability::metrics;

/// Collapse a result to its value or a fallback.
pub(crate) fn or_fallback<T>(operation: &'static str, result: Web3Result<T>, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(operation, error = %e, "Operation failed, returning fallback");
            metrics::record_fallback(operation);
            fallback
        }
    }
}

/// Collapse a result to `Some(value)` or `None`.
pub(crate) fn or_none<T>(operation: &'static str, result: Web3Result<T>) -> Option<T> {
    or_fallback(operation, result.map(Some), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::Web3Error;

    #[test]
    fn test_or_fallback() {
        assert_eq!(or_fallback("op", Ok(5u64), 0), 5);
        assert_eq!(or_fallback("op", Err(Web3Error::Timeout(1)), 0u64), 0);
    }

    #[test]
    fn test_or_none() {
        assert_eq!(or_none("op", Ok("x")), Some("x"));
        assert_eq!(or_none::<&str>("op", Err(Web3Error::MissingCredential)), None);
    }
}

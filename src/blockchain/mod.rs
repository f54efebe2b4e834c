//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Endpoint (RPC URL, chain id) + optional private key
//!     → wallet.rs (key loading, message and transaction signing)
//!     → client.rs (RPC calls with timeouts and metrics)
//!     → batch.rs (many logical requests per round trip)
//!     → transaction.rs (build, sign, broadcast, receipt polling)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod batch;
pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::BlockchainClient;
pub use transaction::{ReceiptPoller, TxBuilder};
pub use types::{ChainId, Endpoint, TxParams, Web3Error, Web3Result};
pub use wallet::Wallet;

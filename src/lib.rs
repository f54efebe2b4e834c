//! Client-side facade over an Ethereum-compatible JSON-RPC endpoint.
//!
//! Balances, ERC-20/721/1155 token operations, signed transaction
//! submission, gas estimation, message signing and ENS resolution, all
//! delegated to `alloy` for transport, ABI and signing.

pub mod blockchain;
pub mod config;
pub mod contracts;
pub mod observability;
pub mod web3;

pub use blockchain::{Web3Error, Web3Result};
pub use config::Web3Config;
pub use web3::Web3Client;

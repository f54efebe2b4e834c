//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::blockchain::wallet::PRIVATE_KEY_ENV_VAR;

/// Root configuration for the Web3 client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Web3Config {
    /// JSON-RPC endpoint settings.
    pub rpc: RpcConfig,

    /// Signing credential settings.
    pub credential: CredentialConfig,

    /// Fallback gas values used when the node cannot supply them.
    pub gas: GasConfig,

    /// Receipt polling settings.
    pub receipts: ReceiptConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// JSON-RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL.
    pub url: String,

    /// Chain ID used for EIP-155 replay protection (e.g., 1 for mainnet, 4689 for IoTeX).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub timeout_secs: u64,

    /// Check `eth_chainId` against `chain_id` before running a command.
    ///
    /// Acted on by the `web3-client` binary, which warns on mismatch.
    /// Library users call [`Web3Client::verify_chain_id`] themselves.
    ///
    /// [`Web3Client::verify_chain_id`]: crate::Web3Client::verify_chain_id
    pub verify_chain_id: bool,

    /// ENS registry address override. The canonical registry is used when unset.
    pub ens_registry: Option<String>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8545".to_string(),
            chain_id: 1,
            timeout_secs: 10,
            verify_chain_id: false,
            ens_registry: None,
        }
    }
}

/// Signing credential configuration.
///
/// The private key itself never lives in the config file; only the name of
/// the environment variable that holds it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialConfig {
    /// Environment variable holding the hex private key.
    pub private_key_env: String,

    /// Caller address for a read-only client (no private key).
    pub from_address: Option<String>,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            private_key_env: PRIVATE_KEY_ENV_VAR.to_string(),
            from_address: None,
        }
    }
}

/// Gas fallback configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GasConfig {
    /// Gas price in wei returned when `eth_gasPrice` fails.
    pub default_gas_price_wei: u128,

    /// Gas limit returned when `eth_estimateGas` fails.
    pub default_gas_limit: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            default_gas_price_wei: 4_100_000_000,
            default_gas_limit: 9_000_000,
        }
    }
}

/// Receipt polling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReceiptConfig {
    /// Delay between `eth_getTransactionReceipt` polls in milliseconds.
    pub poll_interval_ms: u64,

    /// Maximum number of polls before giving up.
    pub poll_attempts: u32,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 15_000,
            poll_attempts: 40,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

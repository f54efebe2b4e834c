//! Chain-specific types and error definitions.

use alloy::primitives::{Address, Bytes, U256};
use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// RPC endpoint: URL plus the chain it serves. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: url::Url,
    pub chain_id: ChainId,
}

impl Endpoint {
    /// Parse an endpoint from a URL string.
    pub fn parse(url: &str, chain_id: u64) -> Web3Result<Self> {
        let url = url
            .parse()
            .map_err(|e| Web3Error::Config(format!("Invalid RPC URL '{}': {}", url, e)))?;
        Ok(Self {
            url,
            chain_id: ChainId(chain_id),
        })
    }
}

/// Errors that can occur during Web3 operations.
#[derive(Debug, Error)]
pub enum Web3Error {
    /// Invalid configuration (URL, address, key).
    #[error("Configuration error: {0}")]
    Config(String),

    /// RPC connection or request failed, or the node rejected the request.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// A response did not have the expected ABI shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Invalid private key format or signing failure.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// A signing operation was requested on a read-only client.
    #[error("No signing credential configured")]
    MissingCredential,

    /// No receipt appeared within the polling budget.
    #[error("Transaction receipt not found after {0} attempts")]
    ReceiptTimeout(u32),

    /// Transaction could not be built.
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for Web3 operations.
pub type Web3Result<T> = Result<T, Web3Error>;

/// Parameters of an outgoing transaction, before nonce and signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxParams {
    /// Recipient or contract address.
    pub to: Address,
    /// Native value in wei.
    pub value: U256,
    /// Legacy gas price in wei.
    pub gas_price: u128,
    /// Gas limit.
    pub gas_limit: u64,
    /// Call data, empty for plain value transfers.
    pub data: Bytes,
}

impl TxParams {
    /// A plain value transfer.
    pub fn transfer(to: Address, value: U256, gas_price: u128, gas_limit: u64) -> Self {
        Self {
            to,
            value,
            gas_price,
            gas_limit,
            data: Bytes::new(),
        }
    }

    /// A contract call carrying ABI data.
    pub fn call(
        to: Address,
        data: impl Into<Bytes>,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Self {
        Self {
            to,
            value,
            gas_price,
            gas_limit,
            data: data.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_conversion() {
        let chain_id = ChainId::from(4689u64);
        assert_eq!(chain_id.0, 4689);
        assert_eq!(u64::from(chain_id), 4689);
    }

    #[test]
    fn test_endpoint_parse() {
        let endpoint = Endpoint::parse("http://localhost:8545", 31337).unwrap();
        assert_eq!(endpoint.chain_id, ChainId(31337));
        assert_eq!(endpoint.url.port(), Some(8545));

        let err = Endpoint::parse("not a url", 1).unwrap_err();
        assert!(matches!(err, Web3Error::Config(_)));
    }

    #[test]
    fn test_error_display() {
        let err = Web3Error::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = Web3Error::ChainMismatch {
            expected: 1,
            actual: 4689,
        };
        assert!(err.to_string().contains("4689"));

        assert_eq!(
            Web3Error::MissingCredential.to_string(),
            "No signing credential configured"
        );
    }

    #[test]
    fn test_transfer_params_have_no_data() {
        let params = TxParams::transfer(Address::ZERO, U256::from(1u64), 1, 21_000);
        assert!(params.data.is_empty());
    }
}

//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to JSON-RPC endpoint
//! - Query chain state (code, nonces, receipts, gas); balances go through batch.rs
//! - Broadcast signed raw transactions
//! - Handle timeouts and network errors, recording per-method metrics

use alloy::network::Ethereum;
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{DynProvider, Provider, RootProvider};
use alloy::rpc::client::{ClientBuilder, RpcClient};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use std::future::IntoFuture;
use std::time::{Duration, Instant};
use tokio::time::timeout;

use crate::blockchain::types::{ChainId, Endpoint, Web3Error, Web3Result};
use crate::observability::metrics;

/// Blockchain RPC client wrapper.
#[derive(Clone)]
pub struct BlockchainClient {
    /// Raw JSON-RPC client, used for batches.
    rpc: RpcClient,
    /// Typed provider over the same transport.
    provider: DynProvider,
    /// Endpoint this client talks to.
    endpoint: Endpoint,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// No request is sent; an unreachable node only surfaces on first use.
    pub fn new(endpoint: Endpoint, timeout_secs: u64) -> Self {
        let rpc = ClientBuilder::default().http(endpoint.url.clone());
        let provider = RootProvider::<Ethereum>::new(rpc.clone()).erased();

        tracing::debug!(
            rpc_url = %endpoint.url,
            chain_id = endpoint.chain_id.0,
            "Blockchain client created"
        );

        Self {
            rpc,
            provider,
            endpoint,
            timeout_duration: Duration::from_secs(timeout_secs),
        }
    }

    /// Run one RPC future under the configured timeout.
    pub(crate) async fn timed<T, E, F>(&self, method: &'static str, fut: F) -> Web3Result<T>
    where
        F: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let started = Instant::now();
        let result = match timeout(self.timeout_duration, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::debug!(method, error = %e, "RPC error");
                Err(Web3Error::Rpc(e.to_string()))
            }
            Err(_) => {
                tracing::debug!(method, "RPC timeout");
                Err(Web3Error::Timeout(self.timeout_duration.as_secs()))
            }
        };
        metrics::record_rpc_call(method, result.is_ok(), started.elapsed());
        result
    }

    /// Verify the connected chain ID matches configuration.
    pub async fn verify_chain_id(&self) -> Web3Result<()> {
        let chain_id = self.get_chain_id().await?;
        if chain_id != self.endpoint.chain_id {
            return Err(Web3Error::ChainMismatch {
                expected: self.endpoint.chain_id.0,
                actual: chain_id.0,
            });
        }
        Ok(())
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> Web3Result<ChainId> {
        self.timed("eth_chainId", self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Get the pending transaction count (next nonce) for an address.
    pub async fn get_pending_nonce(&self, address: Address) -> Web3Result<u64> {
        self.timed(
            "eth_getTransactionCount",
            self.provider.get_transaction_count(address).pending(),
        )
        .await
    }

    /// Get a transaction receipt by hash.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> Web3Result<Option<TransactionReceipt>> {
        self.timed(
            "eth_getTransactionReceipt",
            self.provider.get_transaction_receipt(tx_hash),
        )
        .await
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> Web3Result<u128> {
        self.timed("eth_gasPrice", self.provider.get_gas_price()).await
    }

    /// Estimate the gas a call would use.
    pub async fn estimate_gas(&self, tx: TransactionRequest) -> Web3Result<u64> {
        self.timed("eth_estimateGas", self.provider.estimate_gas(tx)).await
    }

    /// Execute a read-only call at the latest block.
    pub async fn call(&self, tx: TransactionRequest) -> Web3Result<Bytes> {
        self.timed("eth_call", self.provider.call(tx)).await
    }

    /// Get the deployed bytecode at an address.
    pub async fn get_code(&self, address: Address) -> Web3Result<Bytes> {
        self.timed("eth_getCode", self.provider.get_code_at(address)).await
    }

    /// Broadcast an RLP/EIP-2718 encoded signed transaction.
    pub async fn send_raw_transaction(&self, raw: &[u8]) -> Web3Result<TxHash> {
        let pending = self
            .timed(
                "eth_sendRawTransaction",
                self.provider.send_raw_transaction(raw),
            )
            .await?;
        metrics::record_transaction_submitted();
        Ok(*pending.tx_hash())
    }

    /// The raw JSON-RPC client.
    pub fn rpc(&self) -> &RpcClient {
        &self.rpc
    }

    /// The endpoint this client was built for.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Per-request timeout.
    pub fn timeout_duration(&self) -> Duration {
        self.timeout_duration
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.endpoint.url.as_str())
            .field("chain_id", &self.endpoint.chain_id.0)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}

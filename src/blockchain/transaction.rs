//! Transaction building, signing, broadcast and receipt polling.
//!
//! # Responsibilities
//! - Build legacy (EIP-155) transactions from caller-supplied gas values
//! - Sign with the configured wallet and broadcast the raw bytes
//! - Poll for receipts with a bounded attempt budget

use alloy::eips::eip2718::Encodable2718;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Bytes, TxHash};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use std::time::Duration;
use tokio::time::sleep;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{TxParams, Web3Error, Web3Result};
use crate::blockchain::wallet::Wallet;
use crate::config::ReceiptConfig;

/// Transaction builder bound to one client and one wallet.
pub struct TxBuilder<'a> {
    client: &'a BlockchainClient,
    wallet: &'a Wallet,
}

impl<'a> TxBuilder<'a> {
    /// Create a new transaction builder.
    pub fn new(client: &'a BlockchainClient, wallet: &'a Wallet) -> Self {
        Self { client, wallet }
    }

    /// Build an unsigned legacy transaction request.
    pub fn build(&self, params: &TxParams, nonce: u64) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.wallet.address())
            .with_to(params.to)
            .with_value(params.value)
            .with_input(params.data.clone())
            .with_nonce(nonce)
            .with_gas_price(params.gas_price)
            .with_gas_limit(params.gas_limit)
            .with_chain_id(self.wallet.chain_id())
    }

    /// Sign a request and return the EIP-2718 encoded bytes.
    pub async fn sign(&self, request: TransactionRequest) -> Web3Result<Bytes> {
        let envelope = request
            .build(&self.wallet.ethereum_wallet())
            .await
            .map_err(|e| Web3Error::Transaction(format!("Failed to sign transaction: {}", e)))?;
        Ok(envelope.encoded_2718().into())
    }

    /// Fetch the pending nonce, then build, sign and broadcast.
    pub async fn submit(&self, params: &TxParams) -> Web3Result<TxHash> {
        let nonce = self.client.get_pending_nonce(self.wallet.address()).await?;
        let raw = self.sign(self.build(params, nonce)).await?;
        let tx_hash = self.client.send_raw_transaction(&raw).await?;

        tracing::info!(
            tx_hash = %tx_hash,
            to = %params.to,
            nonce = nonce,
            "Transaction submitted"
        );
        Ok(tx_hash)
    }
}

/// Polls `eth_getTransactionReceipt` until the transaction is mined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptPoller {
    pub interval: Duration,
    pub attempts: u32,
}

impl ReceiptPoller {
    pub fn new(interval: Duration, attempts: u32) -> Self {
        Self { interval, attempts }
    }

    /// Total time the poller may block.
    pub fn budget(&self) -> Duration {
        self.interval * self.attempts
    }

    /// Wait for a receipt, giving up after the attempt budget.
    pub async fn wait(
        &self,
        client: &BlockchainClient,
        tx_hash: TxHash,
    ) -> Web3Result<TransactionReceipt> {
        for attempt in 1..=self.attempts {
            if let Some(receipt) = client.get_transaction_receipt(tx_hash).await? {
                tracing::debug!(tx_hash = %tx_hash, attempt, "Receipt found");
                return Ok(receipt);
            }

            tracing::debug!(tx_hash = %tx_hash, attempt, "Transaction pending");
            if attempt < self.attempts {
                sleep(self.interval).await;
            }
        }

        Err(Web3Error::ReceiptTimeout(self.attempts))
    }
}

impl From<&ReceiptConfig> for ReceiptPoller {
    fn from(config: &ReceiptConfig) -> Self {
        Self::new(
            Duration::from_millis(config.poll_interval_ms),
            config.poll_attempts,
        )
    }
}

//! JSON-RPC batch requests.
//!
//! One HTTP round trip carries many logical requests. Each request gets its
//! own JSON-RPC id and waiter; the transport routes every response to the
//! waiter with the matching id, so results come back in request order even
//! when the node answers the batch out of order.

use alloy::eips::BlockNumberOrTag;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::json_rpc::{RpcRecv, RpcSend};
use alloy::rpc::types::TransactionRequest;
use futures_util::future::join_all;
use std::time::Instant;
use tokio::time::timeout;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{Web3Error, Web3Result};
use crate::observability::metrics;

/// Outcome of one batch: the outer error is a failure of the whole round
/// trip, inner errors belong to individual requests.
pub type BatchResult<T> = Web3Result<Vec<Web3Result<T>>>;

impl BlockchainClient {
    /// Send one request per parameter set in a single batch.
    pub async fn batch<P, R>(&self, method: &'static str, params: &[P]) -> BatchResult<R>
    where
        P: RpcSend,
        R: RpcRecv,
    {
        if params.is_empty() {
            return Ok(Vec::new());
        }

        let started = Instant::now();
        let mut batch = self.rpc().new_batch();
        let mut waiters = Vec::with_capacity(params.len());
        for p in params {
            let waiter = batch
                .add_call::<_, R>(method, p)
                .map_err(|e| Web3Error::Rpc(format!("Failed to serialize {} request: {}", method, e)))?;
            waiters.push(waiter);
        }

        let sent = match timeout(self.timeout_duration(), batch.send()).await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(Web3Error::Rpc(e.to_string())),
            Err(_) => Err(Web3Error::Timeout(self.timeout_duration().as_secs())),
        };
        metrics::record_rpc_call(method, sent.is_ok(), started.elapsed());
        if let Err(e) = sent {
            tracing::debug!(method, size = params.len(), error = %e, "Batch request failed");
            return Err(e);
        }

        let results = join_all(waiters)
            .await
            .into_iter()
            .map(|r| r.map_err(|e| Web3Error::Rpc(e.to_string())))
            .collect();
        Ok(results)
    }

    /// Batched `eth_getBalance` at the latest block.
    pub async fn batch_get_balances(&self, addresses: &[Address]) -> BatchResult<U256> {
        let params: Vec<(Address, BlockNumberOrTag)> = addresses
            .iter()
            .map(|address| (*address, BlockNumberOrTag::Latest))
            .collect();
        self.batch("eth_getBalance", &params).await
    }

    /// Batched `eth_call` at the latest block.
    pub async fn batch_call(&self, calls: &[TransactionRequest]) -> BatchResult<Bytes> {
        let params: Vec<(TransactionRequest, BlockNumberOrTag)> = calls
            .iter()
            .map(|call| (call.clone(), BlockNumberOrTag::Latest))
            .collect();
        self.batch("eth_call", &params).await
    }
}

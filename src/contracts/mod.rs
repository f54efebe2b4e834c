//! Contract bindings for the token standards and ENS.
//!
//! ABI encoding and decoding come from `alloy::sol!`; this module only adds
//! the call-data helpers the client needs.

pub mod ens;
pub mod erc1155;
pub mod erc20;
pub mod erc721;

use alloy::primitives::{Address, Bytes};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;

use crate::blockchain::types::{Web3Error, Web3Result};

/// Build a read-only `eth_call` request for an encoded call.
pub fn read_request<C: SolCall>(from: Option<Address>, contract: Address, call: &C) -> TransactionRequest {
    TransactionRequest {
        from,
        to: Some(contract.into()),
        input: Bytes::from(call.abi_encode()).into(),
        ..Default::default()
    }
}

/// Decode the return data of a call.
pub fn decode_return<C: SolCall>(data: &[u8]) -> Web3Result<C::Return> {
    C::abi_decode_returns(data).map_err(|e| {
        Web3Error::Decode(format!("{} returned {} bytes: {}", C::SIGNATURE, data.len(), e))
    })
}

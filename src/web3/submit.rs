//! Write operations: signed transfers, contract calls and message signing.
//!
//! Every write needs the signing key. A read-only client fails with
//! [`Web3Error::MissingCredential`] before anything is sent to the node.
//!
//! [`Web3Error::MissingCredential`]: crate::blockchain::Web3Error::MissingCredential

use alloy::primitives::{Address, Bytes, TxHash, U256};

use crate::blockchain::{TxBuilder, TxParams, Web3Result};
use crate::contracts::{erc1155, erc20, erc721};
use crate::web3::{or_none, Web3Client};

impl Web3Client {
    /// Sign and broadcast, returning the transaction hash.
    async fn submit(&self, params: TxParams) -> Web3Result<TxHash> {
        let wallet = self.wallet()?;
        TxBuilder::new(&self.chain, wallet).submit(&params).await
    }

    /// Send native currency.
    pub async fn try_transfer_native(
        &self,
        to: Address,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Web3Result<TxHash> {
        self.submit(TxParams::transfer(to, value, gas_price, gas_limit))
            .await
    }

    /// Send native currency; `None` on any failure.
    pub async fn transfer_native(
        &self,
        to: Address,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Option<TxHash> {
        or_none(
            "transfer_native",
            self.try_transfer_native(to, value, gas_price, gas_limit).await,
        )
    }

    /// ERC-20 `transfer(to, value)`.
    pub async fn try_transfer_token20(
        &self,
        contract: Address,
        to: Address,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Web3Result<TxHash> {
        let data = erc20::transfer_data(to, value);
        self.submit(TxParams::call(contract, data, U256::ZERO, gas_price, gas_limit))
            .await
    }

    pub async fn transfer_token20(
        &self,
        contract: Address,
        to: Address,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Option<TxHash> {
        or_none(
            "transfer_token20",
            self.try_transfer_token20(contract, to, value, gas_price, gas_limit)
                .await,
        )
    }

    /// ERC-20 `transferFrom(from, to, value)` spending an allowance.
    pub async fn try_transfer_token20_from(
        &self,
        contract: Address,
        from: Address,
        to: Address,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Web3Result<TxHash> {
        let data = erc20::transfer_from_data(from, to, value);
        self.submit(TxParams::call(contract, data, U256::ZERO, gas_price, gas_limit))
            .await
    }

    pub async fn transfer_token20_from(
        &self,
        contract: Address,
        from: Address,
        to: Address,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Option<TxHash> {
        or_none(
            "transfer_token20_from",
            self.try_transfer_token20_from(contract, from, to, value, gas_price, gas_limit)
                .await,
        )
    }

    /// ERC-20 `approve(spender, value)`.
    pub async fn try_approve_token20(
        &self,
        contract: Address,
        spender: Address,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Web3Result<TxHash> {
        let data = erc20::approve_data(spender, value);
        self.submit(TxParams::call(contract, data, U256::ZERO, gas_price, gas_limit))
            .await
    }

    pub async fn approve_token20(
        &self,
        contract: Address,
        spender: Address,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Option<TxHash> {
        or_none(
            "approve_token20",
            self.try_approve_token20(contract, spender, value, gas_price, gas_limit)
                .await,
        )
    }

    /// `transferOwnership(newOwner)` on an ownable contract.
    pub async fn try_transfer_ownership(
        &self,
        contract: Address,
        new_owner: Address,
        gas_price: u128,
        gas_limit: u64,
    ) -> Web3Result<TxHash> {
        let data = erc20::transfer_ownership_data(new_owner);
        self.submit(TxParams::call(contract, data, U256::ZERO, gas_price, gas_limit))
            .await
    }

    pub async fn transfer_ownership(
        &self,
        contract: Address,
        new_owner: Address,
        gas_price: u128,
        gas_limit: u64,
    ) -> Option<TxHash> {
        or_none(
            "transfer_ownership",
            self.try_transfer_ownership(contract, new_owner, gas_price, gas_limit)
                .await,
        )
    }

    /// ERC-721 `safeTransferFrom(self, to, tokenId)`.
    pub async fn try_transfer_token721(
        &self,
        contract: Address,
        to: Address,
        token_id: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Web3Result<TxHash> {
        let from = self.wallet()?.address();
        let data = erc721::safe_transfer_from_data(from, to, token_id);
        self.submit(TxParams::call(contract, data, U256::ZERO, gas_price, gas_limit))
            .await
    }

    pub async fn transfer_token721(
        &self,
        contract: Address,
        to: Address,
        token_id: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Option<TxHash> {
        or_none(
            "transfer_token721",
            self.try_transfer_token721(contract, to, token_id, gas_price, gas_limit)
                .await,
        )
    }

    /// ERC-1155 `safeTransferFrom(self, to, id, amount, data)`.
    #[allow(clippy::too_many_arguments)]
    pub async fn try_transfer_token1155(
        &self,
        contract: Address,
        to: Address,
        token_id: U256,
        amount: U256,
        data: Bytes,
        gas_price: u128,
        gas_limit: u64,
    ) -> Web3Result<TxHash> {
        let from = self.wallet()?.address();
        let call_data = erc1155::safe_transfer_from_data(from, to, token_id, amount, data);
        self.submit(TxParams::call(contract, call_data, U256::ZERO, gas_price, gas_limit))
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn transfer_token1155(
        &self,
        contract: Address,
        to: Address,
        token_id: U256,
        amount: U256,
        data: Bytes,
        gas_price: u128,
        gas_limit: u64,
    ) -> Option<TxHash> {
        or_none(
            "transfer_token1155",
            self.try_transfer_token1155(contract, to, token_id, amount, data, gas_price, gas_limit)
                .await,
        )
    }

    /// Submit arbitrary ABI call data to a contract.
    pub async fn try_call_contract(
        &self,
        contract: Address,
        data: Bytes,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Web3Result<TxHash> {
        self.submit(TxParams::call(contract, data, value, gas_price, gas_limit))
            .await
    }

    pub async fn call_contract(
        &self,
        contract: Address,
        data: Bytes,
        value: U256,
        gas_price: u128,
        gas_limit: u64,
    ) -> Option<TxHash> {
        or_none(
            "call_contract",
            self.try_call_contract(contract, data, value, gas_price, gas_limit)
                .await,
        )
    }

    /// Sign a message, returning `0x` + hex(r ‖ s ‖ v).
    ///
    /// With `add_prefix` the EIP-191 personal-message prefix is applied
    /// before hashing, matching `personal_sign`.
    pub async fn try_sign_message(&self, message: &[u8], add_prefix: bool) -> Web3Result<String> {
        self.wallet()?.sign_message_hex(message, add_prefix).await
    }

    pub async fn sign_message(&self, message: &[u8], add_prefix: bool) -> Option<String> {
        or_none(
            "sign_message",
            self.try_sign_message(message, add_prefix).await,
        )
    }
}

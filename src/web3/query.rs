//! Read operations: balances, gas, code, nonces, token metadata, ENS, receipts.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use alloy::sol_types::SolCall;

use crate::blockchain::{Web3Error, Web3Result};
use crate::contracts::ens::{self, ENSRegistry, ENSResolver};
use crate::contracts::erc1155::IERC1155;
use crate::contracts::erc20::{self, IERC20};
use crate::contracts::erc721::IERC721;
use crate::contracts::{decode_return, read_request};
use crate::web3::{or_fallback, or_none, Web3Client};

impl Web3Client {
    /// Execute a view call and decode its return value.
    async fn read<C: SolCall>(&self, contract: Address, call: C) -> Web3Result<C::Return> {
        let data = self
            .chain
            .call(read_request(self.address(), contract, &call))
            .await?;
        decode_return::<C>(&data)
    }

    /// Native balances of many addresses in one batch, in input order.
    ///
    /// Fails as a whole if the batch fails or any single lookup fails.
    pub async fn try_get_balances(&self, addresses: &[Address]) -> Web3Result<Vec<U256>> {
        self.chain
            .batch_get_balances(addresses)
            .await?
            .into_iter()
            .collect()
    }

    /// Native balances, or an empty vec on any failure. Never partial.
    pub async fn get_balances(&self, addresses: &[Address]) -> Vec<U256> {
        or_fallback("get_balances", self.try_get_balances(addresses).await, Vec::new())
    }

    /// ERC-20 balances of `owner` across many tokens in one batch.
    ///
    /// The outer error is a failed round trip; inner errors are per token.
    pub async fn try_get_token_balances(
        &self,
        contracts: &[Address],
        owner: Address,
    ) -> Web3Result<Vec<Web3Result<U256>>> {
        let call = IERC20::balanceOfCall { account: owner };
        let requests: Vec<TransactionRequest> = contracts
            .iter()
            .map(|contract| read_request(self.address(), *contract, &call))
            .collect();

        let responses = self.chain.batch_call(&requests).await?;
        Ok(responses
            .into_iter()
            .map(|response| response.and_then(|data| decode_return::<IERC20::balanceOfCall>(&data)))
            .collect())
    }

    /// ERC-20 balances in input order. A token whose response is missing or
    /// malformed reads as zero; a failed batch yields an empty vec.
    pub async fn get_token_balances(&self, contracts: &[Address], owner: Address) -> Vec<U256> {
        let Some(results) = or_none(
            "get_token_balances",
            self.try_get_token_balances(contracts, owner).await,
        ) else {
            return Vec::new();
        };

        contracts
            .iter()
            .zip(results)
            .map(|(contract, result)| {
                result.unwrap_or_else(|e| {
                    tracing::debug!(contract = %contract, error = %e, "Token balance unreadable, using zero");
                    U256::ZERO
                })
            })
            .collect()
    }

    /// Current gas price from the node.
    pub async fn try_current_gas_price(&self) -> Web3Result<u128> {
        self.chain.get_gas_price().await
    }

    /// Current gas price, or the configured default.
    pub async fn current_gas_price(&self) -> u128 {
        or_fallback(
            "current_gas_price",
            self.try_current_gas_price().await,
            self.gas.default_gas_price_wei,
        )
    }

    /// Gas estimate for sending `data` to `to` from this client's address.
    pub async fn try_estimate_gas(&self, to: Address, data: Bytes) -> Web3Result<u64> {
        let request = TransactionRequest {
            from: self.address(),
            to: Some(to.into()),
            input: data.into(),
            ..Default::default()
        };
        self.chain.estimate_gas(request).await
    }

    /// Gas estimate, or the configured default gas limit.
    pub async fn estimate_gas(&self, to: Address, data: Bytes) -> u64 {
        or_fallback(
            "estimate_gas",
            self.try_estimate_gas(to, data).await,
            self.gas.default_gas_limit,
        )
    }

    /// Whether bytecode is deployed at `address`.
    pub async fn try_is_contract(&self, address: Address) -> Web3Result<bool> {
        let code = self.chain.get_code(address).await?;
        Ok(!code.is_empty())
    }

    /// Whether bytecode is deployed at `address`; false if the lookup fails.
    pub async fn is_contract(&self, address: Address) -> bool {
        or_fallback("is_contract", self.try_is_contract(address).await, false)
    }

    /// Pending transaction count of this client's address.
    pub async fn try_next_nonce(&self) -> Web3Result<u64> {
        let address = self.caller()?;
        self.chain.get_pending_nonce(address).await
    }

    /// Next nonce, or `None`.
    pub async fn next_nonce(&self) -> Option<u64> {
        or_none("next_nonce", self.try_next_nonce().await)
    }

    /// Poll until the transaction is mined or the polling budget runs out.
    pub async fn try_wait_for_receipt(&self, tx_hash: TxHash) -> Web3Result<TransactionReceipt> {
        self.receipts.wait(&self.chain, tx_hash).await
    }

    /// Receipt, or `None` on timeout or error.
    pub async fn wait_for_receipt(&self, tx_hash: TxHash) -> Option<TransactionReceipt> {
        or_none("wait_for_receipt", self.try_wait_for_receipt(tx_hash).await)
    }

    /// Resolve an ENS name. A literal address resolves to itself.
    pub async fn try_resolve_ens(&self, name: &str) -> Web3Result<Address> {
        if let Ok(address) = name.trim().parse::<Address>() {
            return Ok(address);
        }
        if !ens::is_ens_name(name) {
            return Err(Web3Error::Config(format!("'{}' is not an ENS name", name)));
        }

        let node = ens::namehash(name);
        let resolver = self
            .read(self.ens_registry, ENSRegistry::resolverCall { node })
            .await?;
        if resolver == Address::ZERO {
            return Err(Web3Error::Decode(format!("No resolver set for {}", name)));
        }

        let address = self.read(resolver, ENSResolver::addrCall { node }).await?;
        if address == Address::ZERO {
            return Err(Web3Error::Decode(format!("No address set for {}", name)));
        }

        tracing::debug!(name, address = %address, "ENS name resolved");
        Ok(address)
    }

    /// Resolved address, or `None`.
    pub async fn resolve_ens(&self, name: &str) -> Option<Address> {
        or_none("resolve_ens", self.try_resolve_ens(name).await)
    }

    pub async fn try_token_name(&self, contract: Address) -> Web3Result<String> {
        self.read(contract, IERC20::nameCall {}).await
    }

    /// ERC-20 `name()`, or an empty string.
    pub async fn token_name(&self, contract: Address) -> String {
        or_fallback("token_name", self.try_token_name(contract).await, String::new())
    }

    pub async fn try_token_symbol(&self, contract: Address) -> Web3Result<String> {
        self.read(contract, IERC20::symbolCall {}).await
    }

    /// ERC-20 `symbol()`, or an empty string.
    pub async fn token_symbol(&self, contract: Address) -> String {
        or_fallback("token_symbol", self.try_token_symbol(contract).await, String::new())
    }

    pub async fn try_token_decimals(&self, contract: Address) -> Web3Result<u8> {
        self.read(contract, IERC20::decimalsCall {}).await
    }

    /// ERC-20 `decimals()`, or 18.
    pub async fn token_decimals(&self, contract: Address) -> u8 {
        or_fallback(
            "token_decimals",
            self.try_token_decimals(contract).await,
            erc20::DEFAULT_DECIMALS,
        )
    }

    pub async fn try_token_owner(&self, contract: Address) -> Web3Result<Address> {
        self.read(contract, IERC20::ownerCall {}).await
    }

    /// `owner()` of an ownable token contract, or `None`.
    pub async fn token_owner(&self, contract: Address) -> Option<Address> {
        or_none("token_owner", self.try_token_owner(contract).await)
    }

    pub async fn try_nft_owner_of(&self, contract: Address, token_id: U256) -> Web3Result<Address> {
        self.read(contract, IERC721::ownerOfCall { tokenId: token_id }).await
    }

    /// ERC-721 `ownerOf(tokenId)`, or `None`.
    pub async fn nft_owner_of(&self, contract: Address, token_id: U256) -> Option<Address> {
        or_none("nft_owner_of", self.try_nft_owner_of(contract, token_id).await)
    }

    /// ERC-1155 `balanceOf(caller, id)` for this client's address.
    pub async fn try_nft_balance_of(&self, contract: Address, token_id: U256) -> Web3Result<U256> {
        let account = self.caller()?;
        self.read(contract, IERC1155::balanceOfCall { account, id: token_id })
            .await
    }

    /// ERC-1155 balance, or zero.
    pub async fn nft_balance_of(&self, contract: Address, token_id: U256) -> U256 {
        or_fallback(
            "nft_balance_of",
            self.try_nft_balance_of(contract, token_id).await,
            U256::ZERO,
        )
    }
}

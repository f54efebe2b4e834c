//! Signing credential and message signing.
//!
//! # Security
//! - Private keys are loaded from environment variables or passed in directly
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::{eip191_hash_message, keccak256, Address, B256};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::{Signature, Signer};

use crate::blockchain::types::{Web3Error, Web3Result};

/// Default environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "WEB3_PRIVATE_KEY";

/// Wallet holding the signing key for one chain.
#[derive(Debug, Clone)]
pub struct Wallet {
    /// The underlying signer (private key).
    signer: PrivateKeySigner,
    /// Chain ID for EIP-155 replay protection.
    chain_id: u64,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    /// * `chain_id` - Chain ID for transaction signing
    ///
    /// # Security
    /// The private key is parsed and stored securely. It is never logged.
    pub fn from_private_key(private_key_hex: &str, chain_id: u64) -> Web3Result<Self> {
        let key_hex = private_key_hex.trim();
        let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| Web3Error::Wallet(format!("Invalid private key format: {}", e)))?;
        let signer = signer.with_chain_id(Some(chain_id));

        tracing::info!(
            address = %signer.address(),
            chain_id = chain_id,
            "Wallet initialized"
        );

        Ok(Self { signer, chain_id })
    }

    /// Load wallet from the named environment variable.
    ///
    /// An unset variable is [`Web3Error::MissingCredential`]; a set but
    /// malformed key is [`Web3Error::Wallet`].
    pub fn from_env(var: &str, chain_id: u64) -> Web3Result<Self> {
        let private_key = std::env::var(var).map_err(|_| {
            tracing::debug!(env_var = %var, "Private key variable not set");
            Web3Error::MissingCredential
        })?;

        Self::from_private_key(&private_key, chain_id)
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the chain ID this wallet is configured for.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Network wallet used to sign transaction requests.
    pub fn ethereum_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }

    /// Sign a 32-byte hash.
    pub async fn sign_hash(&self, hash: B256) -> Web3Result<Signature> {
        self.signer
            .sign_hash(&hash)
            .await
            .map_err(|e| Web3Error::Wallet(format!("Signing failed: {}", e)))
    }

    /// Sign a message and return the `0x`-prefixed 65-byte `r ‖ s ‖ v` hex.
    ///
    /// With `add_prefix` the message is hashed as an EIP-191 personal
    /// message; otherwise the raw bytes are keccak-256 hashed.
    pub async fn sign_message_hex(&self, message: &[u8], add_prefix: bool) -> Web3Result<String> {
        let hash = message_hash(message, add_prefix);
        let signature = self.sign_hash(hash).await?;
        Ok(signature_to_hex(&signature))
    }
}

/// Hash a message for signing.
///
/// The prefixed form is the single EIP-191 hash used by `personal_sign`.
/// Signatures from SDKs that hash the prefixed digest a second time will
/// not match.
pub fn message_hash(message: &[u8], add_prefix: bool) -> B256 {
    if add_prefix {
        eip191_hash_message(message)
    } else {
        keccak256(message)
    }
}

/// Encode a signature as `0x` + hex(r ‖ s ‖ v) with v in {27, 28}.
pub fn signature_to_hex(signature: &Signature) -> String {
    alloy::hex::encode_prefixed(signature.as_bytes())
}

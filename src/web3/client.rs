//! Client construction and shared accessors.

use alloy::primitives::Address;

use crate::blockchain::{BlockchainClient, Endpoint, ReceiptPoller, Web3Error, Web3Result, Wallet};
use crate::config::{GasConfig, ReceiptConfig, Web3Config};
use crate::contracts::ens::ENS_REGISTRY;

/// Facade over one JSON-RPC endpoint and an optional signing key.
///
/// Cheap to clone; clones share the underlying connection.
#[derive(Clone)]
pub struct Web3Client {
    pub(crate) chain: BlockchainClient,
    pub(crate) wallet: Option<Wallet>,
    pub(crate) from: Option<Address>,
    pub(crate) gas: GasConfig,
    pub(crate) receipts: ReceiptPoller,
    pub(crate) ens_registry: Address,
}

impl Web3Client {
    /// Start building a client for an endpoint.
    pub fn builder(rpc_url: impl Into<String>, chain_id: u64) -> Web3ClientBuilder {
        Web3ClientBuilder::new(rpc_url, chain_id)
    }

    /// A signing client. An invalid key is rejected here, before any RPC.
    pub fn new(rpc_url: &str, chain_id: u64, private_key: &str) -> Web3Result<Self> {
        Self::builder(rpc_url, chain_id).private_key(private_key).build()
    }

    /// A read-only client. `from` is used as the caller for reads that need one.
    pub fn read_only(rpc_url: &str, chain_id: u64, from: Option<Address>) -> Web3Result<Self> {
        let mut builder = Self::builder(rpc_url, chain_id);
        if let Some(from) = from {
            builder = builder.from_address(from);
        }
        builder.build()
    }

    /// Build a client from configuration.
    ///
    /// The private key is read from the environment variable named in
    /// `credential.private_key_env`. When that variable is unset the client is
    /// read-only, using `credential.from_address` as its caller.
    pub fn from_config(config: &Web3Config) -> Web3Result<Self> {
        let mut builder = Self::builder(config.rpc.url.clone(), config.rpc.chain_id)
            .timeout_secs(config.rpc.timeout_secs)
            .gas(config.gas.clone())
            .receipts(&config.receipts);

        if let Some(registry) = &config.rpc.ens_registry {
            let registry = registry.parse().map_err(|e| {
                Web3Error::Config(format!("Invalid ENS registry '{}': {}", registry, e))
            })?;
            builder = builder.ens_registry(registry);
        }

        if let Some(from) = &config.credential.from_address {
            let from = from.parse().map_err(|e| {
                Web3Error::Config(format!("Invalid from address '{}': {}", from, e))
            })?;
            builder = builder.from_address(from);
        }

        match Wallet::from_env(&config.credential.private_key_env, config.rpc.chain_id) {
            Ok(wallet) => builder = builder.wallet(wallet),
            Err(Web3Error::MissingCredential) => tracing::info!(
                env_var = %config.credential.private_key_env,
                "No private key in environment, client is read-only"
            ),
            Err(e) => return Err(Web3Error::Config(e.to_string())),
        }

        builder.build()
    }

    /// Check that the node serves the configured chain.
    pub async fn verify_chain_id(&self) -> Web3Result<()> {
        self.chain.verify_chain_id().await
    }

    /// The signing address, or the configured caller of a read-only client.
    pub fn address(&self) -> Option<Address> {
        self.wallet.as_ref().map(Wallet::address).or(self.from)
    }

    /// Whether the client lacks a signing key.
    pub fn is_read_only(&self) -> bool {
        self.wallet.is_none()
    }

    /// Chain ID used for signing.
    pub fn chain_id(&self) -> u64 {
        self.chain.endpoint().chain_id.0
    }

    /// Fallback gas values.
    pub fn gas_defaults(&self) -> &GasConfig {
        &self.gas
    }

    /// The low-level RPC client.
    pub fn blockchain(&self) -> &BlockchainClient {
        &self.chain
    }

    pub(crate) fn wallet(&self) -> Web3Result<&Wallet> {
        self.wallet.as_ref().ok_or(Web3Error::MissingCredential)
    }

    pub(crate) fn caller(&self) -> Web3Result<Address> {
        self.address().ok_or(Web3Error::MissingCredential)
    }
}

impl std::fmt::Debug for Web3Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Web3Client")
            .field("chain", &self.chain)
            .field("address", &self.address())
            .field("read_only", &self.is_read_only())
            .finish()
    }
}

/// Builder for [`Web3Client`].
pub struct Web3ClientBuilder {
    rpc_url: String,
    chain_id: u64,
    private_key: Option<String>,
    wallet: Option<Wallet>,
    from: Option<Address>,
    timeout_secs: u64,
    gas: GasConfig,
    receipts: ReceiptPoller,
    ens_registry: Address,
}

impl Web3ClientBuilder {
    fn new(rpc_url: impl Into<String>, chain_id: u64) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            chain_id,
            private_key: None,
            wallet: None,
            from: None,
            timeout_secs: 10,
            gas: GasConfig::default(),
            receipts: ReceiptPoller::from(&ReceiptConfig::default()),
            ens_registry: ENS_REGISTRY,
        }
    }

    /// Hex private key, with or without `0x`.
    pub fn private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = Some(key.into());
        self
    }

    /// An already loaded wallet. A private key set with
    /// [`private_key`](Self::private_key) takes precedence.
    pub fn wallet(mut self, wallet: Wallet) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// Caller address for a read-only client. Ignored when a key is set.
    pub fn from_address(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn gas(mut self, gas: GasConfig) -> Self {
        self.gas = gas;
        self
    }

    pub fn receipts(mut self, receipts: &ReceiptConfig) -> Self {
        self.receipts = ReceiptPoller::from(receipts);
        self
    }

    pub fn ens_registry(mut self, registry: Address) -> Self {
        self.ens_registry = registry;
        self
    }

    /// Validate the endpoint and credential and build the client.
    ///
    /// No request is sent to the node.
    pub fn build(self) -> Web3Result<Web3Client> {
        let endpoint = Endpoint::parse(&self.rpc_url, self.chain_id)?;

        let wallet = match &self.private_key {
            Some(key) => Some(
                Wallet::from_private_key(key, self.chain_id)
                    .map_err(|e| Web3Error::Config(e.to_string()))?,
            ),
            None => self.wallet,
        };

        let client = Web3Client {
            chain: BlockchainClient::new(endpoint, self.timeout_secs),
            wallet,
            from: self.from,
            gas: self.gas,
            receipts: self.receipts,
            ens_registry: self.ens_registry,
        };

        tracing::info!(
            rpc_url = %self.rpc_url,
            chain_id = self.chain_id,
            read_only = client.is_read_only(),
            "Web3 client initialized"
        );

        Ok(client)
    }
}

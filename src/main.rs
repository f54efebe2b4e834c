use std::path::PathBuf;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

use web3_client::config::{load_config, Web3Config};
use web3_client::contracts::{erc1155, erc20, erc721};
use web3_client::observability::logging::init_logging;
use web3_client::Web3Client;

#[derive(Parser)]
#[command(name = "web3-client")]
#[command(about = "Query and transact against an Ethereum-compatible JSON-RPC node", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `rpc.url`.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Override `rpc.chain_id`.
    #[arg(long)]
    chain_id: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Gas settings for write commands. Missing values are asked from the node.
#[derive(Args)]
struct GasArgs {
    /// Gas price in wei.
    #[arg(long)]
    gas_price: Option<u128>,

    /// Gas limit.
    #[arg(long)]
    gas_limit: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Native balances of one or more addresses
    Balance { addresses: Vec<Address> },
    /// ERC-20 balances of an owner across tokens
    TokenBalance {
        #[arg(long)]
        owner: Address,
        contracts: Vec<Address>,
    },
    /// Send native currency
    Transfer {
        to: Address,
        value: U256,
        #[command(flatten)]
        gas: GasArgs,
    },
    /// ERC-20 transfer
    TransferErc20 {
        contract: Address,
        to: Address,
        value: U256,
        #[command(flatten)]
        gas: GasArgs,
    },
    /// ERC-721 safe transfer from the signing address
    TransferErc721 {
        contract: Address,
        to: Address,
        token_id: U256,
        #[command(flatten)]
        gas: GasArgs,
    },
    /// ERC-1155 safe transfer from the signing address
    TransferErc1155 {
        contract: Address,
        to: Address,
        token_id: U256,
        amount: U256,
        #[arg(long, default_value = "0x")]
        data: Bytes,
        #[command(flatten)]
        gas: GasArgs,
    },
    /// Submit raw ABI call data to a contract
    Call {
        contract: Address,
        data: Bytes,
        #[arg(long, default_value = "0")]
        value: U256,
        #[command(flatten)]
        gas: GasArgs,
    },
    /// Current gas price
    GasPrice,
    /// Estimate gas for a call
    EstimateGas {
        to: Address,
        #[arg(default_value = "0x")]
        data: Bytes,
    },
    /// Whether an address holds contract code
    IsContract { address: Address },
    /// Sign a UTF-8 message
    Sign {
        message: String,
        /// Hash the raw message instead of the EIP-191 personal message
        #[arg(long)]
        no_prefix: bool,
    },
    /// Wait for a transaction receipt
    Receipt { tx_hash: TxHash },
    /// Next nonce of the configured address
    Nonce,
    /// Resolve an ENS name
    Ens { name: String },
    /// ERC-20 name, symbol, decimals and owner
    TokenInfo { contract: Address },
    /// ERC-721 owner of a token
    NftOwner { contract: Address, token_id: U256 },
    /// ERC-1155 balance of the configured address
    NftBalance { contract: Address, token_id: U256 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Web3Config::default(),
    };
    if let Some(url) = cli.rpc_url {
        config.rpc.url = url;
    }
    if let Some(chain_id) = cli.chain_id {
        config.rpc.chain_id = chain_id;
    }

    init_logging(&config.observability);

    let client = Web3Client::from_config(&config)?;

    if config.rpc.verify_chain_id {
        if let Err(e) = client.verify_chain_id().await {
            // Don't fail - the node may still answer reads
            tracing::warn!(error = %e, "Chain verification failed");
        }
    }

    let output = run(&client, cli.command).await;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn resolve_gas(client: &Web3Client, gas: GasArgs, to: Address, data: &Bytes) -> (u128, u64) {
    let gas_price = match gas.gas_price {
        Some(price) => price,
        None => client.current_gas_price().await,
    };
    let gas_limit = match gas.gas_limit {
        Some(limit) => limit,
        None => client.estimate_gas(to, data.clone()).await,
    };
    (gas_price, gas_limit)
}

fn tx_output(tx_hash: Option<TxHash>) -> Value {
    json!({ "transaction_hash": tx_hash.map(|h| h.to_string()) })
}

async fn run(client: &Web3Client, command: Commands) -> Value {
    match command {
        Commands::Balance { addresses } => {
            let balances = client.get_balances(&addresses).await;
            json!(addresses
                .iter()
                .zip(balances)
                .map(|(address, balance)| json!({
                    "address": address.to_string(),
                    "balance": balance.to_string(),
                }))
                .collect::<Vec<_>>())
        }
        Commands::TokenBalance { owner, contracts } => {
            let balances = client.get_token_balances(&contracts, owner).await;
            json!(contracts
                .iter()
                .zip(balances)
                .map(|(contract, balance)| json!({
                    "contract": contract.to_string(),
                    "balance": balance.to_string(),
                }))
                .collect::<Vec<_>>())
        }
        Commands::Transfer { to, value, gas } => {
            let (gas_price, gas_limit) = resolve_gas(client, gas, to, &Bytes::new()).await;
            tx_output(client.transfer_native(to, value, gas_price, gas_limit).await)
        }
        Commands::TransferErc20 { contract, to, value, gas } => {
            let data = erc20::transfer_data(to, value);
            let (gas_price, gas_limit) = resolve_gas(client, gas, contract, &data).await;
            tx_output(
                client
                    .transfer_token20(contract, to, value, gas_price, gas_limit)
                    .await,
            )
        }
        Commands::TransferErc721 { contract, to, token_id, gas } => {
            let from = client.address().unwrap_or_default();
            let data = erc721::safe_transfer_from_data(from, to, token_id);
            let (gas_price, gas_limit) = resolve_gas(client, gas, contract, &data).await;
            tx_output(
                client
                    .transfer_token721(contract, to, token_id, gas_price, gas_limit)
                    .await,
            )
        }
        Commands::TransferErc1155 { contract, to, token_id, amount, data, gas } => {
            let from = client.address().unwrap_or_default();
            let call_data = erc1155::safe_transfer_from_data(from, to, token_id, amount, data.clone());
            let (gas_price, gas_limit) = resolve_gas(client, gas, contract, &call_data).await;
            tx_output(
                client
                    .transfer_token1155(contract, to, token_id, amount, data, gas_price, gas_limit)
                    .await,
            )
        }
        Commands::Call { contract, data, value, gas } => {
            let (gas_price, gas_limit) = resolve_gas(client, gas, contract, &data).await;
            tx_output(
                client
                    .call_contract(contract, data, value, gas_price, gas_limit)
                    .await,
            )
        }
        Commands::GasPrice => json!({ "gas_price": client.current_gas_price().await.to_string() }),
        Commands::EstimateGas { to, data } => json!({ "gas": client.estimate_gas(to, data).await }),
        Commands::IsContract { address } => json!({ "is_contract": client.is_contract(address).await }),
        Commands::Sign { message, no_prefix } => {
            json!({ "signature": client.sign_message(message.as_bytes(), !no_prefix).await })
        }
        Commands::Receipt { tx_hash } => match client.wait_for_receipt(tx_hash).await {
            Some(receipt) => serde_json::to_value(&receipt).unwrap_or(Value::Null),
            None => Value::Null,
        },
        Commands::Nonce => json!({ "nonce": client.next_nonce().await }),
        Commands::Ens { name } => json!({
            "name": name,
            "address": client.resolve_ens(&name).await.map(|a| a.to_string()),
        }),
        Commands::TokenInfo { contract } => json!({
            "contract": contract.to_string(),
            "name": client.token_name(contract).await,
            "symbol": client.token_symbol(contract).await,
            "decimals": client.token_decimals(contract).await,
            "owner": client.token_owner(contract).await.map(|a| a.to_string()),
        }),
        Commands::NftOwner { contract, token_id } => json!({
            "owner": client.nft_owner_of(contract, token_id).await.map(|a| a.to_string()),
        }),
        Commands::NftBalance { contract, token_id } => json!({
            "balance": client.nft_balance_of(contract, token_id).await.to_string(),
        }),
    }
}

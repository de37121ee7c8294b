//! Sui Ledger CLI
//!
//! Command-line interface for the Sui ledger history engine: inspect a
//! wallet's transaction history, sent/received summaries, balance, owned
//! objects, and network status from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sui_ledger_core::config::{LedgerConfig, Network};
use sui_ledger_core::engine::LedgerEngine;
use sui_ledger_core::rpc::SuiRpcClient;

/// Sui Ledger CLI
#[derive(Parser, Debug)]
#[command(
    name = "sui-ledger-cli",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect a Sui wallet's transaction history from the terminal",
    long_about = "Fetch, classify, and summarize a Sui wallet's on-chain \
                 transaction history: time-filtered listings, sent/received \
                 totals, balances, owned objects, and network status."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Wallet address to inspect
    #[arg(short, long, global = true, env = "SUI_WALLET_ADDRESS")]
    wallet: Option<String>,

    /// RPC endpoint (defaults to the network's public fullnode)
    #[arg(long, global = true, env = "SUI_RPC_URL")]
    rpc_url: Option<String>,

    /// Network to query
    #[arg(short, long, global = true, env = "SUI_NETWORK", default_value = "testnet")]
    network: String,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

/// Main CLI commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show classified transaction history
    #[command(alias = "hist")]
    History {
        /// Time filter, e.g. "last 7 days", "yesterday", "this month"
        filter: Option<String>,
    },

    /// Show SUI and USDC sent/received totals
    #[command(alias = "sum")]
    Summary {
        /// Time filter, e.g. "last 7 days", "yesterday", "this month"
        filter: Option<String>,
    },

    /// Show the SUI balance of an address
    #[command(alias = "bal")]
    Balance {
        /// Address to look up; defaults to the configured wallet
        address: Option<String>,
    },

    /// List objects owned by an address
    #[command(alias = "obj")]
    Objects {
        /// Address to look up; defaults to the configured wallet
        address: Option<String>,
    },

    /// Show network identification and status
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = build_config(&cli)?;
    let client = SuiRpcClient::new(&config)?;
    let engine = LedgerEngine::new(client, config);

    let output = match &cli.command {
        Commands::History { filter } => engine.transaction_history(filter.as_deref()).await,
        Commands::Summary { filter } => engine.coin_summary(filter.as_deref()).await,
        Commands::Balance { address } => engine.balance(address.as_deref()).await,
        Commands::Objects { address } => engine.owned_objects(address.as_deref()).await,
        Commands::Info => engine.network_status().await,
    };

    println!("{}", output);
    Ok(())
}

/// Assemble and validate the engine configuration from CLI flags
fn build_config(cli: &Cli) -> Result<LedgerConfig> {
    let wallet = cli.wallet.clone().ok_or_else(|| {
        anyhow::anyhow!("no wallet address: pass --wallet or set SUI_WALLET_ADDRESS")
    })?;

    let network: Network = cli.network.parse()?;
    let mut config = LedgerConfig::new(wallet).with_network(network);
    if let Some(url) = &cli.rpc_url {
        config = config.with_rpc_url(url);
    }
    config.validate()?;
    Ok(config)
}

//! Configuration for the Sui ledger engine
//!
//! Configuration is an explicit value handed to each component's
//! constructor rather than ambient process state. It can be assembled
//! programmatically with the builder-style `with_*` methods or loaded
//! from the environment, with the following priority:
//! 1. Explicit values set by the caller
//! 2. Environment variables (`SUI_WALLET_ADDRESS`, `SUI_RPC_URL`,
//!    `SUI_NETWORK`)
//! 3. Network defaults
//!
//! A missing wallet address is reported as a typed error at startup, not
//! discovered mid-request.
//!
//! # Example
//!
//! ```no_run
//! use sui_ledger_core::config::{LedgerConfig, Network};
//!
//! let config = LedgerConfig::new("0x4f2e63be8e7fe287836e29cde6f3d5cbc96eefd0c0e3f3747668faa2ae7324b0")
//!     .with_network(Network::Mainnet);
//! config.validate()?;
//! # Ok::<(), sui_ledger_core::Error>(())
//! ```

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable holding the wallet address
pub const ENV_WALLET_ADDRESS: &str = "SUI_WALLET_ADDRESS";
/// Environment variable overriding the RPC endpoint
pub const ENV_RPC_URL: &str = "SUI_RPC_URL";
/// Environment variable selecting the network
pub const ENV_NETWORK: &str = "SUI_NETWORK";

/// Sui network selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network
    Mainnet,
    /// Public test network (default)
    Testnet,
    /// Development network
    Devnet,
}

impl Network {
    /// Default fullnode endpoint for this network
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Network::Testnet => "https://fullnode.testnet.sui.io:443",
            Network::Devnet => "https://fullnode.devnet.sui.io:443",
        }
    }

    /// Get the display name of the network
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::Testnet
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            other => Err(Error::config(format!("unknown network: {}", other))),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Read-only configuration shared by every pipeline invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Active wallet address (derived from a credential the engine never inspects)
    pub wallet_address: String,
    /// JSON-RPC endpoint
    pub rpc_url: String,
    /// Network the endpoint belongs to
    pub network: Network,
    /// HTTP request timeout in seconds
    pub timeout_seconds: u64,
    /// Page size for directional transaction queries
    pub query_page_size: usize,
}

impl LedgerConfig {
    /// Create a configuration for the given wallet on the default testnet endpoint
    pub fn new(wallet_address: impl Into<String>) -> Self {
        let network = Network::default();
        Self {
            wallet_address: wallet_address.into(),
            rpc_url: network.default_rpc_url().to_string(),
            network,
            timeout_seconds: 30,
            query_page_size: crate::QUERY_PAGE_SIZE,
        }
    }

    /// Select a network, switching to its default endpoint
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self.rpc_url = network.default_rpc_url().to_string();
        self
    }

    /// Override the RPC endpoint
    pub fn with_rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = url.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_seconds = timeout.as_secs();
        self
    }

    /// Load configuration from the environment
    ///
    /// `SUI_WALLET_ADDRESS` is required; `SUI_NETWORK` and `SUI_RPC_URL`
    /// fall back to testnet and the network's fullnode endpoint.
    pub fn from_env() -> Result<Self> {
        let wallet_address = std::env::var(ENV_WALLET_ADDRESS).map_err(|_| {
            Error::missing_credential(format!("{} is required", ENV_WALLET_ADDRESS))
        })?;

        let network = match std::env::var(ENV_NETWORK) {
            Ok(value) => value.parse()?,
            Err(_) => Network::default(),
        };

        let rpc_url = std::env::var(ENV_RPC_URL)
            .unwrap_or_else(|_| network.default_rpc_url().to_string());

        let config = Self {
            wallet_address,
            rpc_url,
            network,
            timeout_seconds: 30,
            query_page_size: crate::QUERY_PAGE_SIZE,
        };
        config.validate()?;
        Ok(config)
    }

    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Validate address and endpoint shape
    pub fn validate(&self) -> Result<()> {
        validate_address(&self.wallet_address)?;
        if self.rpc_url.is_empty() {
            return Err(Error::config("RPC URL must not be empty"));
        }
        if self.query_page_size == 0 {
            return Err(Error::config("query page size must be positive"));
        }
        Ok(())
    }
}

/// Check that an address looks like a Sui address (0x-prefixed hex)
pub fn validate_address(address: &str) -> Result<()> {
    let hex_part = address
        .strip_prefix("0x")
        .ok_or_else(|| Error::invalid_address(format!("{}: missing 0x prefix", address)))?;
    if hex_part.is_empty() || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::invalid_address(format!(
            "{}: expected hex digits after 0x",
            address
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = "0x4f2e63be8e7fe287836e29cde6f3d5cbc96eefd0c0e3f3747668faa2ae7324b0";

    #[test]
    fn test_defaults() {
        let config = LedgerConfig::new(WALLET);
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.rpc_url, "https://fullnode.testnet.sui.io:443");
        assert_eq!(config.query_page_size, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_network_switch_updates_endpoint() {
        let config = LedgerConfig::new(WALLET).with_network(Network::Mainnet);
        assert_eq!(config.rpc_url, "https://fullnode.mainnet.sui.io:443");
    }

    #[test]
    fn test_explicit_endpoint_survives() {
        let config = LedgerConfig::new(WALLET)
            .with_network(Network::Mainnet)
            .with_rpc_url("https://my-node.example.com");
        assert_eq!(config.rpc_url, "https://my-node.example.com");
    }

    #[test]
    fn test_network_parsing() {
        assert_eq!("Mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("testnet".parse::<Network>().unwrap(), Network::Testnet);
        assert!("localnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_address_validation() {
        assert!(validate_address(WALLET).is_ok());
        assert!(validate_address("0xabc").is_ok());
        assert!(validate_address("abc").is_err());
        assert!(validate_address("0x").is_err());
        assert!(validate_address("0xzz").is_err());
    }

    #[test]
    fn test_invalid_wallet_rejected_at_startup() {
        let config = LedgerConfig::new("not-an-address");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidAddress(_)));
    }
}

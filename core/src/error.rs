//! Error types for the Sui ledger core library
//!
//! This module defines the error type hierarchy for the history engine,
//! from configuration and credential problems to RPC transport failures.
//! Within the engine every failure degrades to a textual message returned
//! to the caller; these types only travel between internal pipeline stages.

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for Sui ledger operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required credential was not supplied
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// Invalid address format
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// RPC communication error
    #[error("RPC error: {0}")]
    Rpc(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new missing-credential error
    pub fn missing_credential(msg: impl Into<String>) -> Self {
        Self::MissingCredential(msg.into())
    }

    /// Create a new invalid-address error
    pub fn invalid_address(msg: impl Into<String>) -> Self {
        Self::InvalidAddress(msg.into())
    }

    /// Create a new RPC error
    pub fn rpc(msg: impl Into<String>) -> Self {
        Self::Rpc(msg.into())
    }

    /// Check if error originated in the transport layer (can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Rpc(_) | Self::Http(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_constructors() {
        let err = Error::config("bad endpoint");
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: bad endpoint");

        let err = Error::missing_credential("SUI_WALLET_ADDRESS");
        assert_eq!(err.to_string(), "Missing credential: SUI_WALLET_ADDRESS");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(Error::rpc("timeout").is_recoverable());
        assert!(!Error::config("broken").is_recoverable());
        assert!(!Error::invalid_address("0x").is_recoverable());
    }
}

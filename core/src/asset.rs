//! Asset classification and amount formatting
//!
//! Coin types are bucketed into three classes by an ordered predicate
//! table evaluated top to bottom: the native coin (matched by type
//! suffix), the tracked stablecoin (matched by case-insensitive
//! substring), and everything else as a generic token named by the last
//! path segment of its type string. The table order is the precedence
//! contract; adding a rule means deciding where it ranks.

/// Smallest-unit scale of the native coin (1 SUI = 10^9 MIST)
pub const MIST_PER_SUI: u64 = 1_000_000_000;
/// Smallest-unit scale of the stablecoin (1 USDC = 10^6 units)
pub const UNITS_PER_USDC: u64 = 1_000_000;

/// Type suffix identifying the native coin
const NATIVE_SUFFIX: &str = "::sui::SUI";
/// Substring identifying the stablecoin, compared case-insensitively
const STABLE_NEEDLE: &str = "usdc";

/// Asset class of one coin type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetClass {
    /// The chain's base settlement asset
    Native,
    /// The tracked stablecoin
    Stable,
    /// Any other fungible token, named by its type's last path segment
    Token(String),
}

impl AssetClass {
    /// Classify a coin type string
    ///
    /// Evaluated in priority order: native suffix, stablecoin substring,
    /// generic token fallback.
    pub fn from_coin_type(coin_type: &str) -> Self {
        if coin_type.ends_with(NATIVE_SUFFIX) {
            return AssetClass::Native;
        }
        if coin_type.to_lowercase().contains(STABLE_NEEDLE) {
            return AssetClass::Stable;
        }
        AssetClass::Token(last_segment(coin_type).to_string())
    }

    /// Display symbol for this class
    pub fn symbol(&self) -> &str {
        match self {
            AssetClass::Native => "SUI",
            AssetClass::Stable => "USDC",
            AssetClass::Token(name) => name,
        }
    }

    /// Convert a raw smallest-unit amount to the display scale, absolute value
    ///
    /// Generic tokens have no known scale and keep their raw magnitude.
    pub fn to_decimal(&self, amount: i128) -> f64 {
        let magnitude = amount.unsigned_abs() as f64;
        match self {
            AssetClass::Native => magnitude / MIST_PER_SUI as f64,
            AssetClass::Stable => magnitude / UNITS_PER_USDC as f64,
            AssetClass::Token(_) => magnitude,
        }
    }

    /// Render an amount with this class's symbol and decimal convention
    ///
    /// Native amounts carry 9 decimal places, stablecoin amounts 2, and
    /// generic tokens print their raw integer magnitude.
    pub fn format_amount(&self, amount: i128) -> String {
        match self {
            AssetClass::Native => format!("{:.9} {}", self.to_decimal(amount), self.symbol()),
            AssetClass::Stable => format!("{:.2} {}", self.to_decimal(amount), self.symbol()),
            AssetClass::Token(name) => format!("{} {}", amount.unsigned_abs(), name),
        }
    }
}

/// Last `::`-separated segment of a namespaced type or target string
pub fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

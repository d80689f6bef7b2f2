//! Network and wire encoding configuration
//!
//! Everything here is a plain value handed to the builder or wallet that
//! needs it. There is no process-wide state.

use serde::{Deserialize, Serialize};

/// Maximum decimals for perpetual prices
pub const PERP_MAX_DECIMALS: u32 = 6;
/// Maximum decimals for spot prices
pub const SPOT_MAX_DECIMALS: u32 = 8;
/// Spot asset ids live at `10000 + pair index`
pub const SPOT_ASSET_OFFSET: u32 = 10_000;

/// Network configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Mainnet environment
    #[default]
    Mainnet,
    /// Testnet environment
    Testnet,
}

impl Network {
    /// Phantom agent source used when signing L1 actions
    pub fn agent_source(&self) -> &'static str {
        match self {
            Network::Mainnet => "a",
            Network::Testnet => "b",
        }
    }

    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }
}

/// Market family an order is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    /// Perpetual futures
    Perp,
    /// Spot pairs
    Spot,
}

/// How the numeric encoder treats values finer than the decimal budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionMode {
    /// Round to the decimal budget before trimming
    #[default]
    Round,
    /// Reject values with more fractional digits than the budget allows
    Strict,
    /// Send the shortest decimal form of the value, only trimming cosmetically
    Passthrough,
}

/// Wire encoding parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireConfig {
    pub perp_max_decimals: u32,
    pub spot_max_decimals: u32,
    pub spot_asset_offset: u32,
    pub precision: PrecisionMode,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            perp_max_decimals: PERP_MAX_DECIMALS,
            spot_max_decimals: SPOT_MAX_DECIMALS,
            spot_asset_offset: SPOT_ASSET_OFFSET,
            precision: PrecisionMode::default(),
        }
    }
}

impl WireConfig {
    /// Set the precision mode (default: round)
    pub fn with_precision(mut self, precision: PrecisionMode) -> Self {
        self.precision = precision;
        self
    }

    /// Override the perpetual decimal budget
    pub fn with_perp_max_decimals(mut self, decimals: u32) -> Self {
        self.perp_max_decimals = decimals;
        self
    }

    /// Override the spot decimal budget
    pub fn with_spot_max_decimals(mut self, decimals: u32) -> Self {
        self.spot_max_decimals = decimals;
        self
    }

    /// Decimal budget for the given market family
    pub fn max_decimals(&self, market: MarketKind) -> u32 {
        match market {
            MarketKind::Perp => self.perp_max_decimals,
            MarketKind::Spot => self.spot_max_decimals,
        }
    }

    /// Offset added to an asset index to get its wire asset id
    pub fn asset_offset(&self, market: MarketKind) -> u32 {
        match market {
            MarketKind::Perp => 0,
            MarketKind::Spot => self.spot_asset_offset,
        }
    }
}

//! Wire-level types for Hyperliquid order actions
//!
//! This module contains the exact shapes the exchange's `/exchange` endpoint
//! expects for order placement, plus the metadata responses used to resolve
//! coin symbols into asset ids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hexutil::hex_to_array;

/// Action type tag for order placement
pub const ORDER_ACTION_TYPE: &str = "order";

// ============================================================================
// Common Enums
// ============================================================================

/// Time in force options for orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Add liquidity only - order is rejected if it would take liquidity
    #[serde(rename = "Alo")]
    Alo,
    /// Immediate or cancel - fill what's possible immediately, cancel the rest
    #[serde(rename = "Ioc")]
    Ioc,
    /// Good till cancelled - order remains active until filled or cancelled
    #[serde(rename = "Gtc")]
    Gtc,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Alo => "Alo",
            TimeInForce::Ioc => "Ioc",
            TimeInForce::Gtc => "Gtc",
        }
    }
}

/// Trigger type for conditional orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerType {
    /// Take profit
    Tp,
    /// Stop loss
    Sl,
}

impl TriggerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerType::Tp => "tp",
            TriggerType::Sl => "sl",
        }
    }
}

/// How the orders of one action relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderGrouping {
    /// Independent orders
    #[default]
    Na,
    /// Entry order with attached take profit / stop loss
    NormalTpsl,
    /// Take profit / stop loss attached to the whole position
    PositionTpsl,
}

impl OrderGrouping {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderGrouping::Na => "na",
            OrderGrouping::NormalTpsl => "normalTpsl",
            OrderGrouping::PositionTpsl => "positionTpsl",
        }
    }
}

// ============================================================================
// Client Order Id
// ============================================================================

/// 128-bit client order id, carried on the wire as `0x` + 32 hex digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cloid(String);

impl Cloid {
    /// Parse a client order id from hex (with or without `0x`)
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes: [u8; 16] = hex_to_array(input)?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cloid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Cloid {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Cloid> for String {
    fn from(cloid: Cloid) -> Self {
        cloid.0
    }
}

// ============================================================================
// Exchange Endpoint Types
// ============================================================================

/// Limit order specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrderType {
    pub tif: TimeInForce,
}

/// Trigger order specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerOrderType {
    pub is_market: bool,
    pub trigger_px: String,
    pub tpsl: TriggerType,
}

/// Order type as sent on the wire (limit or trigger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderTypeWire {
    Limit { limit: LimitOrderType },
    Trigger { trigger: TriggerOrderType },
}

/// Individual order as sent on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderWire {
    /// Asset id
    pub a: u32,
    /// Is buy
    pub b: bool,
    /// Limit price
    pub p: String,
    /// Size
    pub s: String,
    /// Reduce only
    pub r: bool,
    /// Order type (limit or trigger)
    pub t: OrderTypeWire,
    /// Client order ID (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<Cloid>,
}

/// Builder fee specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderFee {
    /// Builder address
    pub b: String,
    /// Fee in tenths of a basis point
    pub f: u64,
}

/// Order placement action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceOrderAction {
    #[serde(rename = "type")]
    pub action_type: String,
    pub orders: Vec<OrderWire>,
    pub grouping: OrderGrouping,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<BuilderFee>,
}

impl PlaceOrderAction {
    /// Attach a builder fee to the action
    pub fn with_builder(mut self, builder: BuilderFee) -> Self {
        self.builder = Some(builder);
        self
    }
}

// ============================================================================
// Info Endpoint Response Types
// ============================================================================

/// Perpetual asset metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerpAssetMeta {
    pub name: String,
    pub sz_decimals: u32,
    pub max_leverage: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_isolated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_delisted: Option<bool>,
}

/// Perpetuals metadata response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerpMetaResponse {
    pub universe: Vec<PerpAssetMeta>,
}

/// Spot token metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotToken {
    pub name: String,
    pub sz_decimals: u32,
    pub wei_decimals: u32,
    pub index: u32,
    pub token_id: String,
    pub is_canonical: bool,
}

/// Spot pair metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotPair {
    pub name: String,
    pub tokens: Vec<u32>,
    pub index: u32,
    pub is_canonical: bool,
}

/// Spot metadata response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotMetaResponse {
    pub tokens: Vec<SpotToken>,
    pub universe: Vec<SpotPair>,
}

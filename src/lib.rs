//! Hyperliquid order wire encoding
//!
//! Converts symbolic order intents into the exact wire representation the
//! Hyperliquid exchange expects, including:
//! - Asset metadata resolution (coin symbol to asset id and size decimals)
//! - Price and size decimal encoding
//! - Order wire and place-order action assembly
//! - Signature packaging and L1 action signing

pub mod auth;
pub mod config;
pub mod error;
pub mod exchange;
pub mod hexutil;
pub mod meta;
pub mod numeric;
pub mod order;
pub mod signature;
pub mod types;

pub use auth::{action_hash, Wallet};
pub use config::{MarketKind, Network, PrecisionMode, WireConfig};
pub use error::{Error, Result};
pub use exchange::ExchangeRequest;
pub use hexutil::hex_to_bytes;
pub use meta::{AssetInfo, AssetMap};
pub use numeric::{float_to_wire, price_to_wire, size_to_wire};
pub use order::{order_wires_to_action, OrderRequest, OrderType, OrderWireBuilder};
pub use signature::{struct_to_map, to_typed_sig, RsvSignature, Signable, SigningMap};
pub use types::*;

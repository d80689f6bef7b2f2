//! Order wire construction
//!
//! Turns symbolic [`OrderRequest`]s into [`OrderWire`] records and batches
//! them into a [`PlaceOrderAction`] ready for signing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{MarketKind, WireConfig};
use crate::error::{Error, Result};
use crate::meta::{AssetInfo, AssetMap};
use crate::numeric::{price_to_wire, size_to_wire};
use crate::types::{
    Cloid, LimitOrderType, OrderGrouping, OrderTypeWire, OrderWire, PlaceOrderAction,
    TimeInForce, TriggerOrderType, TriggerType, ORDER_ACTION_TYPE,
};

/// Order type as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    Limit {
        tif: TimeInForce,
    },
    #[serde(rename_all = "camelCase")]
    Trigger {
        trigger_px: f64,
        is_market: bool,
        tpsl: TriggerType,
    },
}

/// A user-level order intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub coin: String,
    pub is_buy: bool,
    pub limit_px: f64,
    pub sz: f64,
    pub reduce_only: bool,
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloid: Option<Cloid>,
}

impl OrderRequest {
    /// Create a limit order request
    pub fn limit(
        coin: impl Into<String>,
        is_buy: bool,
        limit_px: f64,
        sz: f64,
        tif: TimeInForce,
    ) -> Self {
        Self {
            coin: coin.into(),
            is_buy,
            limit_px,
            sz,
            reduce_only: false,
            order_type: OrderType::Limit { tif },
            cloid: None,
        }
    }

    /// Create a trigger (take profit / stop loss) order request
    ///
    /// `is_market` makes the order execute at market once triggered;
    /// `limit_px` still bounds the fill price.
    pub fn trigger(
        coin: impl Into<String>,
        is_buy: bool,
        limit_px: f64,
        sz: f64,
        trigger_px: f64,
        is_market: bool,
        tpsl: TriggerType,
    ) -> Self {
        Self {
            coin: coin.into(),
            is_buy,
            limit_px,
            sz,
            reduce_only: false,
            order_type: OrderType::Trigger {
                trigger_px,
                is_market,
                tpsl,
            },
            cloid: None,
        }
    }

    /// Set reduce only flag
    pub fn reduce_only(mut self, reduce_only: bool) -> Self {
        self.reduce_only = reduce_only;
        self
    }

    /// Set client order ID
    pub fn cloid(mut self, cloid: Cloid) -> Self {
        self.cloid = Some(cloid);
        self
    }
}

/// Builds wire records with an explicit [`WireConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderWireBuilder {
    config: WireConfig,
}

impl OrderWireBuilder {
    pub fn new(config: WireConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    /// Build the wire record for one order
    ///
    /// Fails with `SymbolNotFound` when `request.coin` is not in `assets`.
    pub fn build(
        &self,
        assets: &AssetMap,
        request: &OrderRequest,
        market: MarketKind,
    ) -> Result<OrderWire> {
        let info = assets.resolve(&request.coin)?;
        self.build_with_info(info, request, market)
    }

    /// Build the wire record from already-resolved metadata
    pub fn build_with_info(
        &self,
        info: AssetInfo,
        request: &OrderRequest,
        market: MarketKind,
    ) -> Result<OrderWire> {
        let max_decimals = self.config.max_decimals(market);
        let mode = self.config.precision;
        let offset = self.config.asset_offset(market);
        let asset = info.asset_id.checked_add(offset).ok_or_else(|| {
            Error::InvalidParameter(format!(
                "asset id {} + offset {} for {} overflows",
                info.asset_id, offset, request.coin
            ))
        })?;

        let t = match request.order_type {
            OrderType::Limit { tif } => OrderTypeWire::Limit {
                limit: LimitOrderType { tif },
            },
            OrderType::Trigger {
                trigger_px,
                is_market,
                tpsl,
            } => OrderTypeWire::Trigger {
                trigger: TriggerOrderType {
                    is_market,
                    trigger_px: price_to_wire(trigger_px, max_decimals, info.sz_decimals, mode)?,
                    tpsl,
                },
            },
        };

        let wire = OrderWire {
            a: asset,
            b: request.is_buy,
            p: price_to_wire(request.limit_px, max_decimals, info.sz_decimals, mode)?,
            s: size_to_wire(request.sz, info.sz_decimals, mode)?,
            r: request.reduce_only,
            t,
            c: request.cloid.clone(),
        };

        debug!(
            coin = %request.coin,
            asset = wire.a,
            px = %wire.p,
            sz = %wire.s,
            "built order wire"
        );
        Ok(wire)
    }

    /// Build every request and group them into one action
    ///
    /// The first failing request aborts the whole batch.
    pub fn build_action(
        &self,
        assets: &AssetMap,
        requests: &[OrderRequest],
        market: MarketKind,
        grouping: OrderGrouping,
    ) -> Result<PlaceOrderAction> {
        let orders = requests
            .iter()
            .map(|request| self.build(assets, request, market))
            .collect::<Result<Vec<_>>>()?;
        Ok(order_wires_to_action(orders, grouping))
    }
}

/// Group wire records into an order action, keeping their order
pub fn order_wires_to_action(orders: Vec<OrderWire>, grouping: OrderGrouping) -> PlaceOrderAction {
    PlaceOrderAction {
        action_type: ORDER_ACTION_TYPE.to_string(),
        orders,
        grouping,
        builder: None,
    }
}

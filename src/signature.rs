//! Signature packaging and signing maps
//!
//! Converts raw ECDSA components into the `{r, s, v}` hex triplet the
//! exchange expects, and projects signable actions into ordered key/value
//! maps consumed by the typed-data signer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::types::{
    BuilderFee, LimitOrderType, OrderTypeWire, OrderWire, PlaceOrderAction, TriggerOrderType,
};

/// Ordered field map handed to the typed-data signer
///
/// Insertion order is the canonical field order of the action.
pub type SigningMap = serde_json::Map<String, Value>;

/// Signature components for API submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvSignature {
    pub r: String,
    pub s: String,
    pub v: u8,
}

impl RsvSignature {
    /// Split a 65-byte `r || s || v` signature
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 65 {
            return Err(Error::Auth(format!(
                "Signature must be 65 bytes, got {}",
                bytes.len()
            )));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(to_typed_sig(r, s, bytes[64]))
    }
}

/// Package raw signature components as `0x`-prefixed hex
pub fn to_typed_sig(r: [u8; 32], s: [u8; 32], v: u8) -> RsvSignature {
    RsvSignature {
        r: format!("0x{}", hex::encode(r)),
        s: format!("0x{}", hex::encode(s)),
        v,
    }
}

/// Flatten any serializable value into a signing map
///
/// The value must serialize to a JSON object. Nothing is returned on
/// failure, so callers never see a partially filled map.
pub fn struct_to_map<T: Serialize + ?Sized>(value: &T) -> Result<SigningMap> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::MalformedAction(format!(
            "expected an object, got {}",
            json_kind(&other)
        ))),
        Err(e) => Err(Error::MalformedAction(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Statically typed projection into a signing map
///
/// Implementations destructure `self` without `..` so a new field that is
/// not projected fails to compile.
pub trait Signable {
    fn to_signing_map(&self) -> SigningMap;
}

impl Signable for LimitOrderType {
    fn to_signing_map(&self) -> SigningMap {
        let LimitOrderType { tif } = self;
        let mut map = SigningMap::new();
        map.insert("tif".to_string(), Value::from(tif.as_str()));
        map
    }
}

impl Signable for TriggerOrderType {
    fn to_signing_map(&self) -> SigningMap {
        let TriggerOrderType {
            is_market,
            trigger_px,
            tpsl,
        } = self;
        let mut map = SigningMap::new();
        map.insert("isMarket".to_string(), Value::Bool(*is_market));
        map.insert("triggerPx".to_string(), Value::String(trigger_px.clone()));
        map.insert("tpsl".to_string(), Value::from(tpsl.as_str()));
        map
    }
}

impl Signable for OrderTypeWire {
    fn to_signing_map(&self) -> SigningMap {
        let mut map = SigningMap::new();
        match self {
            OrderTypeWire::Limit { limit } => {
                map.insert("limit".to_string(), Value::Object(limit.to_signing_map()));
            }
            OrderTypeWire::Trigger { trigger } => {
                map.insert("trigger".to_string(), Value::Object(trigger.to_signing_map()));
            }
        }
        map
    }
}

impl Signable for OrderWire {
    fn to_signing_map(&self) -> SigningMap {
        let OrderWire { a, b, p, s, r, t, c } = self;
        let mut map = SigningMap::new();
        map.insert("a".to_string(), Value::from(*a));
        map.insert("b".to_string(), Value::Bool(*b));
        map.insert("p".to_string(), Value::String(p.clone()));
        map.insert("s".to_string(), Value::String(s.clone()));
        map.insert("r".to_string(), Value::Bool(*r));
        map.insert("t".to_string(), Value::Object(t.to_signing_map()));
        if let Some(cloid) = c {
            map.insert("c".to_string(), Value::from(cloid.as_str()));
        }
        map
    }
}

impl Signable for BuilderFee {
    fn to_signing_map(&self) -> SigningMap {
        let BuilderFee { b, f } = self;
        let mut map = SigningMap::new();
        map.insert("b".to_string(), Value::String(b.clone()));
        map.insert("f".to_string(), Value::from(*f));
        map
    }
}

impl Signable for PlaceOrderAction {
    fn to_signing_map(&self) -> SigningMap {
        let PlaceOrderAction {
            action_type,
            orders,
            grouping,
            builder,
        } = self;
        let mut map = SigningMap::new();
        map.insert("type".to_string(), Value::String(action_type.clone()));
        map.insert(
            "orders".to_string(),
            Value::Array(
                orders
                    .iter()
                    .map(|order| Value::Object(order.to_signing_map()))
                    .collect(),
            ),
        );
        map.insert("grouping".to_string(), Value::from(grouping.as_str()));
        if let Some(builder) = builder {
            map.insert("builder".to_string(), Value::Object(builder.to_signing_map()));
        }
        map
    }
}

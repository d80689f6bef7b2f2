//! Symbol to asset metadata resolution
//!
//! An [`AssetMap`] is built once from the exchange's `meta` / `spotMeta`
//! responses and then only read. A lookup miss is always an error: a
//! zero asset id would silently route an order to the first listed market.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{PerpMetaResponse, SpotMetaResponse, SpotToken};

/// Trading parameters of a single symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    /// Index in the perp universe, or spot pair index (before the spot offset)
    pub asset_id: u32,
    /// Maximum fractional digits of an order size
    pub sz_decimals: u32,
}

impl AssetInfo {
    pub fn new(asset_id: u32, sz_decimals: u32) -> Self {
        Self {
            asset_id,
            sz_decimals,
        }
    }
}

/// Immutable `symbol -> AssetInfo` mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMap {
    assets: HashMap<String, AssetInfo>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the perpetuals map: the i-th universe entry has asset id `i`
    pub fn from_perp_meta(meta: &PerpMetaResponse) -> Self {
        let assets = meta
            .universe
            .iter()
            .enumerate()
            .map(|(index, asset)| {
                (
                    asset.name.clone(),
                    AssetInfo::new(index as u32, asset.sz_decimals),
                )
            })
            .collect::<HashMap<_, _>>();

        debug!(assets = assets.len(), "built perp asset map");
        Self { assets }
    }

    /// Build the spot map from pair and token metadata
    ///
    /// Every pair is registered under its own name (`"PURR/USDC"`, `"@107"`)
    /// and, when not already taken, under its base token's name (`"PURR"`,
    /// `"HYPE"`). Size decimals come from the base token.
    pub fn from_spot_meta(meta: &SpotMetaResponse) -> Result<Self> {
        let tokens: HashMap<u32, &SpotToken> =
            meta.tokens.iter().map(|token| (token.index, token)).collect();

        let mut map = Self::new();
        let mut aliases = Vec::new();

        for pair in &meta.universe {
            let base_index = pair.tokens.first().copied().ok_or_else(|| {
                Error::InvalidParameter(format!("spot pair {} has no tokens", pair.name))
            })?;
            let base = tokens.get(&base_index).ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "spot pair {} references unknown token {}",
                    pair.name, base_index
                ))
            })?;

            let info = AssetInfo::new(pair.index, base.sz_decimals);
            map.insert(pair.name.clone(), info);
            aliases.push((base.name.clone(), info));
        }

        for (name, info) in aliases {
            map.assets.entry(name).or_insert(info);
        }

        debug!(assets = map.len(), "built spot asset map");
        Ok(map)
    }

    /// Register or replace a symbol
    pub fn insert(&mut self, coin: impl Into<String>, info: AssetInfo) -> Option<AssetInfo> {
        self.assets.insert(coin.into(), info)
    }

    /// Look up the metadata for `coin`
    pub fn resolve(&self, coin: &str) -> Result<AssetInfo> {
        match self.assets.get(coin) {
            Some(info) => Ok(*info),
            None => {
                warn!(coin, "no asset metadata for symbol");
                Err(Error::SymbolNotFound(coin.to_string()))
            }
        }
    }

    pub fn contains(&self, coin: &str) -> bool {
        self.assets.contains_key(coin)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetInfo)> {
        self.assets.iter().map(|(coin, info)| (coin.as_str(), info))
    }
}

impl<S: Into<String>> FromIterator<(S, AssetInfo)> for AssetMap {
    fn from_iter<I: IntoIterator<Item = (S, AssetInfo)>>(iter: I) -> Self {
        Self {
            assets: iter
                .into_iter()
                .map(|(coin, info)| (coin.into(), info))
                .collect(),
        }
    }
}

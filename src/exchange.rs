//! Signed request bodies for the `/exchange` endpoint
//!
//! Sending the request is left to the caller's transport; this module only
//! pairs an action with its nonce and signature in the body shape the
//! exchange expects.

use ethers::types::Address;
use serde::Serialize;

use crate::auth::Wallet;
use crate::error::Result;
use crate::signature::{RsvSignature, Signable};

/// Exchange request wrapper with authentication
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest<T> {
    pub action: T,
    pub nonce: u64,
    pub signature: RsvSignature,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault_address: Option<String>,
}

impl<T> ExchangeRequest<T> {
    pub fn new(
        action: T,
        nonce: u64,
        signature: RsvSignature,
        vault_address: Option<Address>,
    ) -> Self {
        Self {
            action,
            nonce,
            signature,
            vault_address: vault_address.map(|addr| format!("{addr:?}")),
        }
    }
}

impl Wallet {
    /// Sign an action and wrap it into a request body
    ///
    /// # Example
    /// ```ignore
    /// use hyperliquid_order_wire::*;
    ///
    /// let wallet = Wallet::from_private_key("0x...", Network::Mainnet)?;
    /// let builder = OrderWireBuilder::new(WireConfig::default());
    /// let order = OrderRequest::limit("ETH", true, 3000.0, 0.5, TimeInForce::Gtc);
    ///
    /// let action = builder.build_action(&assets, &[order], MarketKind::Perp, OrderGrouping::Na)?;
    /// let request = wallet.sign_request(action, Wallet::generate_nonce(), None).await?;
    /// let body = serde_json::to_string(&request)?;
    /// ```
    pub async fn sign_request<T: Signable>(
        &self,
        action: T,
        nonce: u64,
        vault_address: Option<Address>,
    ) -> Result<ExchangeRequest<T>> {
        let signature = self.sign_l1_action(&action, nonce, vault_address).await?;
        Ok(ExchangeRequest::new(action, nonce, signature, vault_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MarketKind, Network, WireConfig};
    use crate::meta::{AssetInfo, AssetMap};
    use crate::order::{OrderRequest, OrderWireBuilder};
    use crate::signature::to_typed_sig;
    use crate::types::{OrderGrouping, TimeInForce};

    const TEST_PRIVATE_KEY: &str =
        "0x0123456789012345678901234567890123456789012345678901234567890123";

    fn action() -> crate::types::PlaceOrderAction {
        let assets: AssetMap = [("ETH", AssetInfo::new(1, 4))].into_iter().collect();
        OrderWireBuilder::new(WireConfig::default())
            .build_action(
                &assets,
                &[OrderRequest::limit("ETH", true, 3000.0, 0.5, TimeInForce::Gtc)],
                MarketKind::Perp,
                OrderGrouping::Na,
            )
            .unwrap()
    }

    #[test]
    fn test_request_serialization() {
        let request = ExchangeRequest::new(action(), 1700000000000, to_typed_sig([1; 32], [2; 32], 27), None);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["action"]["type"], "order");
        assert_eq!(json["action"]["orders"][0]["p"], "3000");
        assert_eq!(json["action"]["orders"][0]["s"], "0.5");
        assert_eq!(json["nonce"], 1700000000000u64);
        assert_eq!(json["signature"]["v"], 27);
        assert!(json.get("vaultAddress").is_none());
    }

    #[test]
    fn test_request_vault_address_is_lowercase_hex() {
        let vault: Address = "0x1719884eb866cb12b2287399b15f7db5e7d775ea"
            .parse()
            .unwrap();
        let request = ExchangeRequest::new(action(), 1, to_typed_sig([1; 32], [2; 32], 28), Some(vault));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["vaultAddress"],
            "0x1719884eb866cb12b2287399b15f7db5e7d775ea"
        );
    }

    #[tokio::test]
    async fn test_sign_request() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, Network::Testnet).unwrap();
        let action = action();

        let request = wallet.sign_request(action.clone(), 99, None).await.unwrap();
        let expected = wallet.sign_l1_action(&action, 99, None).await.unwrap();

        assert_eq!(request.action, action);
        assert_eq!(request.nonce, 99);
        assert_eq!(request.signature, expected);
        assert_eq!(request.vault_address, None);
    }
}

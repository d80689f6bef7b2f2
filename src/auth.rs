//! L1 action signing for Hyperliquid
//!
//! Hyperliquid signs trading actions through a phantom agent: the action's
//! signing map is msgpack-encoded, the nonce and vault address appended, and
//! the keccak256 of that buffer becomes the `connectionId` of an EIP-712
//! `Agent` message. The raw signature is then packaged into an
//! [`RsvSignature`].

use ethers::core::k256::ecdsa::SigningKey;
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{
    transaction::eip712::{EIP712Domain, Eip712DomainType, TypedData, Types},
    Address,
};
use ethers::utils::keccak256;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::config::Network;
use crate::error::{Error, Result};
use crate::hexutil::hex_to_bytes;
use crate::signature::{RsvSignature, Signable, SigningMap};

/// EIP-712 domain separator for Hyperliquid L1 actions
const DOMAIN_NAME: &str = "Exchange";
const DOMAIN_VERSION: &str = "1";
const DOMAIN_CHAIN_ID: u64 = 1337;

/// Wallet wrapper for signing Hyperliquid actions
#[derive(Clone)]
pub struct Wallet {
    inner: LocalWallet,
    network: Network,
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("network", &self.network)
            .finish()
    }
}

impl Wallet {
    /// Create a wallet from a private key hex string
    ///
    /// The private key should be a 32-byte hex string (with or without 0x prefix).
    pub fn from_private_key(private_key: &str, network: Network) -> Result<Self> {
        let key_bytes = hex_to_bytes(private_key)?;

        if key_bytes.len() != 32 {
            return Err(Error::Auth(format!(
                "Private key must be 32 bytes, got {}",
                key_bytes.len()
            )));
        }

        let signing_key = SigningKey::from_bytes(key_bytes.as_slice().into())
            .map_err(|e| Error::Auth(format!("Invalid private key: {}", e)))?;

        Ok(Self {
            inner: LocalWallet::from(signing_key),
            network,
        })
    }

    /// Create a wallet from raw private key bytes
    pub fn from_bytes(private_key: &[u8; 32], network: Network) -> Result<Self> {
        let signing_key = SigningKey::from_bytes(private_key.into())
            .map_err(|e| Error::Auth(format!("Invalid private key: {}", e)))?;

        Ok(Self {
            inner: LocalWallet::from(signing_key),
            network,
        })
    }

    /// Get the wallet's Ethereum address
    pub fn address(&self) -> Address {
        self.inner.address()
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Generate a nonce (current timestamp in milliseconds)
    pub fn generate_nonce() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    /// Sign an L1 action (orders, cancels, ...)
    ///
    /// # Arguments
    /// * `action` - The action to sign
    /// * `nonce` - Timestamp in milliseconds
    /// * `vault_address` - Optional vault address to trade on behalf of
    pub async fn sign_l1_action<A: Signable + ?Sized>(
        &self,
        action: &A,
        nonce: u64,
        vault_address: Option<Address>,
    ) -> Result<RsvSignature> {
        let map = action.to_signing_map();
        self.sign_signing_map(&map, nonce, vault_address).await
    }

    /// Sign an already flattened action
    pub async fn sign_signing_map(
        &self,
        map: &SigningMap,
        nonce: u64,
        vault_address: Option<Address>,
    ) -> Result<RsvSignature> {
        let connection_id = action_hash(map, nonce, vault_address)?;
        let typed_data = create_agent_typed_data(self.network.agent_source(), connection_id);

        let signature = self
            .inner
            .sign_typed_data(&typed_data)
            .await
            .map_err(|e| Error::Auth(format!("Failed to sign: {}", e)))?;

        debug!(
            nonce,
            connection_id = %hex::encode(connection_id),
            "signed l1 action"
        );
        RsvSignature::from_bytes(&signature.to_vec())
    }
}

/// Compute the connection ID (keccak256 hash) for a flattened action
///
/// Format:
/// - msgpack(action)
/// - nonce as 8 bytes big-endian
/// - vault flag (1 byte): 1 if vault present, 0 otherwise
/// - vault address (20 bytes) if present
pub fn action_hash(
    map: &SigningMap,
    nonce: u64,
    vault_address: Option<Address>,
) -> Result<[u8; 32]> {
    let mut data = rmp_serde::to_vec_named(map)
        .map_err(|e| Error::MalformedAction(format!("Failed to serialize action: {}", e)))?;

    data.extend_from_slice(&nonce.to_be_bytes());

    match vault_address {
        Some(addr) => {
            data.push(1u8);
            data.extend_from_slice(addr.as_bytes());
        }
        None => {
            data.push(0u8);
        }
    }

    Ok(keccak256(&data))
}

/// Create the EIP-712 typed data for the phantom agent
fn create_agent_typed_data(source: &str, connection_id: [u8; 32]) -> TypedData {
    let field = |name: &str, ty: &str| Eip712DomainType {
        name: name.to_string(),
        r#type: ty.to_string(),
    };

    let mut types = Types::new();
    types.insert(
        "EIP712Domain".to_string(),
        vec![
            field("name", "string"),
            field("version", "string"),
            field("chainId", "uint256"),
            field("verifyingContract", "address"),
        ],
    );
    types.insert(
        "Agent".to_string(),
        vec![field("source", "string"), field("connectionId", "bytes32")],
    );

    let domain = EIP712Domain {
        name: Some(DOMAIN_NAME.to_string()),
        version: Some(DOMAIN_VERSION.to_string()),
        chain_id: Some(DOMAIN_CHAIN_ID.into()),
        verifying_contract: Some(Address::zero()),
        salt: None,
    };

    let mut message = BTreeMap::new();
    message.insert(
        "source".to_string(),
        serde_json::Value::String(source.to_string()),
    );
    message.insert(
        "connectionId".to_string(),
        serde_json::Value::String(format!("0x{}", hex::encode(connection_id))),
    );

    TypedData {
        types,
        domain,
        primary_type: "Agent".to_string(),
        message,
    }
}

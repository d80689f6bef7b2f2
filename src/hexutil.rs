//! Hex decoding for addresses, keys and client order ids

use crate::error::{Error, Result};

/// Decode a hex string, with or without a leading `0x`
///
/// Malformed input is an error, never an empty or partial byte vector.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    hex::decode(digits).map_err(|e| Error::InvalidHex(format!("{input:?}: {e}")))
}

/// Decode a hex string into exactly `N` bytes
pub fn hex_to_array<const N: usize>(input: &str) -> Result<[u8; N]> {
    let bytes = hex_to_bytes(input)?;
    let len = bytes.len();
    bytes
        .try_into()
        .map_err(|_| Error::InvalidHex(format!("{input:?}: expected {N} bytes, got {len}")))
}

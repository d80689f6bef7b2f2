//! Error types for order wire encoding and signing

use thiserror::Error;

/// Result type alias for wire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building, encoding or signing an action
///
/// None of these are soft warnings: an order that produced one of them must
/// not be submitted.
#[derive(Error, Debug)]
pub enum Error {
    /// No asset metadata registered for the symbol
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The action could not be flattened into a signing map
    #[error("Malformed action: {0}")]
    MalformedAction(String),

    /// Hex input could not be decoded
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// The value carries more fractional digits than the decimal budget allows
    #[error("Precision overflow: {value} exceeds {max_decimals} decimal places")]
    PrecisionOverflow { value: f64, max_decimals: u32 },

    /// NaN or infinite value handed to the numeric encoder
    #[error("Non-finite number: {0}")]
    NonFiniteNumber(f64),

    /// Invalid parameter error
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Key loading or signing error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

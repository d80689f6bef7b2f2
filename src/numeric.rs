//! Decimal string encoding for prices and sizes
//!
//! Hyperliquid accepts at most `max_decimals` significant decimals for a
//! price (6 on perpetuals, 8 on spot), counted after reserving room for the
//! integer part, and never more than `max_decimals - szDecimals` fractional
//! digits. Sizes carry at most `szDecimals` fractional digits.
//!
//! Output never uses exponent notation or a leading `+`, has no trailing
//! zeros after the decimal point and no bare trailing point.

use tracing::warn;

use crate::config::PrecisionMode;
use crate::error::{Error, Result};

/// Encode `x` with the integer-reserving decimal budget
///
/// `100.250000` with a budget of 6 becomes `"100.25"`, `100.0` becomes `"100"`.
pub fn float_to_wire(x: f64, max_decimals: u32, mode: PrecisionMode) -> Result<String> {
    ensure_finite(x)?;
    encode(x, decimal_budget(x, max_decimals), mode)
}

/// Encode a limit or trigger price
pub fn price_to_wire(
    x: f64,
    max_decimals: u32,
    sz_decimals: u32,
    mode: PrecisionMode,
) -> Result<String> {
    ensure_finite(x)?;
    let places = decimal_budget(x, max_decimals).min(max_decimals.saturating_sub(sz_decimals));
    encode(x, places, mode)
}

/// Encode an order size to at most `sz_decimals` fractional digits
pub fn size_to_wire(x: f64, sz_decimals: u32, mode: PrecisionMode) -> Result<String> {
    ensure_finite(x)?;
    encode(x, sz_decimals, mode)
}

/// Fractional digits left once the integer part of `|x|` is accounted for
///
/// An integer part of `0` still counts as one digit.
pub fn decimal_budget(x: f64, max_decimals: u32) -> u32 {
    max_decimals.saturating_sub(integer_digits(x))
}

fn integer_digits(x: f64) -> u32 {
    let integral = format!("{:.0}", x.abs().trunc());
    integral.len() as u32
}

fn ensure_finite(x: f64) -> Result<()> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteNumber(x))
    }
}

fn encode(x: f64, places: u32, mode: PrecisionMode) -> Result<String> {
    let rendered = match mode {
        PrecisionMode::Round => format!("{:.*}", places as usize, x),
        PrecisionMode::Strict => {
            if fractional_digits(x) > places {
                warn!(value = x, max_decimals = places, "value exceeds decimal budget");
                return Err(Error::PrecisionOverflow {
                    value: x,
                    max_decimals: places,
                });
            }
            x.to_string()
        }
        PrecisionMode::Passthrough => x.to_string(),
    };
    Ok(trim_decimal(rendered))
}

/// Digits after the point in the shortest round-trip rendering of `x`
fn fractional_digits(x: f64) -> u32 {
    let shortest = x.abs().to_string();
    shortest
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len() as u32)
}

fn trim_decimal(mut rendered: String) -> String {
    if rendered.contains('.') {
        let kept = rendered.trim_end_matches('0').trim_end_matches('.').len();
        rendered.truncate(kept);
    }
    if rendered == "-0" {
        rendered.remove(0);
    }
    rendered
}

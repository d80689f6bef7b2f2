//! Property tests for wire encoding and order assembly

use hyperliquid_order_wire::{
    float_to_wire, order_wires_to_action, price_to_wire, size_to_wire, to_typed_sig, AssetInfo,
    AssetMap, Error, MarketKind, OrderGrouping, OrderRequest, OrderWireBuilder, PrecisionMode,
    Signable, TimeInForce, WireConfig,
};
use proptest::prelude::*;

fn assert_canonical(wire: &str) {
    assert!(!wire.contains('e') && !wire.contains('E'), "exponent in {wire}");
    assert!(!wire.starts_with('+'), "leading plus in {wire}");
    assert!(!wire.ends_with('.'), "bare trailing point in {wire}");
    if wire.contains('.') {
        assert!(!wire.ends_with('0'), "trailing zero in {wire}");
    }
}

/// Half a unit in the last kept place, plus float noise
fn tolerance(x: f64, places: u32) -> f64 {
    0.5 * 10f64.powi(-(places as i32)) * (1.0 + 1e-9) + x.abs() * 1e-15
}

/// Prices and sizes in the range the exchange actually trades
fn arb_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.000001f64..1.0,
        1.0f64..1_000.0,
        1_000.0f64..10_000_000.0,
        (0u32..1_000_000).prop_map(f64::from),
    ]
}

proptest! {
    #[test]
    fn float_wire_is_canonical_and_close(
        x in arb_value(),
        negative in any::<bool>(),
        max_decimals in prop_oneof![Just(6u32), Just(8u32)],
    ) {
        let x = if negative { -x } else { x };
        let wire = float_to_wire(x, max_decimals, PrecisionMode::Round).unwrap();
        assert_canonical(&wire);

        let places = max_decimals.saturating_sub(format!("{:.0}", x.abs().trunc()).len() as u32);
        let parsed: f64 = wire.parse().unwrap();
        prop_assert!((parsed - x).abs() <= tolerance(x, places), "{x} -> {wire}");
    }

    #[test]
    fn float_wire_is_idempotent(
        x in arb_value(),
        max_decimals in prop_oneof![Just(6u32), Just(8u32)],
    ) {
        let once = float_to_wire(x, max_decimals, PrecisionMode::Round).unwrap();
        let twice = float_to_wire(once.parse().unwrap(), max_decimals, PrecisionMode::Round).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn price_and_size_wire_are_canonical(
        x in arb_value(),
        sz_decimals in 0u32..6,
    ) {
        let price = price_to_wire(x, 6, sz_decimals, PrecisionMode::Round).unwrap();
        let size = size_to_wire(x, sz_decimals, PrecisionMode::Round).unwrap();
        assert_canonical(&price);
        assert_canonical(&size);

        let size_places = size.split_once('.').map_or(0, |(_, f)| f.len() as u32);
        prop_assert!(size_places <= sz_decimals);

        let price_places = price.split_once('.').map_or(0, |(_, f)| f.len() as u32);
        prop_assert!(price_places <= 6 - sz_decimals);
    }

    #[test]
    fn price_wire_is_close_and_idempotent(
        x in arb_value(),
        max_decimals in prop_oneof![Just(6u32), Just(8u32)],
        sz_decimals in 0u32..6,
    ) {
        let once = price_to_wire(x, max_decimals, sz_decimals, PrecisionMode::Round).unwrap();
        let parsed: f64 = once.parse().unwrap();

        let integer_digits = format!("{:.0}", x.trunc()).len() as u32;
        let places = max_decimals
            .saturating_sub(integer_digits)
            .min(max_decimals - sz_decimals);
        prop_assert!((parsed - x).abs() <= tolerance(x, places), "{x} -> {once}");

        let twice = price_to_wire(parsed, max_decimals, sz_decimals, PrecisionMode::Round).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn size_wire_is_close_and_idempotent(
        x in arb_value(),
        sz_decimals in 0u32..9,
    ) {
        let once = size_to_wire(x, sz_decimals, PrecisionMode::Round).unwrap();
        let parsed: f64 = once.parse().unwrap();
        prop_assert!((parsed - x).abs() <= tolerance(x, sz_decimals), "{x} -> {once}");

        let twice = size_to_wire(parsed, sz_decimals, PrecisionMode::Round).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn strict_output_matches_round_when_accepted(
        x in arb_value(),
        sz_decimals in 0u32..6,
    ) {
        match size_to_wire(x, sz_decimals, PrecisionMode::Strict) {
            Ok(strict) => {
                prop_assert_eq!(strict, size_to_wire(x, sz_decimals, PrecisionMode::Round).unwrap());
            }
            Err(Error::PrecisionOverflow { max_decimals, .. }) => {
                prop_assert_eq!(max_decimals, sz_decimals);
            }
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    #[test]
    fn spot_asset_id_is_offset(asset_id in 0u32..5_000, sz_decimals in 0u32..6) {
        let assets: AssetMap = [("COIN", AssetInfo::new(asset_id, sz_decimals))]
            .into_iter()
            .collect();
        let builder = OrderWireBuilder::new(WireConfig::default());
        let request = OrderRequest::limit("COIN", true, 1.5, 2.0, TimeInForce::Gtc);

        let perp = builder.build(&assets, &request, MarketKind::Perp).unwrap();
        let spot = builder.build(&assets, &request, MarketKind::Spot).unwrap();
        prop_assert_eq!(perp.a, asset_id);
        prop_assert_eq!(spot.a, asset_id + 10_000);
    }

    #[test]
    fn batch_order_is_preserved(sizes in prop::collection::vec(1u32..50, 0..12)) {
        let assets: AssetMap = [("ETH", AssetInfo::new(1, 4))].into_iter().collect();
        let builder = OrderWireBuilder::default();
        let wires: Vec<_> = sizes
            .iter()
            .map(|sz| {
                let request = OrderRequest::limit("ETH", true, 3000.0, f64::from(*sz), TimeInForce::Alo);
                builder.build(&assets, &request, MarketKind::Perp).unwrap()
            })
            .collect();

        let action = order_wires_to_action(wires.clone(), OrderGrouping::Na);
        prop_assert_eq!(action.orders.len(), sizes.len());
        prop_assert_eq!(&action.orders, &wires);

        let projected = action.to_signing_map();
        let orders = projected["orders"].as_array().unwrap();
        for (wire, sz) in orders.iter().zip(&sizes) {
            prop_assert_eq!(wire["s"].as_str().unwrap(), sz.to_string());
        }
    }
}

#[test]
fn integral_and_trailing_zero_examples() {
    assert_eq!(float_to_wire(100.0, 6, PrecisionMode::Round).unwrap(), "100");
    assert_eq!(float_to_wire(100.250000, 6, PrecisionMode::Round).unwrap(), "100.25");
}

#[test]
fn signature_packaging_example() {
    let sig = to_typed_sig([0x11; 32], [0x22; 32], 27);
    assert_eq!(sig.r, format!("0x{}", "1".repeat(64)));
    assert_eq!(sig.s, format!("0x{}", "2".repeat(64)));
    assert_eq!(sig.v, 27);
}

#[test]
fn missing_symbol_never_defaults() {
    let assets = AssetMap::new();
    let builder = OrderWireBuilder::default();
    let request = OrderRequest::limit("BTC", true, 1.0, 1.0, TimeInForce::Gtc);
    assert!(matches!(
        builder.build(&assets, &request, MarketKind::Perp),
        Err(Error::SymbolNotFound(_))
    ));
}

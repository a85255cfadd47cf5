//! Property-based tests for currency operations.
//!
//! - Conversion of exact major amounts round-trips through display
//! - Conversion never rounds up

use proptest::prelude::*;
use skarbonka_shared::types::{EUR, Monetary, PLN};

use super::conversion::{MajorAmount, convert_major_to_minor};

/// Strategy to generate minor-unit amounts (0.00 to 10,000,000.00).
fn minor_amount() -> impl Strategy<Value = i64> {
    0i64..1_000_000_000i64
}

/// Renders minor units as major-unit text with two decimals.
fn as_text(minor: i64) -> String {
    format!("{}.{:02}", minor / 100, minor % 100)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Text with exactly `exponent` fractional digits converts exactly and
    /// displays back unchanged.
    #[test]
    fn prop_text_round_trips_through_display(minor in minor_amount()) {
        let text = as_text(minor);
        let converted = convert_major_to_minor(&MajorAmount::Text(text.clone()), &PLN).unwrap();
        prop_assert_eq!(converted, minor);

        let displayed = Monetary::new(converted, PLN).unwrap().to_string();
        prop_assert_eq!(displayed, format!("PLN {text}"));
    }

    /// Comma and period separators are interchangeable.
    #[test]
    fn prop_comma_equals_period(minor in minor_amount()) {
        let period = as_text(minor);
        let comma = period.replace('.', ",");
        prop_assert_eq!(
            convert_major_to_minor(&MajorAmount::Text(period), &EUR).unwrap(),
            convert_major_to_minor(&MajorAmount::Text(comma), &EUR).unwrap()
        );
    }

    /// Extra fractional digits are discarded, never rounded up.
    #[test]
    fn prop_extra_digits_floor(minor in minor_amount(), extra in 0u8..10) {
        let text = format!("{}{extra}", as_text(minor));
        let converted = convert_major_to_minor(&MajorAmount::Text(text), &PLN).unwrap();
        prop_assert_eq!(converted, minor);
    }

    /// Whole major amounts scale by the currency factor.
    #[test]
    fn prop_integer_scales_exactly(major in 0i64..1_000_000_000_000) {
        let converted = convert_major_to_minor(&MajorAmount::Integer(major), &PLN).unwrap();
        prop_assert_eq!(converted, major * 100);
    }
}

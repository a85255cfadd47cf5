//! Property-based tests for monetary arithmetic.

use proptest::prelude::*;

use super::currency::{Currency, EUR, PLN, USD};
use super::money::Monetary;
use super::money_error::MoneyError;

/// Strategy to generate minor-unit amounts that cannot overflow when added.
fn amount() -> impl Strategy<Value = i64> {
    0i64..(i64::MAX / 2)
}

/// Strategy to pick one of the built-in currencies.
fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(PLN), Just(USD), Just(EUR)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Adding two amounts of one currency sums the minor units.
    #[test]
    fn prop_add_sums_amounts(a in amount(), b in amount(), c in currency()) {
        let m1 = Monetary::new(a, c).unwrap();
        let m2 = Monetary::new(b, c).unwrap();
        let sum = m1.add(&m2).unwrap();
        prop_assert_eq!(sum.amount(), a + b);
        prop_assert_eq!(sum.currency_code(), c.code());
    }

    /// Add is commutative.
    #[test]
    fn prop_add_commutative(a in amount(), b in amount()) {
        let m1 = Monetary::new(a, PLN).unwrap();
        let m2 = Monetary::new(b, PLN).unwrap();
        prop_assert_eq!(m1.add(&m2).unwrap(), m2.add(&m1).unwrap());
    }

    /// Subtracting what was added gives back the original amount.
    #[test]
    fn prop_subtract_inverts_add(a in amount(), b in amount()) {
        let m1 = Monetary::new(a, PLN).unwrap();
        let m2 = Monetary::new(b, PLN).unwrap();
        prop_assert_eq!(m1.add(&m2).unwrap().subtract(&m2).unwrap(), m1);
    }

    /// Subtraction never yields a negative amount.
    #[test]
    fn prop_subtract_never_negative(a in amount(), b in amount()) {
        let m1 = Monetary::new(a, PLN).unwrap();
        let m2 = Monetary::new(b, PLN).unwrap();
        match m1.subtract(&m2) {
            Ok(diff) => prop_assert!(diff.amount() >= 0),
            Err(err) => {
                prop_assert_eq!(err, MoneyError::NegativeResult);
                prop_assert!(b > a);
            }
        }
    }

    /// Combining different currencies always fails.
    #[test]
    fn prop_mismatched_currencies_rejected(a in amount(), b in amount()) {
        let m1 = Monetary::new(a, PLN).unwrap();
        let m2 = Monetary::new(b, USD).unwrap();
        let add_is_mismatch = matches!(m1.add(&m2), Err(MoneyError::CurrencyMismatch { .. }));
        let sub_is_mismatch = matches!(m1.subtract(&m2), Err(MoneyError::CurrencyMismatch { .. }));
        prop_assert!(add_is_mismatch);
        prop_assert!(sub_is_mismatch);
    }

    /// Multiplying then dividing by the same integer is lossless.
    #[test]
    fn prop_multiply_divide_integer(a in 0i64..1_000_000_000, k in 1i64..1000) {
        let m = Monetary::new(a, EUR).unwrap();
        let scaled = m.multiply(k).unwrap();
        prop_assert_eq!(scaled.amount(), a * k);
        prop_assert_eq!(scaled.divide(k).unwrap(), m);
    }

    /// Negative amounts are never constructible.
    #[test]
    fn prop_negative_amount_rejected(a in i64::MIN..0) {
        prop_assert_eq!(Monetary::new(a, PLN), Err(MoneyError::InvalidAmount(a)));
    }
}

//! Monetary value with integer minor-unit storage and currency.
//!
//! CRITICAL: Amounts are stored as integers in the currency's minor unit
//! (grosze, cents). Scaling goes through `rust_decimal::Decimal`, never
//! through floating point.

use std::cmp::Ordering;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::{Currency, CurrencyCode};
use super::money_error::MoneyError;

/// Represents a non-negative amount of money in a given currency.
///
/// Values are immutable: every arithmetic operation returns a new
/// `Monetary` and fails rather than producing a negative amount.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Monetary {
    amount: i64,
    currency: Currency,
}

impl Monetary {
    /// Creates a new Monetary instance from an amount in minor units.
    ///
    /// Fails with [`MoneyError::InvalidAmount`] if `amount` is negative.
    pub fn new(amount: i64, currency: Currency) -> Result<Self, MoneyError> {
        if amount < 0 {
            return Err(MoneyError::InvalidAmount(amount));
        }
        Ok(Self { amount, currency })
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Amount in minor units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Currency descriptor of this amount.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// ISO 4217 code of the held currency.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency.code()
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Adds two amounts of the same currency.
    pub fn add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }

    /// Subtracts `other` from this amount.
    ///
    /// Fails with [`MoneyError::NegativeResult`] when `other` is larger.
    pub fn subtract(&self, other: &Self) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        // Both operands are non-negative, so this cannot overflow.
        let amount = self.amount - other.amount;
        if amount < 0 {
            return Err(MoneyError::NegativeResult);
        }
        Ok(self.with_amount(amount))
    }

    /// Multiplies by a scalar, rounding half to even.
    ///
    /// Reals are passed as `Decimal` (see `Decimal::try_from(f64)`).
    pub fn multiply(&self, factor: impl Into<Decimal>) -> Result<Self, MoneyError> {
        let product = Decimal::from(self.amount)
            .checked_mul(factor.into())
            .ok_or(MoneyError::Overflow)?;
        self.rounded(product)
    }

    /// Divides by a scalar, rounding half to even.
    pub fn divide(&self, divisor: impl Into<Decimal>) -> Result<Self, MoneyError> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = Decimal::from(self.amount)
            .checked_div(divisor)
            .ok_or(MoneyError::Overflow)?;
        self.rounded(quotient)
    }

    /// Compares two amounts of the same currency.
    pub fn compare(&self, other: &Self) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Amount in major units, e.g. `100.5` for 10050 grosze.
    #[must_use]
    pub fn to_major(&self) -> Decimal {
        // factor >= 1, so the division cannot overflow.
        Decimal::from(self.amount) / Decimal::from(self.currency.factor())
    }

    fn ensure_same_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency.code() == other.currency.code() {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency.code(),
                got: other.currency.code(),
            })
        }
    }

    const fn with_amount(&self, amount: i64) -> Self {
        Self {
            amount,
            currency: self.currency,
        }
    }

    fn rounded(&self, raw: Decimal) -> Result<Self, MoneyError> {
        let rounded = raw.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        if rounded < Decimal::ZERO {
            return Err(MoneyError::NegativeResult);
        }
        let amount = rounded.to_i64().ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(amount))
    }
}

/// Formats as `"{code} {major}"` with `exponent` fractional digits.
impl std::fmt::Display for Monetary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = usize::try_from(self.currency.exponent()).unwrap_or(usize::MAX);
        write!(
            f,
            "{} {:.precision$}",
            self.currency.code(),
            self.to_major()
        )
    }
}

impl std::fmt::Debug for Monetary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Monetary({}, {})", self.amount, self.currency.code())
    }
}

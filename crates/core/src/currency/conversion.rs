//! Major-to-minor unit conversion.
//!
//! CRITICAL: Rounding strategy for user-entered amounts:
//! - Integers are scaled exactly
//! - Reals and text are scaled in decimal arithmetic and FLOORED
//! - Fractional minor units are discarded, never rounded up
//!
//! This deliberately differs from `Monetary::multiply`/`divide`, which use
//! banker's rounding.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;
use skarbonka_shared::types::{Currency, MoneyError};
use tracing::debug;

/// An amount in major units as entered by a user.
#[derive(Debug, Clone, PartialEq)]
pub enum MajorAmount {
    /// Whole major units, e.g. `12` zloty.
    Integer(i64),
    /// Fractional major units, e.g. `12.34`.
    Real(f64),
    /// Raw text, e.g. `" 12,34 "`.
    Text(String),
}

impl MajorAmount {
    /// Classifies a loosely typed value (e.g. from a JSON payload).
    ///
    /// Fails with [`MoneyError::TypeMismatch`] for anything that is neither a
    /// number nor a string.
    pub fn from_untyped(value: &Value) -> Result<Self, MoneyError> {
        match value {
            Value::Number(number) => match (number.as_i64(), number.as_f64()) {
                (Some(integer), _) => Ok(Self::Integer(integer)),
                (None, Some(real)) => Ok(Self::Real(real)),
                (None, None) => Err(MoneyError::ParseError(number.to_string())),
            },
            Value::String(text) => Ok(Self::Text(text.clone())),
            other => Err(MoneyError::TypeMismatch(format!(
                "expected a number or a string, got {other}"
            ))),
        }
    }
}

impl From<i64> for MajorAmount {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for MajorAmount {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<&str> for MajorAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MajorAmount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Converts an amount in major units into the currency's minor units.
///
/// # Example
///
/// ```
/// use skarbonka_core::currency::{convert_major_to_minor, MajorAmount};
/// use skarbonka_shared::types::PLN;
///
/// assert_eq!(convert_major_to_minor(&MajorAmount::from("1.567"), &PLN).unwrap(), 156);
/// ```
pub fn convert_major_to_minor(value: &MajorAmount, currency: &Currency) -> Result<i64, MoneyError> {
    let factor = currency.factor();
    let minor = match value {
        MajorAmount::Integer(major) => {
            if *major < 0 {
                return Err(MoneyError::NegativeAmount);
            }
            major.checked_mul(factor).ok_or(MoneyError::Overflow)?
        }
        MajorAmount::Real(major) => floor_to_minor(real_to_decimal(*major)?, factor)?,
        MajorAmount::Text(raw) => floor_to_minor(parse_major(raw)?, factor)?,
    };

    debug!(?value, currency = %currency.code(), minor, "Converted major amount");
    Ok(minor)
}

/// Parses user text, accepting `,` as the decimal separator.
fn parse_major(raw: &str) -> Result<Decimal, MoneyError> {
    let normalized = raw.trim().replace(',', ".");
    if let Ok(major) =
        Decimal::from_str(&normalized).or_else(|_| Decimal::from_scientific(&normalized))
    {
        return Ok(major);
    }
    // Valid numbers outside the decimal range, e.g. "1e-30" or "1e30".
    match normalized.parse::<f64>() {
        Ok(major) if major.is_finite() => real_to_decimal(major),
        _ => Err(MoneyError::ParseError(raw.to_string())),
    }
}

/// Converts a real to its shortest decimal representation, so 1.11 scales to 111.
///
/// Finite values outside the decimal range collapse to zero when smaller than
/// one major unit and overflow otherwise.
fn real_to_decimal(major: f64) -> Result<Decimal, MoneyError> {
    if !major.is_finite() {
        return Err(MoneyError::ParseError(major.to_string()));
    }
    if major < 0.0 {
        return Err(MoneyError::NegativeAmount);
    }
    Decimal::try_from(major).or_else(|_| {
        if major < 1.0 {
            Ok(Decimal::ZERO)
        } else {
            Err(MoneyError::Overflow)
        }
    })
}

fn floor_to_minor(major: Decimal, factor: i64) -> Result<i64, MoneyError> {
    if major < Decimal::ZERO {
        return Err(MoneyError::NegativeAmount);
    }
    major
        .checked_mul(Decimal::from(factor))
        .ok_or(MoneyError::Overflow)?
        .floor()
        .to_i64()
        .ok_or(MoneyError::Overflow)
}

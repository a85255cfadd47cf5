//! Errors raised by the monetary value model.
//!
//! Every variant is a local validation failure; none of them is retryable.

use thiserror::Error;

use super::currency::CurrencyCode;

/// Errors that can occur while constructing, converting, or combining money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Construction Errors ==========
    /// Minor-unit amount handed to a constructor was negative.
    #[error("Invalid amount {0}: amount can not be negative")]
    InvalidAmount(i64),

    /// Currency descriptor is malformed (zero base, oversized factor, duplicate code).
    #[error("Currency configuration error: {0}")]
    Configuration(String),

    /// Currency code is not three ASCII letters.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),

    /// Currency code is not present in the currency table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(CurrencyCode),

    // ========== Arithmetic Errors ==========
    /// Two amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: CurrencyCode,
        /// Currency of the right-hand operand.
        got: CurrencyCode,
    },

    /// An operand of the wrong kind was supplied.
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    /// The result of an operation would be below zero.
    #[error("Operation would produce a negative amount")]
    NegativeResult,

    /// Division by a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// Result does not fit in the minor-unit range.
    #[error("Amount overflow")]
    Overflow,

    // ========== Conversion Errors ==========
    /// Major-unit input was negative.
    #[error("Amount can not be negative")]
    NegativeAmount,

    /// Major-unit input could not be read as a number.
    #[error("Given value {0:?} cannot be converted into a number")]
    ParseError(String),
}

impl MoneyError {
    /// Returns a stable error code for display and logging.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::Configuration(_) => "CURRENCY_CONFIGURATION",
            Self::InvalidCurrencyCode(_) => "INVALID_CURRENCY_CODE",
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::TypeMismatch(_) => "TYPE_MISMATCH",
            Self::NegativeResult => "NEGATIVE_RESULT",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "AMOUNT_OVERFLOW",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::ParseError(_) => "PARSE_ERROR",
        }
    }
}

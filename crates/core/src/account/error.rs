//! Account error types.

use skarbonka_shared::types::{AccountId, Monetary, MoneyError};
use thiserror::Error;

/// Errors that can occur while opening or updating an account.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Account name is blank.
    #[error("Account name can not be empty")]
    EmptyName,

    /// Debit is larger than the current balance.
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance before the debit.
        balance: Monetary,
        /// Amount that was requested.
        requested: Monetary,
    },

    /// Entry is booked on a different account.
    #[error("Entry belongs to account {got}, not {expected}")]
    WrongAccount {
        /// This account.
        expected: AccountId,
        /// Account named by the entry.
        got: AccountId,
    },

    /// Underlying money operation failed.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl AccountError {
    /// Returns the error code for messages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_ACCOUNT_NAME",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::WrongAccount { .. } => "WRONG_ACCOUNT",
            Self::Money(err) => err.error_code(),
        }
    }
}

//! Budget entry error types.

use skarbonka_shared::types::MoneyError;
use thiserror::Error;

use super::types::MAX_DESCRIPTION_LEN;

/// A single rule broken by a new entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryViolation {
    /// Amount could not be converted.
    #[error("amount: {0}")]
    Amount(#[from] MoneyError),

    /// Amount converted to zero minor units.
    #[error("amount must be positive")]
    ZeroAmount,

    /// Description exceeds the maximum length.
    #[error("description is too long ({0} characters, maximum {max})", max = MAX_DESCRIPTION_LEN)]
    DescriptionTooLong(usize),
}

/// Budget entry errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Entry type is neither income nor outcome.
    #[error("Unknown entry type {0:?}: choose 'income' or 'outcome'")]
    UnknownEntryType(String),

    /// One or more validation rules failed.
    #[error("Invalid entry: {}", join_violations(.0))]
    Invalid(Vec<EntryViolation>),
}

impl EntryError {
    /// Returns the error code for messages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEntryType(_) => "UNKNOWN_ENTRY_TYPE",
            Self::Invalid(_) => "INVALID_ENTRY",
        }
    }
}

fn join_violations(violations: &[EntryViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

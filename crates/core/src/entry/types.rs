//! Budget entry domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use skarbonka_shared::types::{AccountId, EntryId, Monetary};

use super::error::EntryError;
use crate::currency::MajorAmount;

/// Description used when the user leaves it blank.
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Category used when the user leaves it blank.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Direction of a budget entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money coming into the account.
    Income,
    /// Money leaving the account.
    Outcome,
}

impl EntryType {
    /// Returns the lowercase name used in storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Outcome => "outcome",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryType {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            _ => Err(EntryError::UnknownEntryType(s.to_string())),
        }
    }
}

/// A validated income or outcome recorded against an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetEntry {
    /// Entry ID.
    pub id: EntryId,
    /// Account the entry is booked on.
    pub account_id: AccountId,
    /// Income or outcome.
    pub entry_type: EntryType,
    /// Strictly positive amount in the account's currency.
    pub amount: Monetary,
    /// Free-text description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// Booking date.
    pub date: NaiveDate,
}

/// Raw input for a new budget entry, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudgetEntry {
    /// Account the entry is booked on.
    pub account_id: AccountId,
    /// Income or outcome.
    pub entry_type: EntryType,
    /// Amount in major units as typed by the user.
    pub amount: MajorAmount,
    /// Optional description.
    pub description: Option<String>,
    /// Optional category.
    pub category: Option<String>,
    /// Booking date.
    pub date: NaiveDate,
}

//! Business rule validation for new budget entries.

use skarbonka_shared::types::{Currency, EntryId, Monetary};
use tracing::warn;

use super::error::{EntryError, EntryViolation};
use super::types::{
    BudgetEntry, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, MAX_DESCRIPTION_LEN, NewBudgetEntry,
};
use crate::currency::convert_major_to_minor;

/// Validates a new entry against the account currency.
///
/// All broken rules are collected and reported together.
pub fn validate_entry(
    input: NewBudgetEntry,
    currency: &Currency,
) -> Result<BudgetEntry, EntryError> {
    let mut violations = Vec::new();

    let amount = match convert_major_to_minor(&input.amount, currency)
        .and_then(|minor| Monetary::new(minor, *currency))
    {
        Ok(amount) if amount.is_zero() => {
            violations.push(EntryViolation::ZeroAmount);
            None
        }
        Ok(amount) => Some(amount),
        Err(err) => {
            violations.push(EntryViolation::Amount(err));
            None
        }
    };

    let description = or_default(input.description, DEFAULT_DESCRIPTION);
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LEN {
        violations.push(EntryViolation::DescriptionTooLong(length));
    }

    let category = or_default(input.category, DEFAULT_CATEGORY);

    match amount {
        Some(amount) if violations.is_empty() => Ok(BudgetEntry {
            id: EntryId::new(),
            account_id: input.account_id,
            entry_type: input.entry_type,
            amount,
            description,
            category,
            date: input.date,
        }),
        _ => {
            warn!(
                account_id = %input.account_id,
                violations = violations.len(),
                "Rejected budget entry"
            );
            Err(EntryError::Invalid(violations))
        }
    }
}

fn or_default(value: Option<String>, fallback: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

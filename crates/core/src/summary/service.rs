//! Summary computation over budget entries.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::Datelike;
use skarbonka_shared::types::{Currency, Monetary, MoneyError};
use tracing::debug;

use super::types::{BudgetSummary, CategoryTotal, Net};
use crate::entry::{BudgetEntry, EntryType};

/// Per-category running totals, keyed by category name.
type CategoryTotals<'a> = BTreeMap<&'a str, (Monetary, usize)>;

/// Summary service for income/outcome reporting.
pub struct SummaryService;

impl SummaryService {
    /// Summarizes entries, all of which must be in `currency`.
    ///
    /// Fails with [`MoneyError::CurrencyMismatch`] on the first entry in a
    /// different currency.
    pub fn summarize<'a>(
        entries: impl IntoIterator<Item = &'a BudgetEntry>,
        currency: Currency,
    ) -> Result<BudgetSummary, MoneyError> {
        let mut income = Monetary::zero(currency);
        let mut outcome = Monetary::zero(currency);
        let mut income_by_category = CategoryTotals::new();
        let mut outcome_by_category = CategoryTotals::new();
        let mut entry_count = 0;

        for entry in entries {
            let (total, by_category) = match entry.entry_type {
                EntryType::Income => (&mut income, &mut income_by_category),
                EntryType::Outcome => (&mut outcome, &mut outcome_by_category),
            };
            *total = total.add(&entry.amount)?;

            let slot = by_category
                .entry(entry.category.as_str())
                .or_insert((Monetary::zero(currency), 0));
            slot.0 = slot.0.add(&entry.amount)?;
            slot.1 += 1;
            entry_count += 1;
        }

        let net = match income.compare(&outcome)? {
            Ordering::Less => Net::Deficit(outcome.subtract(&income)?),
            Ordering::Equal | Ordering::Greater => Net::Surplus(income.subtract(&outcome)?),
        };

        debug!(entry_count, %income, %outcome, %net, "Computed budget summary");
        Ok(BudgetSummary {
            currency,
            income,
            outcome,
            income_by_category: into_totals(income_by_category),
            outcome_by_category: into_totals(outcome_by_category),
            net,
            entry_count,
        })
    }

    /// Summarizes the entries dated in the given calendar month.
    pub fn monthly(
        entries: &[BudgetEntry],
        currency: Currency,
        year: i32,
        month: u32,
    ) -> Result<BudgetSummary, MoneyError> {
        Self::summarize(
            entries
                .iter()
                .filter(|entry| entry.date.year() == year && entry.date.month() == month),
            currency,
        )
    }
}

fn into_totals(totals: CategoryTotals<'_>) -> Vec<CategoryTotal> {
    totals
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
        })
        .collect()
}

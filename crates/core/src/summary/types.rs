//! Budget summary types.

use skarbonka_shared::types::{Currency, Monetary};

/// Difference between income and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Net {
    /// Income exceeded (or equalled) outcome by this amount.
    Surplus(Monetary),
    /// Outcome exceeded income by this amount.
    Deficit(Monetary),
}

impl Net {
    /// Signed net amount in minor units.
    #[must_use]
    pub const fn signed_minor(&self) -> i64 {
        match self {
            Self::Surplus(amount) => amount.amount(),
            Self::Deficit(amount) => -amount.amount(),
        }
    }
}

impl std::fmt::Display for Net {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Surplus(amount) => write!(f, "+{amount}"),
            Self::Deficit(amount) => write!(f, "-{amount}"),
        }
    }
}

/// Total of all entries in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    /// Category name.
    pub category: String,
    /// Sum of the category's entries.
    pub total: Monetary,
    /// Number of entries in the category.
    pub count: usize,
}

/// Income and outcome totals over a set of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummary {
    /// Currency all totals are expressed in.
    pub currency: Currency,
    /// Total income.
    pub income: Monetary,
    /// Total outcome.
    pub outcome: Monetary,
    /// Income per category, sorted by category name.
    pub income_by_category: Vec<CategoryTotal>,
    /// Outcome per category, sorted by category name.
    pub outcome_by_category: Vec<CategoryTotal>,
    /// Income minus outcome.
    pub net: Net,
    /// Number of entries summarized.
    pub entry_count: usize,
}

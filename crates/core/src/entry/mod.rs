//! Income and outcome entries booked against accounts.

pub mod error;
pub mod types;
pub mod validation;

pub use error::{EntryError, EntryViolation};
pub use types::{
    BudgetEntry, DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, EntryType, MAX_DESCRIPTION_LEN,
    NewBudgetEntry,
};
pub use validation::validate_entry;

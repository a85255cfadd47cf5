//! Income and outcome summaries.

pub mod service;
pub mod types;


pub use service::SummaryService;
pub use types::{BudgetSummary, CategoryTotal, Net};

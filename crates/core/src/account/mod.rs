//! Accounts and balance updates.

pub mod error;
pub mod types;

pub use error::AccountError;
pub use types::Account;

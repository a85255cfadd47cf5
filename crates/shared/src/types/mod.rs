//! Common types used across the application.

pub mod currency;
pub mod id;
pub mod money;
pub mod money_error;

#[cfg(test)]
mod money_props;

pub use currency::{Currency, CurrencyCode, EUR, PLN, USD};
pub use id::*;
pub use money::Monetary;
pub use money_error::MoneyError;

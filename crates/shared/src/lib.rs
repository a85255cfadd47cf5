//! Shared types, errors, and configuration for Skarbonka.
//!
//! This crate provides the monetary value model used across all other crates:
//! - Currency descriptors and the `Monetary` value with integer minor units
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CurrencyConfig, LoggingConfig};
pub use error::{AppError, AppResult};
pub use types::{Currency, CurrencyCode, Monetary, MoneyError};

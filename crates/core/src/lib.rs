//! Core budget logic for Skarbonka.
//!
//! This crate contains pure business logic with ZERO database or terminal dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `currency` - Major-to-minor conversion and the currency table
//! - `account` - Accounts and balance credit/debit
//! - `entry` - Income and outcome entries
//! - `summary` - Income/outcome summaries per category

pub mod account;
pub mod currency;
pub mod entry;
pub mod summary;

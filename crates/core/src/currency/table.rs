//! Currency lookup table.
//!
//! The table is built once from configuration and handed to whichever
//! component needs to resolve a stored currency code.

use std::collections::BTreeMap;

use skarbonka_shared::CurrencyConfig;
use skarbonka_shared::types::{Currency, CurrencyCode, EUR, Monetary, MoneyError, PLN, USD};

/// Maps ISO 4217 codes to currency descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    currencies: BTreeMap<CurrencyCode, Currency>,
}

impl CurrencyTable {
    /// Table with the built-in currencies (PLN, USD, EUR).
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            currencies: [PLN, USD, EUR]
                .into_iter()
                .map(|currency| (currency.code(), currency))
                .collect(),
        }
    }

    /// Builds a table from descriptors, rejecting duplicate codes.
    pub fn new(currencies: impl IntoIterator<Item = Currency>) -> Result<Self, MoneyError> {
        let mut table = BTreeMap::new();
        for currency in currencies {
            if table.insert(currency.code(), currency).is_some() {
                return Err(MoneyError::Configuration(format!(
                    "{} is defined more than once",
                    currency.code()
                )));
            }
        }
        Ok(Self { currencies: table })
    }

    /// Builds a table from configuration entries.
    pub fn from_config(entries: &[CurrencyConfig]) -> Result<Self, MoneyError> {
        let currencies = entries
            .iter()
            .map(CurrencyConfig::to_currency)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(currencies)
    }

    /// Looks up a currency by its textual code (case-insensitive).
    pub fn lookup(&self, code: &str) -> Result<Currency, MoneyError> {
        let code: CurrencyCode = code.parse()?;
        self.get(code).ok_or(MoneyError::UnknownCurrency(code))
    }

    /// Looks up a currency by code.
    #[must_use]
    pub fn get(&self, code: CurrencyCode) -> Option<Currency> {
        self.currencies.get(&code).copied()
    }

    /// Rebuilds a stored amount from its minor units and currency code.
    pub fn monetary(&self, amount: i64, code: &str) -> Result<Monetary, MoneyError> {
        Monetary::new(amount, self.lookup(code)?)
    }

    /// Known codes in alphabetical order.
    pub fn codes(&self) -> impl Iterator<Item = CurrencyCode> + '_ {
        self.currencies.keys().copied()
    }

    /// Number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Returns true if the table holds no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

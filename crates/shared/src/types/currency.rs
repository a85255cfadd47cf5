//! Currency descriptors.
//!
//! A currency is described by its ISO 4217 code, the numeral base of its
//! subdivision, and the exponent relating major and minor units:
//! `1 major unit = base^exponent minor units`.

use serde::{Deserialize, Serialize};

use super::money_error::MoneyError;

/// Three-letter ISO 4217 currency code, stored upper-cased.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Builds a code from bytes already known to be upper-case ASCII letters.
    const fn from_ascii_upper(code: [u8; 3]) -> Self {
        Self(code)
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CurrencyCode").field(&self.as_str()).finish()
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bytes: [u8; 3] = trimmed
            .as_bytes()
            .try_into()
            .map_err(|_| MoneyError::InvalidCurrencyCode(s.to_string()))?;
        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(MoneyError::InvalidCurrencyCode(s.to_string()));
        }
        Ok(Self(bytes.map(|b| b.to_ascii_uppercase())))
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

/// Immutable description of how a currency subdivides into minor units.
///
/// Descriptors are small `Copy` values shared by every [`super::Monetary`]
/// in that currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    code: CurrencyCode,
    base: u32,
    exponent: u32,
    factor: i64,
}

/// Polish zloty.
pub const PLN: Currency = Currency {
    code: CurrencyCode::from_ascii_upper(*b"PLN"),
    base: 10,
    exponent: 2,
    factor: 100,
};

/// US dollar.
pub const USD: Currency = Currency {
    code: CurrencyCode::from_ascii_upper(*b"USD"),
    base: 10,
    exponent: 2,
    factor: 100,
};

/// Euro.
pub const EUR: Currency = Currency {
    code: CurrencyCode::from_ascii_upper(*b"EUR"),
    base: 10,
    exponent: 2,
    factor: 100,
};

impl Currency {
    /// Creates a currency descriptor.
    ///
    /// Fails with [`MoneyError::Configuration`] when `base` is zero or when
    /// `base^exponent` does not fit in the minor-unit range.
    pub fn new(code: CurrencyCode, base: u32, exponent: u32) -> Result<Self, MoneyError> {
        if base == 0 {
            return Err(MoneyError::Configuration(format!(
                "{code}: base must be positive"
            )));
        }
        let factor = i64::from(base).checked_pow(exponent).ok_or_else(|| {
            MoneyError::Configuration(format!("{code}: {base}^{exponent} is too large"))
        })?;

        Ok(Self {
            code,
            base,
            exponent,
            factor,
        })
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> CurrencyCode {
        self.code
    }

    /// Numeral base of the minor-unit subdivision.
    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// Number of minor-unit digits per major unit.
    #[must_use]
    pub const fn exponent(&self) -> u32 {
        self.exponent
    }

    /// Number of minor units in one major unit (`base^exponent`).
    #[must_use]
    pub const fn factor(&self) -> i64 {
        self.factor
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.code, f)
    }
}

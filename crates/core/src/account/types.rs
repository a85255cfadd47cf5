//! Account entity with a balance held in minor units.

use skarbonka_shared::types::{AccountId, Currency, Monetary, MoneyError};
use tracing::{debug, warn};

use super::error::AccountError;
use crate::currency::{MajorAmount, convert_major_to_minor};
use crate::entry::{BudgetEntry, EntryType};

/// A bank or cash account.
///
/// The balance is never negative: debits larger than the balance are
/// rejected and leave the account untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Display name.
    pub name: String,
    /// Optional bank account number.
    pub number: Option<String>,
    balance: Monetary,
}

impl Account {
    /// Opens an account with an opening balance given in major units.
    pub fn open(
        name: &str,
        number: Option<String>,
        opening_balance: &MajorAmount,
        currency: Currency,
    ) -> Result<Self, AccountError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AccountError::EmptyName);
        }
        let minor = convert_major_to_minor(opening_balance, &currency)?;
        let balance = Monetary::new(minor, currency)?;

        debug!(account = name, %balance, "Opened account");
        Ok(Self {
            id: AccountId::new(),
            name: name.to_string(),
            number: number.filter(|n| !n.trim().is_empty()),
            balance,
        })
    }

    /// Rebuilds an account from stored fields.
    #[must_use]
    pub const fn restore(
        id: AccountId,
        name: String,
        number: Option<String>,
        balance: Monetary,
    ) -> Self {
        Self {
            id,
            name,
            number,
            balance,
        }
    }

    /// Current balance.
    #[must_use]
    pub const fn balance(&self) -> Monetary {
        self.balance
    }

    /// Currency the account is held in.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.balance.currency()
    }

    /// Adds `amount` to the balance and returns the new balance.
    pub fn credit(&mut self, amount: &Monetary) -> Result<Monetary, AccountError> {
        let balance = self.balance.add(amount)?;
        debug!(account_id = %self.id, %amount, %balance, "Credited account");
        self.balance = balance;
        Ok(balance)
    }

    /// Removes `amount` from the balance and returns the new balance.
    pub fn debit(&mut self, amount: &Monetary) -> Result<Monetary, AccountError> {
        let balance = match self.balance.subtract(amount) {
            Ok(balance) => balance,
            Err(MoneyError::NegativeResult) => {
                warn!(account_id = %self.id, balance = %self.balance, %amount, "Debit exceeds balance");
                return Err(AccountError::InsufficientFunds {
                    balance: self.balance,
                    requested: *amount,
                });
            }
            Err(err) => return Err(err.into()),
        };
        debug!(account_id = %self.id, %amount, %balance, "Debited account");
        self.balance = balance;
        Ok(balance)
    }

    /// Books an entry: income credits, outcome debits.
    pub fn apply(&mut self, entry: &BudgetEntry) -> Result<Monetary, AccountError> {
        if entry.account_id != self.id {
            return Err(AccountError::WrongAccount {
                expected: self.id,
                got: entry.account_id,
            });
        }
        match entry.entry_type {
            EntryType::Income => self.credit(&entry.amount),
            EntryType::Outcome => self.debit(&entry.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{NewBudgetEntry, validate_entry};
    use chrono::NaiveDate;
    use skarbonka_shared::types::{EUR, PLN};

    fn account(balance: &str) -> Account {
        Account::open("Main", Some("PL61 1090".to_string()), &balance.into(), PLN).unwrap()
    }

    fn pln(amount: i64) -> Monetary {
        Monetary::new(amount, PLN).unwrap()
    }

    fn entry(account: &Account, entry_type: EntryType, amount: &str) -> BudgetEntry {
        validate_entry(
            NewBudgetEntry {
                account_id: account.id,
                entry_type,
                amount: amount.into(),
                description: None,
                category: None,
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            },
            &account.currency(),
        )
        .unwrap()
    }

    #[test]
    fn test_open_converts_opening_balance() {
        let account = account("1500,50");
        assert_eq!(account.balance(), pln(150_050));
        assert_eq!(account.currency(), PLN);
        assert_eq!(account.name, "Main");
        assert_eq!(account.number.as_deref(), Some("PL61 1090"));
    }

    #[test]
    fn test_open_rejects_blank_name() {
        let result = Account::open("  ", None, &MajorAmount::Integer(1), PLN);
        assert_eq!(result, Err(AccountError::EmptyName));
    }

    #[test]
    fn test_open_rejects_negative_balance() {
        let result = Account::open("Main", None, &MajorAmount::Integer(-1), PLN);
        assert_eq!(result, Err(AccountError::Money(MoneyError::NegativeAmount)));
    }

    #[test]
    fn test_open_drops_blank_number() {
        let account = Account::open("Main", Some(" ".to_string()), &0_i64.into(), PLN).unwrap();
        assert_eq!(account.number, None);
    }

    #[test]
    fn test_credit_and_debit() {
        let mut account = account("100");
        assert_eq!(account.credit(&pln(2550)).unwrap(), pln(12_550));
        assert_eq!(account.debit(&pln(550)).unwrap(), pln(12_000));
        assert_eq!(account.balance(), pln(12_000));
    }

    #[test]
    fn test_debit_exceeding_balance_leaves_balance() {
        let mut account = account("10");
        let result = account.debit(&pln(1001));
        assert_eq!(
            result,
            Err(AccountError::InsufficientFunds {
                balance: pln(1000),
                requested: pln(1001),
            })
        );
        assert_eq!(account.balance(), pln(1000));
    }

    #[test]
    fn test_currency_mismatch() {
        let mut account = account("10");
        let euros = Monetary::new(100, EUR).unwrap();
        assert!(matches!(
            account.credit(&euros),
            Err(AccountError::Money(MoneyError::CurrencyMismatch { .. }))
        ));
        assert!(matches!(
            account.debit(&euros),
            Err(AccountError::Money(MoneyError::CurrencyMismatch { .. }))
        ));
        assert_eq!(account.balance(), pln(1000));
    }

    #[test]
    fn test_apply_entries() {
        let mut account = account("0");
        let salary = entry(&account, EntryType::Income, "4200");
        let rent = entry(&account, EntryType::Outcome, "1800.99");
        account.apply(&salary).unwrap();
        assert_eq!(account.apply(&rent).unwrap(), pln(239_901));
    }

    #[test]
    fn test_apply_rejects_foreign_entry() {
        let mut account = account("0");
        let other = self::account("0");
        let foreign = entry(&other, EntryType::Income, "1");
        assert!(matches!(
            account.apply(&foreign),
            Err(AccountError::WrongAccount { .. })
        ));
    }

    #[test]
    fn test_restore_from_stored_id() {
        let stored = "01890a5d-ac96-774b-bcce-b302099a8057";
        let id: AccountId = stored.parse().unwrap();
        let account = Account::restore(id, "Savings".to_string(), None, pln(42));
        assert_eq!(account.id.to_string(), stored);
        assert_eq!(account.balance(), pln(42));
    }
}

//! Command parsing and execution.

use std::fmt::Write as _;

use skarbonka_core::currency::{CurrencyTable, MajorAmount, convert_major_to_minor};
use skarbonka_core::entry::{BudgetEntry, EntryError, EntryType, NewBudgetEntry, validate_entry};
use skarbonka_core::summary::{BudgetSummary, CategoryTotal, SummaryService};
use skarbonka_shared::types::{AccountId, Currency, Monetary};
use skarbonka_shared::{AppError, AppResult};

/// Usage text printed by `help`.
pub const USAGE: &str = "\
Usage:
  skarbonka convert <amount> [currency]      major units -> minor units
  skarbonka format <minor> [currency]        minor units -> display string
  skarbonka summary <currency> <entry>...    summarize entries
                                             entry = income|outcome:<amount>[:<category>]
  skarbonka help";

/// One entry given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpec {
    /// Income or outcome.
    pub entry_type: EntryType,
    /// Amount in major units, as typed.
    pub amount: String,
    /// Optional category.
    pub category: Option<String>,
}

impl std::str::FromStr for EntrySpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(entry_type), Some(amount)) = (parts.next(), parts.next()) else {
            return Err(AppError::Validation(format!(
                "expected income|outcome:<amount>[:<category>], got {s:?}"
            )));
        };
        Ok(Self {
            entry_type: entry_type
                .parse()
                .map_err(|err: EntryError| AppError::Validation(err.to_string()))?,
            amount: amount.to_string(),
            category: parts.next().map(str::to_string),
        })
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Convert a major-unit amount to minor units.
    Convert {
        /// Amount as typed.
        amount: String,
        /// Currency code, or the configured default.
        currency: Option<String>,
    },
    /// Format a minor-unit amount for display.
    Format {
        /// Minor units.
        minor: i64,
        /// Currency code, or the configured default.
        currency: Option<String>,
    },
    /// Summarize a list of entries.
    Summary {
        /// Currency code of all entries.
        currency: String,
        /// Entries to summarize.
        entries: Vec<EntrySpec>,
    },
    /// Print usage.
    Help,
}

impl Command {
    /// Parses arguments (without the program name).
    pub fn parse(args: &[String]) -> AppResult<Self> {
        let Some((name, rest)) = args.split_first() else {
            return Ok(Self::Help);
        };
        match (name.as_str(), rest) {
            ("convert", [amount]) => Ok(Self::Convert {
                amount: amount.clone(),
                currency: None,
            }),
            ("convert", [amount, currency]) => Ok(Self::Convert {
                amount: amount.clone(),
                currency: Some(currency.clone()),
            }),
            ("format", [minor, currency @ ..]) if currency.len() <= 1 => Ok(Self::Format {
                minor: minor.trim().parse().map_err(|_| {
                    AppError::Validation(format!("minor amount must be an integer, got {minor:?}"))
                })?,
                currency: currency.first().cloned(),
            }),
            ("summary", [currency, entries @ ..]) => Ok(Self::Summary {
                currency: currency.clone(),
                entries: entries
                    .iter()
                    .map(|entry| entry.parse())
                    .collect::<AppResult<_>>()?,
            }),
            ("help" | "--help" | "-h", []) => Ok(Self::Help),
            _ => Err(AppError::Validation(format!(
                "unrecognized arguments: {}\n\n{USAGE}",
                args.join(" ")
            ))),
        }
    }

    /// Runs the command and returns the text to print.
    pub fn execute(&self, table: &CurrencyTable, default_currency: Currency) -> AppResult<String> {
        let resolve = |code: Option<&String>| -> AppResult<Currency> {
            code.map_or(Ok(default_currency), |code| Ok(table.lookup(code)?))
        };

        match self {
            Self::Convert { amount, currency } => {
                let currency = resolve(currency.as_ref())?;
                let minor = convert_major_to_minor(&MajorAmount::Text(amount.clone()), &currency)?;
                Ok(minor.to_string())
            }
            Self::Format { minor, currency } => {
                let currency = resolve(currency.as_ref())?;
                Ok(Monetary::new(*minor, currency)?.to_string())
            }
            Self::Summary { currency, entries } => {
                let currency = table.lookup(currency)?;
                let entries = build_entries(entries, currency)?;
                let summary = SummaryService::summarize(&entries, currency)?;
                render_summary(&summary)
                    .map_err(|err| AppError::Internal(format!("failed to render summary: {err}")))
            }
            Self::Help => Ok(USAGE.to_string()),
        }
    }
}

fn build_entries(specs: &[EntrySpec], currency: Currency) -> AppResult<Vec<BudgetEntry>> {
    let account_id = AccountId::new();
    let today = chrono::Utc::now().date_naive();
    specs
        .iter()
        .map(|spec| {
            validate_entry(
                NewBudgetEntry {
                    account_id,
                    entry_type: spec.entry_type,
                    amount: MajorAmount::Text(spec.amount.clone()),
                    description: None,
                    category: spec.category.clone(),
                    date: today,
                },
                &currency,
            )
            .map_err(|err| AppError::Validation(err.to_string()))
        })
        .collect()
}

fn render_summary(summary: &BudgetSummary) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Entries: {}", summary.entry_count)?;
    writeln!(out, "Income:  {}", summary.income)?;
    render_categories(&mut out, &summary.income_by_category)?;
    writeln!(out, "Outcome: {}", summary.outcome)?;
    render_categories(&mut out, &summary.outcome_by_category)?;
    write!(out, "Net:     {}", summary.net)?;
    Ok(out)
}

fn render_categories(out: &mut String, totals: &[CategoryTotal]) -> std::fmt::Result {
    for total in totals {
        writeln!(out, "  {:<20} {} ({})", total.category, total.total, total.count)?;
    }
    Ok(())
}

//! Skarbonka CLI
//!
//! Command-line entry point for converting, formatting, and summarizing amounts.

mod command;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use command::Command;
use skarbonka_core::currency::CurrencyTable;
use skarbonka_shared::{AppConfig, LoggingConfig};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let table = CurrencyTable::from_config(&config.currencies)
        .context("Invalid currency configuration")?;
    let default_currency = table
        .lookup(&config.default_currency)
        .context("Invalid default currency")?;
    info!(
        currencies = table.len(),
        default_currency = %default_currency,
        "Currency table loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match Command::parse(&args).and_then(|command| command.execute(&table, default_currency)) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), "{err}");
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}

/// Initializes tracing; `RUST_LOG` takes precedence over the configured filter.
fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

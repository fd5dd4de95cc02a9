//! Checks a payments history export and tries to find recurrent payments.
//!
//! Usage:
//!   recurrent-payments operations.csv
//!   recurrent-payments operations.csv --card-last-digits 1234
//!   recurrent-payments operations.csv --sure-recurrent-payments-descriptions "ЖКУ,Аренда"

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use recurrent_payments::{
    AnalysisOptions, StatementBuilder, errors::StatementError, find_recurrent_payments, report,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "recurrent-payments",
    version,
    about = "Checks payments history and tries to find recurrent payments (subscriptions, etc)"
)]
struct Cli {
    /// Path to the payments CSV export
    filepath: String,

    /// Comma-separated descriptions always treated as recurrent
    #[arg(
        long = "sure-recurrent-payments-descriptions",
        alias = "sure_recurrent_payments_descriptions",
        default_value = ""
    )]
    sure_recurrent_payments_descriptions: String,

    /// Only analyze cards whose number ends with these digits
    #[arg(long = "card-last-digits", alias = "card_last_digits")]
    card_last_digits: Option<String>,

    /// Also list payments not charged in the last 30 days
    #[arg(long)]
    include_inactive: bool,

    /// Column delimiter of the export
    #[arg(long, default_value_t = ';')]
    delimiter: char,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false).compact())
        .init();

    let delimiter = u8::try_from(cli.delimiter).context("delimiter must be a single-byte character")?;

    let mut stdout = io::stdout().lock();

    let transactions = match StatementBuilder::new()
        .filename(&cli.filepath)
        .delimiter(delimiter)
        .load()
    {
        Ok(transactions) => transactions,
        Err(StatementError::InvalidRows(errors)) => {
            report::write_errors(&mut stdout, &errors)?;
            stdout.flush()?;
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).with_context(|| format!("cannot load {}", cli.filepath)),
    };

    let options = AnalysisOptions::default()
        .with_sure_recurrent_descriptions(&cli.sure_recurrent_payments_descriptions)
        .with_card_last_digits(cli.card_last_digits.as_deref())
        .with_only_active(!cli.include_inactive);

    let payments = find_recurrent_payments(&transactions, &options, Local::now().date_naive());

    report::write_recurrent_payments(&mut stdout, &payments)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["recurrent-payments", "operations.csv"]).unwrap();
        assert_eq!(cli.filepath, "operations.csv");
        assert_eq!(cli.sure_recurrent_payments_descriptions, "");
        assert_eq!(cli.card_last_digits, None);
        assert!(!cli.include_inactive);
        assert_eq!(cli.delimiter, ';');
    }

    #[test]
    fn test_cli_accepts_underscore_aliases() {
        let cli = Cli::try_parse_from([
            "recurrent-payments",
            "operations.csv",
            "--sure_recurrent_payments_descriptions",
            "ЖКУ,Аренда",
            "--card_last_digits",
            "1234",
        ])
        .unwrap();

        assert_eq!(cli.sure_recurrent_payments_descriptions, "ЖКУ,Аренда");
        assert_eq!(cli.card_last_digits.as_deref(), Some("1234"));
    }

    #[test]
    fn test_cli_requires_filepath() {
        assert!(Cli::try_parse_from(["recurrent-payments"]).is_err());
    }
}

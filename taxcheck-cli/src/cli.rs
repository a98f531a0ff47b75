//! Command-line configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use taxcheck_core::TaxpayerCategory;

use crate::utils::{ParseAmountError, parse_positive_amount};

/// Checks income declarations against flat-rate tax expectations.
///
/// Without a subcommand an interactive menu is started.
#[derive(Debug, Parser)]
#[command(name = "taxcheck", version, about)]
pub struct Cli {
    /// Log filter (`error`, `warn`, `info`, `debug`, `trace` or a full
    /// directive). `RUST_LOG` takes precedence when set.
    #[arg(long, env = "TAXCHECK_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// CSV fixture table to use for self-tests instead of the built-in one.
    #[arg(long, global = true)]
    pub fixtures: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the interactive menu (the default).
    Interactive,
    /// Check a single declaration and print the verdict.
    Check(CheckArgs),
    /// Run the self-test fixtures and print the report.
    SelfTest,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Total declared income. A comma may be used as the decimal separator.
    #[arg(long, value_parser = parse_amount_arg)]
    pub income: Decimal,

    /// Tax paid.
    #[arg(long, value_parser = parse_amount_arg)]
    pub tax_paid: Decimal,

    /// Taxpayer category: 1/individual, 2/entrepreneur, 3/company.
    #[arg(long, value_parser = parse_category_arg)]
    pub category: TaxpayerCategory,

    /// The taxpayer is eligible for the benefit discount.
    #[arg(long)]
    pub benefits: bool,
}

fn parse_amount_arg(s: &str) -> Result<Decimal, ParseAmountError> {
    parse_positive_amount(s)
}

fn parse_category_arg(s: &str) -> Result<TaxpayerCategory, String> {
    TaxpayerCategory::parse(s).ok_or_else(|| {
        format!("unknown category '{s}', expected 1, 2, 3, individual, entrepreneur or company")
    })
}

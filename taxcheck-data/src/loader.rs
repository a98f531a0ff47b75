//! CSV loader for self-test fixture tables.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does not matter.
//!
//! | Column          | Type    | Notes                                                  |
//! |-----------------|---------|--------------------------------------------------------|
//! | `income`        | decimal | must be positive                                       |
//! | `tax_paid`      | decimal | must be positive                                       |
//! | `category`      | string  | `1`/`2`/`3` or `individual`/`entrepreneur`/`company`   |
//! | `has_benefits`  | flag    | `true`/`false`, `yes`/`no`, `y`/`n`, `1`/`0`           |
//! | `expected_pass` | flag    | as above                                               |
//! | `description`   | string  | free text, quote it if it contains commas              |
//!
//! ```csv
//! income,tax_paid,category,has_benefits,expected_pass,description
//! 100000,13130,1,false,true,Boundary case (+1% deviation)
//! ```

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use taxcheck_core::{TaxpayerCategory, TestCase, compute_expected_tax, round_to_cents};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a fixture table.
#[derive(Debug, Error)]
pub enum FixtureLoaderError {
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot read fixture file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `row` is 1-based, the header is row 0.
    #[error("unrecognised category '{value}' on row {row}")]
    InvalidCategory { value: String, row: usize },

    #[error("{field} must be positive on row {row}")]
    NonPositiveAmount { field: &'static str, row: usize },

    /// The income is positive but too small to owe a cent of tax, so no
    /// deviation can be measured against it.
    #[error("income {income} on row {row} rounds to zero expected tax")]
    ZeroExpectedTax { income: Decimal, row: usize },
}

/// A single row of a fixture CSV file, before validation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FixtureRecord {
    #[serde(deserialize_with = "deserialize_decimal")]
    pub income: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub tax_paid: Decimal,
    pub category: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub has_benefits: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub expected_pass: bool,
    pub description: String,
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Decimal::from_str(s.trim()).map_err(serde::de::Error::custom)
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a yes/no flag, got '{other}'"
        ))),
    }
}

/// Loader for fixture tables stored as CSV.
pub struct FixtureLoader;

impl FixtureLoader {
    /// Parse and validate fixtures from any reader. Rows keep file order.
    ///
    /// # Errors
    ///
    /// * [`FixtureLoaderError::Csv`] if a row is malformed.
    /// * [`FixtureLoaderError::InvalidCategory`] for an unknown category.
    /// * [`FixtureLoaderError::NonPositiveAmount`] for a zero or negative amount.
    /// * [`FixtureLoaderError::ZeroExpectedTax`] for an income too small to tax.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TestCase>, FixtureLoaderError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        reader
            .deserialize::<FixtureRecord>()
            .enumerate()
            .map(|(idx, result)| Self::convert(result?, idx + 1))
            .collect()
    }

    /// Read a fixture file from disk and delegate to [`FixtureLoader::parse`].
    pub fn load_file(path: &Path) -> Result<Vec<TestCase>, FixtureLoaderError> {
        let file = File::open(path).map_err(|source| FixtureLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let fixtures = Self::parse(file)?;
        debug!(path = %path.display(), count = fixtures.len(), "fixtures loaded");
        Ok(fixtures)
    }

    fn convert(
        record: FixtureRecord,
        row: usize,
    ) -> Result<TestCase, FixtureLoaderError> {
        let category = TaxpayerCategory::parse(&record.category).ok_or_else(|| {
            FixtureLoaderError::InvalidCategory {
                value: record.category.clone(),
                row,
            }
        })?;

        if record.income <= Decimal::ZERO {
            return Err(FixtureLoaderError::NonPositiveAmount {
                field: "income",
                row,
            });
        }
        if record.tax_paid <= Decimal::ZERO {
            return Err(FixtureLoaderError::NonPositiveAmount {
                field: "tax_paid",
                row,
            });
        }

        let expected_tax = round_to_cents(compute_expected_tax(
            record.income,
            category,
            record.has_benefits,
        ));
        if expected_tax <= Decimal::ZERO {
            return Err(FixtureLoaderError::ZeroExpectedTax {
                income: record.income,
                row,
            });
        }

        Ok(TestCase {
            income: record.income,
            tax_paid: record.tax_paid,
            category,
            has_benefits: record.has_benefits,
            description: Cow::Owned(record.description),
            expected_pass: record.expected_pass,
        })
    }
}

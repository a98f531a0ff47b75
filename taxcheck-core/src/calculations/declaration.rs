//! Flat-rate tax expectation and deviation verdict.
//!
//! A declaration is checked in four steps:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Effective rate: category flat rate, × 0.90 when benefits apply |
//! | 2    | Expected tax: income × effective rate, rounded to cents |
//! | 3    | Deviation: (paid − expected) / expected × 100 |
//! | 4    | Verdict: passed when \|deviation\| ≤ 1.0, otherwise under- or overpaid by sign |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxcheck_core::calculations::compute_verdict;
//! use taxcheck_core::{DeclarationInput, TaxpayerCategory, VerdictCategory};
//!
//! let input = DeclarationInput {
//!     income: dec!(1000000),
//!     tax_paid: dec!(100000),
//!     category: TaxpayerCategory::Company,
//!     has_benefits: false,
//! };
//!
//! let verdict = compute_verdict(&input).unwrap();
//!
//! assert_eq!(verdict.expected_tax, dec!(200000.00));
//! assert_eq!(verdict.deviation_percent, dec!(-50));
//! assert_eq!(verdict.outcome, VerdictCategory::Underpaid);
//! assert_eq!(verdict.discrepancy, dec!(100000.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::round_to_cents;
use crate::{DeclarationInput, EngineError, TaxpayerCategory, Verdict, VerdictCategory};

/// Multiplier applied to the flat rate when the taxpayer has benefits.
pub const BENEFIT_DISCOUNT: Decimal = Decimal::from_parts(90, 0, 0, false, 2);

/// Tolerance band, in percentage points, on either side of the expected tax.
pub const ALLOWED_DEVIATION: Decimal = Decimal::from_parts(10, 0, 0, false, 1);

/// Signed deviation of a payment from the expected tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deviation {
    /// Percentage relative to the expected tax. Negative means underpayment.
    pub percent: Decimal,

    /// True when `percent` is within [`ALLOWED_DEVIATION`], inclusive.
    pub passed: bool,
}

/// Computes the unrounded tax expected for `income`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxcheck_core::TaxpayerCategory;
/// use taxcheck_core::calculations::compute_expected_tax;
///
/// let tax = compute_expected_tax(dec!(1000000), TaxpayerCategory::Individual, true);
///
/// assert_eq!(tax, dec!(117000));
/// ```
pub fn compute_expected_tax(
    income: Decimal,
    category: TaxpayerCategory,
    has_benefits: bool,
) -> Decimal {
    income * effective_rate(category, has_benefits)
}

fn effective_rate(
    category: TaxpayerCategory,
    has_benefits: bool,
) -> Decimal {
    let rate = category.base_rate();
    if has_benefits {
        rate * BENEFIT_DISCOUNT
    } else {
        rate
    }
}

/// Measures how far `tax_paid` is from `expected_tax`.
///
/// # Errors
///
/// * [`EngineError::NonPositiveExpectedTax`] if `expected_tax` is zero or
///   negative.
/// * [`EngineError::DeviationOverflow`] if the percentage exceeds the
///   `Decimal` range.
pub fn evaluate_deviation(
    expected_tax: Decimal,
    tax_paid: Decimal,
) -> Result<Deviation, EngineError> {
    if expected_tax <= Decimal::ZERO {
        return Err(EngineError::NonPositiveExpectedTax(expected_tax));
    }

    let percent = tax_paid
        .checked_sub(expected_tax)
        .and_then(|difference| difference.checked_div(expected_tax))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(EngineError::DeviationOverflow {
            expected_tax,
            tax_paid,
        })?;
    let passed = percent.abs() <= ALLOWED_DEVIATION;

    Ok(Deviation { percent, passed })
}

/// Maps a deviation to its verdict category.
///
/// A failed check with a deviation of exactly zero is reported as overpaid;
/// that combination cannot come out of [`evaluate_deviation`].
pub fn classify(
    deviation_percent: Decimal,
    passed: bool,
) -> VerdictCategory {
    if passed {
        VerdictCategory::Passed
    } else if deviation_percent < Decimal::ZERO {
        VerdictCategory::Underpaid
    } else {
        VerdictCategory::Overpaid
    }
}

/// Checks a full declaration.
///
/// # Errors
///
/// Propagates the errors of [`evaluate_deviation`]. Neither occurs for
/// ordinary declarations with positive amounts.
pub fn compute_verdict(input: &DeclarationInput) -> Result<Verdict, EngineError> {
    let expected_tax = round_to_cents(compute_expected_tax(
        input.income,
        input.category,
        input.has_benefits,
    ));
    let deviation = evaluate_deviation(expected_tax, input.tax_paid)?;
    let outcome = classify(deviation.percent, deviation.passed);

    let discrepancy = match outcome {
        VerdictCategory::Passed => Decimal::ZERO,
        VerdictCategory::Underpaid => expected_tax - input.tax_paid,
        VerdictCategory::Overpaid => input.tax_paid - expected_tax,
    };

    debug!(
        category = ?input.category,
        has_benefits = input.has_benefits,
        %expected_tax,
        deviation = %deviation.percent,
        verdict = ?outcome,
        "declaration checked"
    );

    Ok(Verdict {
        expected_tax,
        deviation_percent: deviation.percent,
        passed: deviation.passed,
        outcome,
        discrepancy,
    })
}

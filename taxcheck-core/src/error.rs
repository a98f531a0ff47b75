use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the declaration engine.
///
/// `NonPositiveAmount` and `NonPositiveExpectedTax` only surface when a
/// caller bypasses input validation. `DeviationOverflow` can follow from
/// valid but extreme amounts, such as a payment many orders of magnitude
/// above the expected tax.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Deviation is relative to the expected tax, which must be above zero.
    #[error("expected tax must be positive to compute a deviation, got {0}")]
    NonPositiveExpectedTax(Decimal),

    /// The payment is so far from the expected tax that the percentage does
    /// not fit in a `Decimal`.
    #[error("deviation of {tax_paid} from expected tax {expected_tax} is out of range")]
    DeviationOverflow {
        expected_tax: Decimal,
        tax_paid: Decimal,
    },

    /// A declared amount was zero or negative.
    #[error("{field} must be positive, got {value}")]
    NonPositiveAmount { field: &'static str, value: Decimal },
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome class of a declaration check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictCategory {
    Passed,
    Underpaid,
    Overpaid,
}

/// Result of checking one declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Expected tax, rounded to cents.
    pub expected_tax: Decimal,

    /// Signed deviation of the paid tax from the expected tax, in percent.
    /// Negative means underpayment.
    pub deviation_percent: Decimal,

    /// True when the deviation is within the allowed band.
    pub passed: bool,

    /// Verdict class, derived from `passed` and the deviation sign.
    pub outcome: VerdictCategory,

    /// Shortfall when underpaid, excess when overpaid, zero when passed.
    /// Never negative.
    pub discrepancy: Decimal,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::EngineError;
use crate::models::TaxpayerCategory;

/// A single income declaration to check.
///
/// The console collects these from the user; both amounts are expected to be
/// strictly positive. Use [`DeclarationInput::new`] when the amounts have not
/// been validated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationInput {
    /// Total declared income.
    pub income: Decimal,

    /// Tax the taxpayer reports having paid.
    pub tax_paid: Decimal,

    pub category: TaxpayerCategory,

    /// Whether the taxpayer declared eligibility for the benefit discount.
    pub has_benefits: bool,
}

impl DeclarationInput {
    /// Builds a declaration, rejecting zero or negative amounts.
    pub fn new(
        income: Decimal,
        tax_paid: Decimal,
        category: TaxpayerCategory,
        has_benefits: bool,
    ) -> Result<Self, EngineError> {
        if income <= Decimal::ZERO {
            return Err(EngineError::NonPositiveAmount {
                field: "income",
                value: income,
            });
        }
        if tax_paid <= Decimal::ZERO {
            return Err(EngineError::NonPositiveAmount {
                field: "tax_paid",
                value: tax_paid,
            });
        }

        Ok(Self {
            income,
            tax_paid,
            category,
            has_benefits,
        })
    }
}

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DeclarationInput, TaxpayerCategory};

/// One row of the self-test fixture table.
///
/// `expected_pass` is the recorded outcome the engine is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub income: Decimal,
    pub tax_paid: Decimal,
    pub category: TaxpayerCategory,
    pub has_benefits: bool,
    pub description: Cow<'static, str>,
    pub expected_pass: bool,
}

impl TestCase {
    /// The declaration this fixture describes.
    pub fn declaration(&self) -> DeclarationInput {
        DeclarationInput {
            income: self.income,
            tax_paid: self.tax_paid,
            category: self.category,
            has_benefits: self.has_benefits,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn declaration_drops_fixture_metadata() {
        let case = TestCase {
            income: dec!(1000000),
            tax_paid: dec!(108000),
            category: TaxpayerCategory::Entrepreneur,
            has_benefits: true,
            description: Cow::Borrowed("entrepreneur with benefits"),
            expected_pass: true,
        };

        assert_eq!(
            case.declaration(),
            DeclarationInput {
                income: dec!(1000000),
                tax_paid: dec!(108000),
                category: TaxpayerCategory::Entrepreneur,
                has_benefits: true,
            }
        );
    }
}

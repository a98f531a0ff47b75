use std::borrow::Cow;

use rust_decimal::Decimal;

use crate::{TaxpayerCategory, TestCase};

const fn amount(units: u32) -> Decimal {
    Decimal::from_parts(units, 0, 0, false, 0)
}

const fn fixture(
    income: u32,
    tax_paid: u32,
    category: TaxpayerCategory,
    has_benefits: bool,
    description: &'static str,
    expected_pass: bool,
) -> TestCase {
    TestCase {
        income: amount(income),
        tax_paid: amount(tax_paid),
        category,
        has_benefits,
        description: Cow::Borrowed(description),
        expected_pass,
    }
}

/// Built-in fixture table used by [`run_self_tests`](super::run_self_tests).
pub static DEFAULT_FIXTURES: &[TestCase] = &[
    fixture(
        500_000,
        65_000,
        TaxpayerCategory::Individual,
        false,
        "Individual without benefits, correct payment",
        true,
    ),
    fixture(
        1_000_000,
        117_000,
        TaxpayerCategory::Individual,
        true,
        "Individual with benefits, correct payment",
        true,
    ),
    fixture(
        500_000,
        27_000,
        TaxpayerCategory::Entrepreneur,
        false,
        "Entrepreneur without benefits, correct payment",
        true,
    ),
    fixture(
        1_000_000,
        108_000,
        TaxpayerCategory::Entrepreneur,
        true,
        "Entrepreneur with benefits, correct payment",
        true,
    ),
    fixture(
        2_000_000,
        400_000,
        TaxpayerCategory::Company,
        false,
        "Company without benefits, correct payment",
        true,
    ),
    fixture(
        1_000_000,
        180_000,
        TaxpayerCategory::Company,
        true,
        "Company with benefits, correct payment",
        true,
    ),
    fixture(
        1_000_000,
        100_000,
        TaxpayerCategory::Company,
        false,
        "Company, underpayment",
        false,
    ),
    fixture(
        500_000,
        70_000,
        TaxpayerCategory::Individual,
        false,
        "Individual, overpayment",
        false,
    ),
    fixture(
        100_000,
        13_130,
        TaxpayerCategory::Individual,
        false,
        "Boundary case (+1% deviation)",
        true,
    ),
    fixture(
        100_000,
        12_870,
        TaxpayerCategory::Individual,
        false,
        "Boundary case (-1% deviation)",
        true,
    ),
];

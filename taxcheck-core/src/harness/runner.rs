use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::compute_verdict;
use crate::harness::DEFAULT_FIXTURES;
use crate::{EngineError, TestCase};

/// Result of running one fixture through the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub case: TestCase,
    pub expected_tax: Decimal,
    pub deviation_percent: Decimal,

    /// Whether the engine passed the declaration.
    pub actual_pass: bool,

    /// Whether `actual_pass` agrees with the fixture's recorded outcome.
    pub test_passed: bool,
}

/// Per-fixture outcomes in table order plus the aggregate tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestReport {
    pub outcomes: Vec<TestOutcome>,
    pub total: usize,
    pub passed_count: usize,
    pub failed_count: usize,

    /// Share of agreeing fixtures, in percent. Zero for an empty table.
    pub success_rate: Decimal,
}

impl TestReport {
    pub fn all_passed(&self) -> bool {
        self.failed_count == 0
    }
}

/// Runs every fixture in order and tallies agreement with the recorded outcomes.
///
/// This is a regression check: a fixture passes when the engine reproduces the
/// outcome written in the table, whatever that outcome is.
///
/// # Errors
///
/// Stops at the first fixture the engine cannot evaluate and returns its
/// [`EngineError`], e.g. an income whose expected tax rounds to zero.
pub fn run_all(fixtures: &[TestCase]) -> Result<TestReport, EngineError> {
    let mut outcomes = Vec::with_capacity(fixtures.len());

    for (index, case) in fixtures.iter().enumerate() {
        let verdict = compute_verdict(&case.declaration())?;
        let test_passed = verdict.passed == case.expected_pass;

        if test_passed {
            debug!(test = index + 1, description = %case.description, "fixture agrees");
        } else {
            warn!(
                test = index + 1,
                description = %case.description,
                expected_pass = case.expected_pass,
                actual_pass = verdict.passed,
                "fixture disagrees with engine"
            );
        }

        outcomes.push(TestOutcome {
            case: case.clone(),
            expected_tax: verdict.expected_tax,
            deviation_percent: verdict.deviation_percent,
            actual_pass: verdict.passed,
            test_passed,
        });
    }

    let total = outcomes.len();
    let passed_count = outcomes.iter().filter(|o| o.test_passed).count();
    let success_rate = if total == 0 {
        Decimal::ZERO
    } else {
        Decimal::from(passed_count) * Decimal::ONE_HUNDRED / Decimal::from(total)
    };

    Ok(TestReport {
        outcomes,
        total,
        passed_count,
        failed_count: total - passed_count,
        success_rate,
    })
}

/// Runs the built-in fixture table.
pub fn run_self_tests() -> Result<TestReport, EngineError> {
    run_all(DEFAULT_FIXTURES)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::TaxpayerCategory;
    use crate::calculations::round_to_cents;

    fn case(
        income: Decimal,
        tax_paid: Decimal,
        expected_pass: bool,
    ) -> TestCase {
        TestCase {
            income,
            tax_paid,
            category: TaxpayerCategory::Individual,
            has_benefits: false,
            description: Cow::Borrowed("custom"),
            expected_pass,
        }
    }

    #[test]
    fn default_table_has_ten_fixtures() {
        assert_eq!(DEFAULT_FIXTURES.len(), 10);
    }

    #[test]
    fn self_tests_keep_table_order() {
        let report = run_self_tests().unwrap();

        let descriptions: Vec<&str> = report
            .outcomes
            .iter()
            .map(|o| &*o.case.description)
            .collect();
        let expected: Vec<&str> = DEFAULT_FIXTURES
            .iter()
            .map(|c| &*c.description)
            .collect();

        assert_eq!(descriptions, expected);
    }

    #[test]
    fn self_tests_tally() {
        let report = run_self_tests().unwrap();

        // The entrepreneur rows record a pass the flat 6% rate does not produce.
        assert_eq!(report.total, 10);
        assert_eq!(report.passed_count, 8);
        assert_eq!(report.failed_count, 2);
        assert_eq!(report.success_rate, dec!(80));
        assert!(!report.all_passed());
    }

    #[test]
    fn self_tests_flag_entrepreneur_rows() {
        let report = run_self_tests().unwrap();

        let failing: Vec<usize> = report
            .outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| !o.test_passed)
            .map(|(i, _)| i + 1)
            .collect();

        assert_eq!(failing, vec![3, 4]);

        let third = &report.outcomes[2];
        assert_eq!(third.expected_tax, dec!(30000.00));
        assert_eq!(third.deviation_percent, dec!(-10));
        assert!(!third.actual_pass);

        let fourth = &report.outcomes[3];
        assert_eq!(fourth.expected_tax, dec!(54000.00));
        assert_eq!(fourth.deviation_percent, dec!(100));
        assert!(!fourth.actual_pass);
    }

    #[test]
    fn self_tests_boundary_rows_pass() {
        let report = run_self_tests().unwrap();

        assert_eq!(report.outcomes[8].deviation_percent, dec!(1));
        assert!(report.outcomes[8].actual_pass);
        assert_eq!(report.outcomes[9].deviation_percent, dec!(-1));
        assert!(report.outcomes[9].actual_pass);
    }

    #[test]
    fn self_tests_failure_rows_agree() {
        let report = run_self_tests().unwrap();

        assert!(!report.outcomes[6].actual_pass);
        assert!(report.outcomes[6].test_passed);
        assert!(!report.outcomes[7].actual_pass);
        assert!(report.outcomes[7].test_passed);
    }

    #[test]
    fn self_tests_are_repeatable() {
        assert_eq!(run_self_tests().unwrap(), run_self_tests().unwrap());
    }

    #[test]
    fn run_all_counts_disagreement() {
        let fixtures = vec![
            case(dec!(100000), dec!(13000), true),
            case(dec!(100000), dec!(13000), false),
            case(dec!(100000), dec!(20000), false),
        ];

        let report = run_all(&fixtures).unwrap();

        assert_eq!(report.passed_count, 2);
        assert_eq!(report.failed_count, 1);
        assert_eq!(round_to_cents(report.success_rate), dec!(66.67));
    }

    #[test]
    fn run_all_empty_table() {
        let report = run_all(&[]).unwrap();

        assert_eq!(report.total, 0);
        assert_eq!(report.success_rate, dec!(0));
        assert!(report.all_passed());
    }

    #[test]
    fn run_all_propagates_precondition_failure() {
        let fixtures = vec![case(dec!(0), dec!(1), true)];

        let result = run_all(&fixtures);

        assert_eq!(result, Err(EngineError::NonPositiveExpectedTax(dec!(0))));
    }

    #[test]
    fn run_all_agrees_with_single_checks() {
        let report = run_self_tests().unwrap();

        for (fixture, outcome) in DEFAULT_FIXTURES.iter().zip(&report.outcomes) {
            let verdict = compute_verdict(&fixture.declaration()).unwrap();

            assert_eq!(outcome.expected_tax, verdict.expected_tax);
            assert_eq!(outcome.deviation_percent, verdict.deviation_percent);
            assert_eq!(outcome.actual_pass, verdict.passed);
        }
    }

    #[test]
    fn run_all_propagates_out_of_range_deviation() {
        let fixtures = vec![case(dec!(1), dec!(500000000000000000000000000), false)];

        let result = run_all(&fixtures);

        assert!(matches!(result, Err(EngineError::DeviationOverflow { .. })));
    }
}

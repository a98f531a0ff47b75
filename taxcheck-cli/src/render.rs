//! Text rendering of verdicts and self-test reports.

use std::io::{self, Write};

use rust_decimal::{Decimal, RoundingStrategy};
use taxcheck_core::{DeclarationInput, TestReport, Verdict, VerdictCategory};

/// Formats `value` with exactly `dp` decimal places, ties away from zero.
pub fn fixed(
    value: Decimal,
    dp: u32,
) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}

fn pass_label(passed: bool) -> &'static str {
    if passed { "PASSED" } else { "FAILED" }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn render_verdict<W: Write>(
    out: &mut W,
    input: &DeclarationInput,
    verdict: &Verdict,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- CHECK RESULTS ---")?;
    writeln!(out, "Entered data:")?;
    writeln!(out, "  Income: {}", fixed(input.income, 2))?;
    writeln!(out, "  Tax paid: {}", fixed(input.tax_paid, 2))?;
    writeln!(out, "  Category: {}", input.category)?;
    writeln!(out, "  Benefits: {}", yes_no(input.has_benefits))?;
    writeln!(out)?;
    writeln!(out, "Calculated values:")?;
    writeln!(out, "  Expected tax: {}", fixed(verdict.expected_tax, 2))?;
    writeln!(out, "  Deviation: {}%", fixed(verdict.deviation_percent, 2))?;
    writeln!(out)?;
    writeln!(out, "Check status: {}", pass_label(verdict.passed))?;

    match verdict.outcome {
        VerdictCategory::Passed => {
            writeln!(
                out,
                "Tax paid matches the expected amount within the allowed deviation."
            )?;
        }
        VerdictCategory::Underpaid => {
            writeln!(out, "Violation found: tax UNDERPAID.")?;
            writeln!(out, "Shortfall: {}", fixed(verdict.discrepancy, 2))?;
        }
        VerdictCategory::Overpaid => {
            writeln!(out, "Violation found: tax OVERPAID.")?;
            writeln!(out, "Excess paid: {}", fixed(verdict.discrepancy, 2))?;
        }
    }

    writeln!(out, "=================================")?;
    writeln!(out)
}

pub fn render_report<W: Write>(
    out: &mut W,
    report: &TestReport,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== SELF-TEST ===")?;

    for (index, outcome) in report.outcomes.iter().enumerate() {
        let case = &outcome.case;
        writeln!(out)?;
        writeln!(out, "Test {}: {}", index + 1, case.description)?;
        writeln!(
            out,
            "  Input: income={}, tax={}, cat.{}, benefits={}",
            fixed(case.income, 2),
            fixed(case.tax_paid, 2),
            case.category.code(),
            yes_no(case.has_benefits)
        )?;
        writeln!(out, "  Expected tax: {}", fixed(outcome.expected_tax, 2))?;
        writeln!(out, "  Deviation: {}%", fixed(outcome.deviation_percent, 2))?;
        writeln!(out, "  Expected result: {}", pass_label(case.expected_pass))?;
        writeln!(out, "  Actual result: {}", pass_label(outcome.actual_pass))?;
        writeln!(
            out,
            "  Test status: {}",
            if outcome.test_passed { "[OK]" } else { "[FAIL]" }
        )?;
    }

    writeln!(out)?;
    writeln!(out, "=== SUMMARY ===")?;
    writeln!(out, "Total tests: {}", report.total)?;
    writeln!(out, "Passed: {}", report.passed_count)?;
    writeln!(out, "Failed: {}", report.failed_count)?;
    writeln!(out, "Success rate: {}%", fixed(report.success_rate, 1))?;
    writeln!(out)
}

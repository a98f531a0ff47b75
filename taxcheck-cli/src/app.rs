//! Interactive menu and the actions behind it.

use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use taxcheck_core::{
    DEFAULT_FIXTURES, DeclarationInput, TestCase, TestReport, Verdict, compute_verdict, run_all,
};
use taxcheck_data::FixtureLoader;
use tracing::{debug, info, warn};

use crate::console::Console;
use crate::render::{render_report, render_verdict};

const GREETING: &str = "\
Welcome to the income declaration checker!
The program checks that the tax paid matches the calculated amount.
Use a dot (.) or a comma (,) as the decimal separator.
";

const MENU: &str = "
================================
  INCOME DECLARATION CHECK
================================
1. Check a declaration
2. Run self-tests
3. Exit
================================
";

/// Menu entries of the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckDeclaration,
    RunTests,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::CheckDeclaration),
            2 => Some(Self::RunTests),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Result of a non-interactive command, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure,
}

impl CommandStatus {
    /// A failed verdict is a failed `check`.
    pub fn for_verdict(verdict: &Verdict) -> Self {
        if verdict.passed { Self::Success } else { Self::Failure }
    }

    /// Any fixture disagreeing with the engine fails `self-test`.
    pub fn for_report(report: &TestReport) -> Self {
        if report.all_passed() { Self::Success } else { Self::Failure }
    }
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Success => ExitCode::SUCCESS,
            CommandStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Returns the fixture table to use: the file at `path` if given, the
/// built-in table otherwise.
pub fn load_fixtures(path: Option<&Path>) -> Result<Cow<'static, [TestCase]>> {
    match path {
        Some(path) => {
            let fixtures = FixtureLoader::load_file(path)
                .with_context(|| format!("Failed to load fixtures from: {}", path.display()))?;
            info!(path = %path.display(), count = fixtures.len(), "using fixture file");
            Ok(Cow::Owned(fixtures))
        }
        None => Ok(Cow::Borrowed(DEFAULT_FIXTURES)),
    }
}

/// Runs the interactive menu until the user exits or the input ends.
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    fixtures: &[TestCase],
) -> Result<()> {
    write!(console.output(), "{GREETING}")?;

    loop {
        write!(console.output(), "{MENU}")?;
        let Some(line) = console.prompt("Choose a menu item (1-3): ")? else {
            debug!("input closed, leaving menu");
            writeln!(console.output())?;
            return Ok(());
        };

        let Ok(number) = line.trim().parse::<i64>() else {
            writeln!(console.output(), "\nError: enter a number from 1 to 3.\n")?;
            continue;
        };

        match MenuChoice::from_number(number) {
            Some(MenuChoice::CheckDeclaration) => {
                if !run_declaration_check(console)? {
                    return Ok(());
                }
            }
            Some(MenuChoice::RunTests) => {
                run_tests(console.output(), fixtures)?;
            }
            Some(MenuChoice::Exit) => {
                writeln!(console.output(), "\nExiting. Goodbye!")?;
                return Ok(());
            }
            None => {
                writeln!(console.output(), "\nError: invalid choice. Enter 1, 2 or 3.\n")?;
            }
        }
    }
}

/// Prompts for one declaration and prints its verdict.
///
/// Returns `false` if the input ended before the declaration was complete.
pub fn run_declaration_check<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<bool> {
    writeln!(console.output(), "\n=== INCOME DECLARATION CHECK ===")?;

    let Some(input) = console.prompt_declaration()? else {
        return Ok(false);
    };

    match check(&input) {
        Ok(verdict) => render_verdict(console.output(), &input, &verdict)?,
        Err(err) => {
            warn!(error = %format_args!("{err:#}"), "declaration could not be checked");
            writeln!(console.output(), "\nError: {err:#}\n")?;
        }
    }
    Ok(true)
}

/// Computes the verdict for an already validated declaration.
pub fn check(input: &DeclarationInput) -> Result<Verdict> {
    let verdict = compute_verdict(input).context("Failed to compute verdict")?;
    if verdict.passed {
        info!(category = ?input.category, "declaration passed");
    } else {
        warn!(
            category = ?input.category,
            verdict = ?verdict.outcome,
            deviation = %verdict.deviation_percent,
            "declaration failed"
        );
    }
    Ok(verdict)
}

/// `check` subcommand: prints the verdict for `input`.
pub fn run_check<W: Write>(
    out: &mut W,
    input: &DeclarationInput,
) -> Result<CommandStatus> {
    let verdict = check(input)?;
    render_verdict(out, input, &verdict)?;
    out.flush()?;
    Ok(CommandStatus::for_verdict(&verdict))
}

/// `self-test` subcommand: prints the report for `fixtures`.
pub fn run_self_test<W: Write>(
    out: &mut W,
    fixtures: &[TestCase],
) -> Result<CommandStatus> {
    let report = run_tests(out, fixtures)?;
    out.flush()?;
    Ok(CommandStatus::for_report(&report))
}

/// Runs the harness over `fixtures` and prints the report.
pub fn run_tests<W: Write>(
    out: &mut W,
    fixtures: &[TestCase],
) -> Result<TestReport> {
    let report = run_all(fixtures).context("Failed to run self-tests")?;
    info!(
        total = report.total,
        passed = report.passed_count,
        failed = report.failed_count,
        "self-tests finished"
    );
    render_report(out, &report)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use taxcheck_core::TaxpayerCategory;

    use super::*;

    #[test]
    fn menu_choice_maps_numbers() {
        assert_eq!(MenuChoice::from_number(1), Some(MenuChoice::CheckDeclaration));
        assert_eq!(MenuChoice::from_number(2), Some(MenuChoice::RunTests));
        assert_eq!(MenuChoice::from_number(3), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(-3), None);
    }

    fn declaration(
        income: Decimal,
        tax_paid: Decimal,
    ) -> DeclarationInput {
        DeclarationInput::new(income, tax_paid, TaxpayerCategory::Individual, false).unwrap()
    }

    fn fixture(
        tax_paid: Decimal,
        expected_pass: bool,
    ) -> TestCase {
        TestCase {
            income: dec!(100000),
            tax_paid,
            category: TaxpayerCategory::Individual,
            has_benefits: false,
            description: Cow::Borrowed("individual"),
            expected_pass,
        }
    }

    #[test]
    fn run_check_succeeds_for_passed_verdict() {
        let mut out = Vec::new();

        let status = run_check(&mut out, &declaration(dec!(500000), dec!(65000))).unwrap();

        assert_eq!(status, CommandStatus::Success);
        assert!(String::from_utf8(out).unwrap().contains("Check status: PASSED"));
    }

    #[test]
    fn run_check_fails_for_failed_verdict() {
        let mut out = Vec::new();

        let status = run_check(&mut out, &declaration(dec!(500000), dec!(70000))).unwrap();

        assert_eq!(status, CommandStatus::Failure);
        assert!(String::from_utf8(out).unwrap().contains("tax OVERPAID"));
    }

    #[test]
    fn run_check_reports_out_of_range_payment() {
        let mut out = Vec::new();

        let err = run_check(
            &mut out,
            &declaration(dec!(1), dec!(500000000000000000000000000)),
        )
        .unwrap_err();

        assert!(err.to_string().contains("Failed to compute verdict"));
        assert!(out.is_empty());
    }

    #[test]
    fn run_self_test_succeeds_when_all_fixtures_agree() {
        let fixtures = vec![fixture(dec!(13000), true), fixture(dec!(20000), false)];
        let mut out = Vec::new();

        let status = run_self_test(&mut out, &fixtures).unwrap();

        assert_eq!(status, CommandStatus::Success);
        assert!(String::from_utf8(out).unwrap().contains("Success rate: 100.0%"));
    }

    #[test]
    fn run_self_test_fails_on_disagreement() {
        let mut out = Vec::new();

        let status = run_self_test(&mut out, DEFAULT_FIXTURES).unwrap();

        assert_eq!(status, CommandStatus::Failure);
        assert!(String::from_utf8(out).unwrap().contains("Success rate: 80.0%"));
    }

    #[test]
    fn load_fixtures_defaults_to_builtin_table() {
        let fixtures = load_fixtures(None).unwrap();

        assert!(matches!(fixtures, Cow::Borrowed(_)));
        assert_eq!(fixtures.len(), DEFAULT_FIXTURES.len());
    }

    #[test]
    fn load_fixtures_reports_missing_file() {
        let err = load_fixtures(Some(Path::new("no/such/fixtures.csv"))).unwrap_err();

        assert!(err.to_string().contains("Failed to load fixtures"));
    }
}

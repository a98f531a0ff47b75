//! Self-test harness.
//!
//! Runs the declaration engine over a fixture table and reports, per row,
//! whether the live outcome agrees with the outcome recorded in the table.

mod fixtures;
mod runner;

pub use fixtures::DEFAULT_FIXTURES;
pub use runner::{TestOutcome, TestReport, run_all, run_self_tests};

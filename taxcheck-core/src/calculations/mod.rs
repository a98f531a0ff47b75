//! Declaration check calculations.
//!
//! This module provides the flat-rate tax expectation and the deviation
//! verdict used both by the interactive check and by the self-test harness.

pub mod common;
pub mod declaration;

pub use common::round_to_cents;
pub use declaration::{
    ALLOWED_DEVIATION, BENEFIT_DISCOUNT, Deviation, classify, compute_expected_tax,
    compute_verdict, evaluate_deviation,
};

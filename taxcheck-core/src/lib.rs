pub mod calculations;
pub mod error;
pub mod harness;
pub mod models;

pub use calculations::{
    ALLOWED_DEVIATION, BENEFIT_DISCOUNT, Deviation, classify, compute_expected_tax,
    compute_verdict, evaluate_deviation, round_to_cents,
};
pub use error::EngineError;
pub use harness::{DEFAULT_FIXTURES, TestOutcome, TestReport, run_all, run_self_tests};
pub use models::*;

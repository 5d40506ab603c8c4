pub mod evaluator;
pub mod executor;
pub mod reporter;
pub mod types;

pub use evaluator::evaluate;
pub use executor::SequenceRunner;
pub use reporter::TestReporter;
pub use types::{Outcome, RunSummary, SequenceReport, TestResult};

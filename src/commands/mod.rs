//! Command implementations

pub mod drill;
pub mod evaluate;
pub mod simple;
pub mod target;

pub use drill::run_drill;
pub use evaluate::{Evaluation, evaluate_words};
pub use simple::{PlaySummary, run_simple};
pub use target::TargetSource;

//! # fastlike-orchestration
//!
//! Parallel execution of matching strategies over a corpus, oracle
//! verification, and result comparison.

pub mod dispatcher;
pub mod interfaces;
pub mod oracle;
pub mod orchestrator;

pub use dispatcher::dispatch;
pub use interfaces::{MatchReport, ResultPresenter};
pub use oracle::oracle_counts;
pub use orchestrator::{analyze_comparison_results, compare_counts, run_strategies, run_strategy};

//! Orchestration interfaces.

use std::time::Duration;

use fastlike_core::Strategy;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the outcome of one strategy run.
    fn present_report(&self, report: &MatchReport);

    /// Present a side-by-side comparison of several runs.
    fn present_comparison(&self, reports: &[MatchReport]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Per-line counts produced by one strategy over a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    /// Strategy that produced the counts.
    pub strategy: Strategy,
    /// Match count per corpus line, in corpus order.
    pub counts: Vec<u32>,
    /// Wall time spent matching, excluding corpus loading.
    pub duration: Duration,
}

impl MatchReport {
    #[must_use]
    pub fn new(strategy: Strategy, counts: Vec<u32>, duration: Duration) -> Self {
        Self {
            strategy,
            counts,
            duration,
        }
    }

    /// Sum of all per-line counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Number of lines with at least one match.
    #[must_use]
    pub fn matching_lines(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

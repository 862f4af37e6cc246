//! CLI result presenter.

use fastlike_orchestration::interfaces::{MatchReport, ResultPresenter};

use crate::output::{format_duration, format_number};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Summary lines for one report.
    #[must_use]
    pub fn render_report(&self, report: &MatchReport) -> Vec<String> {
        if self.quiet {
            return vec![report.total().to_string()];
        }
        let mut lines = vec![
            format!("Strategy: {}", report.strategy),
            format!("Lines: {}", format_number(report.counts.len() as u64)),
            format!("Matches: {}", format_number(report.total())),
            format!("Duration: {}", format_duration(report.duration)),
        ];
        if self.verbose {
            lines.push(format!(
                "Matching lines: {}",
                format_number(report.matching_lines() as u64)
            ));
        }
        lines
    }

    /// Error line for stderr; shown even in quiet mode.
    #[must_use]
    pub fn render_error(&self, error: &str) -> String {
        format!("Error: {error}")
    }

    /// Comparison table rows, one per report.
    #[must_use]
    pub fn render_comparison(&self, reports: &[MatchReport]) -> Vec<String> {
        let Some(reference) = reports.first() else {
            return Vec::new();
        };
        let mut lines = vec![String::new(), "Comparison Results:".into(), format!("{:-<60}", "")];
        for report in reports {
            let status = if report.counts == reference.counts {
                "OK"
            } else {
                "MISMATCH"
            };
            lines.push(format!(
                "  {:<12} {:>12} {:>14} [{}]",
                report.strategy.name(),
                format_duration(report.duration),
                format_number(report.total()),
                status,
            ));
        }
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_report(&self, report: &MatchReport) {
        for line in self.render_report(report) {
            println!("{line}");
        }
    }

    fn present_comparison(&self, reports: &[MatchReport]) {
        if self.quiet {
            return;
        }
        for line in self.render_comparison(reports) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", self.render_error(error));
    }
}

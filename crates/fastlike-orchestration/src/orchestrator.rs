//! Core orchestration: strategy runs and result analysis.

use std::time::Instant;

use tracing::{debug, info};

use fastlike_core::{LikeError, Options, Pattern, PatternValues, Strategy, WindowedMatcher};

use crate::dispatcher::dispatch;
use crate::interfaces::MatchReport;
use crate::oracle::oracle_counts;

/// Count matches of `pattern` in every corpus line with one strategy.
///
/// The pattern transforms are built once and shared read-only by every
/// worker. With `opts.verify`, windowed counts are checked line by line
/// against the naive matcher.
pub fn run_strategy(
    corpus: &[String],
    pattern: &Pattern,
    strategy: Strategy,
    opts: &Options,
) -> Result<MatchReport, LikeError> {
    let opts = opts.clone().normalize();
    let start = Instant::now();

    let counts = match strategy.layout(pattern.len()) {
        None => oracle_counts(corpus, pattern, opts.threads)?,
        Some(layout) => {
            let owner = PatternValues::new(pattern, layout)?;
            let spectrum = owner.spectrum()?;
            debug!(
                strategy = %strategy,
                window = layout.window_len(),
                step = layout.step(),
                transform = spectrum.tables().len(),
                "pattern transforms ready"
            );
            let oracle = opts.verify.then_some(pattern);
            dispatch(corpus, &opts, oracle, || WindowedMatcher::new(&spectrum))?
        }
    };

    let report = MatchReport::new(strategy, counts, start.elapsed());
    info!(
        strategy = %strategy,
        lines = corpus.len(),
        total = report.total(),
        elapsed_ms = report.duration.as_millis() as u64,
        "run complete"
    );
    Ok(report)
}

/// Run each strategy in turn over the same corpus.
///
/// Runs are sequential so each one gets the whole worker pool and its
/// timing is not skewed by the others.
pub fn run_strategies(
    corpus: &[String],
    pattern: &Pattern,
    strategies: &[Strategy],
    opts: &Options,
) -> Result<Vec<MatchReport>, LikeError> {
    strategies
        .iter()
        .map(|&strategy| run_strategy(corpus, pattern, strategy, opts))
        .collect()
}

/// Compare two count vectors line by line.
pub fn compare_counts(expected: &[u32], actual: &[u32]) -> Result<(), LikeError> {
    if expected.len() != actual.len() {
        return Err(LikeError::Config(format!(
            "cannot compare {} counts with {}",
            expected.len(),
            actual.len()
        )));
    }
    match expected.iter().zip(actual).position(|(e, a)| e != a) {
        None => Ok(()),
        Some(line) => Err(LikeError::Mismatch {
            line,
            expected: expected[line],
            actual: actual[line],
        }),
    }
}

/// Analyze comparison results: every report must agree with the first.
pub fn analyze_comparison_results(reports: &[MatchReport]) -> Result<(), LikeError> {
    let Some((first, rest)) = reports.split_first() else {
        return Err(LikeError::Config("no results to compare".into()));
    };
    for report in rest {
        compare_counts(&first.counts, &report.counts).inspect_err(|err| {
            debug!(
                reference = %first.strategy,
                strategy = %report.strategy,
                %err,
                "strategies disagree"
            );
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn corpus(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| (*s).to_string()).collect()
    }

    fn opts(verify: bool) -> Options {
        Options {
            threads: 3,
            chunk_size: 2,
            verify,
        }
    }

    fn report(strategy: Strategy, counts: Vec<u32>) -> MatchReport {
        MatchReport::new(strategy, counts, Duration::from_millis(1))
    }

    #[test]
    fn every_strategy_counts_the_same() {
        let pattern = Pattern::new("a_c").unwrap();
        let lines = corpus(&["aXc abc aYc", "", "ac", "abcabc", "a c", "xyz"]);
        for strategy in Strategy::ALL {
            let report = run_strategy(&lines, &pattern, strategy, &opts(true)).unwrap();
            assert_eq!(report.strategy, strategy);
            assert_eq!(report.counts, vec![3, 0, 0, 2, 1, 0], "{strategy}");
            assert_eq!(report.total(), 6);
        }
    }

    #[test]
    fn run_strategies_keeps_order() {
        let pattern = Pattern::new("ab").unwrap();
        let lines = corpus(&["ababab", "b"]);
        let reports = run_strategies(&lines, &pattern, &Strategy::ALL, &opts(false)).unwrap();
        let names: Vec<Strategy> = reports.iter().map(|r| r.strategy).collect();
        assert_eq!(names, Strategy::ALL.to_vec());
        assert!(analyze_comparison_results(&reports).is_ok());
    }

    #[test]
    fn encoding_error_aborts_windowed_run() {
        let pattern = Pattern::new("ab").unwrap();
        let lines = corpus(&["ab", "a#b", "ab"]);
        let err = run_strategy(&lines, &pattern, Strategy::Faster, &opts(false)).unwrap_err();
        assert!(matches!(err, LikeError::Encoding { character: '#', .. }));
    }

    #[test]
    fn compare_counts_reports_first_difference() {
        assert!(compare_counts(&[1, 2, 3], &[1, 2, 3]).is_ok());
        assert_eq!(
            compare_counts(&[1, 2, 3, 4], &[1, 2, 0, 0]).unwrap_err(),
            LikeError::Mismatch {
                line: 2,
                expected: 3,
                actual: 0
            }
        );
        assert!(matches!(
            compare_counts(&[1], &[1, 2]),
            Err(LikeError::Config(_))
        ));
    }

    #[test]
    fn analyze_matching_results() {
        let reports = vec![
            report(Strategy::Naive, vec![1, 0, 2]),
            report(Strategy::Standard, vec![1, 0, 2]),
            report(Strategy::Faster, vec![1, 0, 2]),
        ];
        assert!(analyze_comparison_results(&reports).is_ok());
    }

    #[test]
    fn analyze_third_result_mismatches() {
        let reports = vec![
            report(Strategy::Naive, vec![1, 0, 2]),
            report(Strategy::Standard, vec![1, 0, 2]),
            report(Strategy::Faster, vec![1, 1, 2]),
        ];
        assert!(matches!(
            analyze_comparison_results(&reports),
            Err(LikeError::Mismatch { line: 1, .. })
        ));
    }

    #[test]
    fn analyze_empty_results() {
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(LikeError::Config(_))
        ));
    }

    #[test]
    fn analyze_single_result() {
        let reports = vec![report(Strategy::Faster, vec![4])];
        assert!(analyze_comparison_results(&reports).is_ok());
    }
}

//! Multi-chunk runs across every strategy.

use fastlike_core::{Options, Pattern, Strategy};
use fastlike_orchestration::{analyze_comparison_results, run_strategies, run_strategy};
use proptest::prelude::*;

const ALPHABET: &[u8] = b"abcdeXYZ .,-";

/// Deterministic corpus of `lines` lines with lengths in `0..max_len`.
fn corpus(lines: usize, max_len: usize, mut seed: u64) -> Vec<String> {
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };
    (0..lines)
        .map(|_| {
            let len = (next() % max_len as u64) as usize;
            (0..len)
                .map(|_| ALPHABET[(next() % ALPHABET.len() as u64) as usize] as char)
                .collect()
        })
        .collect()
}

#[test]
fn strategies_agree_over_many_chunks() {
    let lines = corpus(2_500, 120, 0x9e37_79b9_7f4a_7c15);
    let opts = Options {
        threads: 6,
        chunk_size: 97,
        verify: true,
    };
    for text in ["a", "ab", "a_c", "_b_", "X.Y", "a__________b", "____"] {
        let pattern = Pattern::new(text).unwrap();
        let reports = run_strategies(&lines, &pattern, &Strategy::ALL, &opts).unwrap();
        analyze_comparison_results(&reports).unwrap();
        assert_eq!(reports[0].counts.len(), lines.len());
    }
}

#[test]
fn all_wildcard_pattern_counts_every_offset() {
    let lines = corpus(300, 40, 7);
    let pattern = Pattern::new("___").unwrap();
    let report = run_strategy(&lines, &pattern, Strategy::Faster, &Options::default()).unwrap();
    for (line, &count) in lines.iter().zip(&report.counts) {
        assert_eq!(count as usize, line.len().saturating_sub(2), "{line:?}");
    }
}

#[test]
fn single_thread_matches_many_threads() {
    let lines = corpus(500, 60, 42);
    let pattern = Pattern::new("b_d").unwrap();
    let one = Options {
        threads: 1,
        chunk_size: 10_000,
        verify: false,
    };
    let many = Options {
        threads: 16,
        chunk_size: 1,
        verify: false,
    };
    let a = run_strategy(&lines, &pattern, Strategy::Standard, &one).unwrap();
    let b = run_strategy(&lines, &pattern, Strategy::Standard, &many).unwrap();
    assert_eq!(a.counts, b.counts);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn chunking_never_changes_results(
        seed in 1u64..u64::MAX,
        threads in 1usize..9,
        chunk_size in 1usize..50,
    ) {
        let lines = corpus(120, 30, seed);
        let pattern = Pattern::new("a_").unwrap();
        let opts = Options { threads, chunk_size, verify: true };
        let reference = run_strategy(&lines, &pattern, Strategy::Naive, &opts).unwrap();
        let faster = run_strategy(&lines, &pattern, Strategy::Faster, &opts).unwrap();
        prop_assert_eq!(reference.counts, faster.counts);
    }
}

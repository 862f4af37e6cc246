//! Reference counts computed with the naive matcher on a rayon pool.

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use fastlike_core::naive::count_matches;
use fastlike_core::{LikeError, Pattern};

/// Naive per-line counts for the whole corpus, using `threads` workers.
pub fn oracle_counts(
    corpus: &[String],
    pattern: &Pattern,
    threads: usize,
) -> Result<Vec<u32>, LikeError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| LikeError::Config(format!("cannot build thread pool: {e}")))?;
    Ok(pool.install(|| {
        corpus
            .par_iter()
            .map(|line| count_matches(pattern, line))
            .collect()
    }))
}

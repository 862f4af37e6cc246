//! Run options.

use crate::constants::{DEFAULT_CHUNK_SIZE, PARALLELISM_FACTOR};

/// Default worker count: twice the detected hardware concurrency.
#[must_use]
pub fn default_parallelism() -> usize {
    let cpus = std::thread::available_parallelism()
        .map(std::num::NonZero::get)
        .unwrap_or(4);
    cpus * PARALLELISM_FACTOR
}

/// Options for a matching run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Number of worker threads.
    pub threads: usize,
    /// Corpus lines per claimed chunk.
    pub chunk_size: usize,
    /// Check every fast-path count against the naive oracle.
    pub verify: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            threads: default_parallelism(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            verify: false,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.threads == 0 {
            self.threads = default_parallelism();
        }
        if self.chunk_size == 0 {
            self.chunk_size = DEFAULT_CHUNK_SIZE;
        }
        self
    }
}

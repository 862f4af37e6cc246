//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fastlike_core::{LikeError, Options, Strategy, DEFAULT_CHUNK_SIZE};

/// Count wildcard LIKE matches in every line of a text file.
///
/// `_` in PATTERN matches any single character.
#[derive(Parser, Debug)]
#[command(name = "fastlike", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Corpus file, one record per line.
    pub file: PathBuf,

    /// Pattern to search for; `_` is a single-character wildcard.
    pub pattern: String,

    /// Strategy to use: naive, standard, or faster.
    #[arg(short, long, default_value = "faster", env = "FASTLIKE_STRATEGY")]
    pub strategy: String,

    /// Worker threads (0 = twice the available cores).
    #[arg(short, long, default_value_t = 0, env = "FASTLIKE_THREADS")]
    pub threads: usize,

    /// Lines claimed by a worker at a time.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Verify every count against the naive matcher.
    #[arg(long)]
    pub check: bool,

    /// Run every strategy and cross-check their counts.
    #[arg(long)]
    pub compare: bool,

    /// Write one count per line to this file (`-` for stdout).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only print the total match count).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Selected strategy.
    pub fn strategy(&self) -> Result<Strategy, LikeError> {
        self.strategy.parse()
    }

    /// Strategies to run, in order.
    pub fn strategies(&self) -> Result<Vec<Strategy>, LikeError> {
        if self.compare {
            Ok(Strategy::ALL.to_vec())
        } else {
            Ok(vec![self.strategy()?])
        }
    }

    /// Run options, with zero values replaced by defaults.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            threads: self.threads,
            chunk_size: self.chunk_size,
            verify: self.check,
        }
        .normalize()
    }
}

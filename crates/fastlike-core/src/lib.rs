//! # fastlike-core
//!
//! Exact substring matching with single-character wildcards via FFT
//! convolutions. Provides the alphabet encoder, pattern descriptor, window
//! layouts, the naive comparison, and the windowed line matcher.

pub mod alphabet;
pub mod constants;
pub mod error;
pub mod matcher;
pub mod naive;
pub mod options;
pub mod pattern;
pub mod spectrum;
pub mod strategy;
pub mod window;
pub mod windowed;

// Re-exports
pub use constants::{exit_codes, DEFAULT_CHUNK_SIZE, WILDCARD};
pub use error::LikeError;
pub use matcher::LineMatcher;
pub use naive::count_matches;
pub use options::Options;
pub use pattern::Pattern;
pub use spectrum::{PatternSpectrum, PatternValues};
pub use strategy::Strategy;
pub use window::{Window, WindowKind, WindowLayout};
pub use windowed::WindowedMatcher;

/// Count matches of `pattern` in a single line with the given strategy.
///
/// Builds the pattern transforms on every call; batch callers should go
/// through the orchestration crate instead.
///
/// # Example
/// ```
/// use fastlike_core::{count_line, Strategy};
/// assert_eq!(count_line("a_c", "aXc abc aYc", Strategy::Faster).unwrap(), 3);
/// ```
pub fn count_line(pattern: &str, line: &str, strategy: Strategy) -> Result<u32, LikeError> {
    let pattern = Pattern::new(pattern)?;
    let Some(layout) = strategy.layout(pattern.len()) else {
        return Ok(count_matches(&pattern, line));
    };
    let owner = PatternValues::new(&pattern, layout)?;
    let spectrum = owner.spectrum()?;
    let mut matcher = WindowedMatcher::new(&spectrum);
    matcher.count(line)
}

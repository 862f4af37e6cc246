//! Per-line matcher interface.
//!
//! A matcher owns whatever scratch state it needs and is used by exactly
//! one worker thread; it is never shared.

use crate::error::LikeError;

/// Counts pattern occurrences in one corpus line at a time.
pub trait LineMatcher: Send {
    /// Number of offsets in `line` where the pattern matches.
    fn count(&mut self, line: &str) -> Result<u32, LikeError>;

    /// Strategy name, for logs and reports.
    fn name(&self) -> &'static str;
}

//! Error type for matching runs.

use fastlike_fft::TransformError;

/// Errors that abort a matching run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LikeError {
    /// A character outside the supported alphabet.
    #[error("unsupported character {character:?} at position {position}")]
    Encoding { character: char, position: usize },

    /// The pattern has no characters.
    #[error("pattern must contain at least one character")]
    EmptyPattern,

    /// A transform precondition was violated.
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    /// A fast-path count disagreed with the reference count.
    #[error("result mismatch on line {line}: expected {expected}, got {actual}")]
    Mismatch {
        line: usize,
        expected: u32,
        actual: u32,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

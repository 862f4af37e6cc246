//! Wildcard pattern descriptor.

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{encode_str, pow3};
use crate::error::LikeError;

/// A validated pattern with its codes and closed-form match value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
    codes: Vec<u32>,
    check: i64,
}

impl Pattern {
    /// Validate and encode a pattern.
    pub fn new(text: impl Into<String>) -> Result<Self, LikeError> {
        let text = text.into();
        if text.is_empty() {
            return Err(LikeError::EmptyPattern);
        }
        let codes = encode_str(&text)?;
        let check = codes.iter().map(|&c| pow3(i64::from(c))).sum();
        Ok(Self { text, codes, check })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Pattern length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false; empty patterns are rejected by [`Pattern::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[must_use]
    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    /// `Σ pow3(code)` over non-wildcard positions: the value a window's
    /// combined convolution reproduces exactly at a matching offset.
    #[must_use]
    pub fn check(&self) -> i64 {
        self.check
    }
}

impl FromStr for Pattern {
    type Err = LikeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

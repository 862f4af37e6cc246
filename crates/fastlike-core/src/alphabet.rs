//! Character encoding for the convolution identity.
//!
//! `a`-`z` map to 1-26, `A`-`Z` to 27-52 and the punctuation set to 53-60
//! in declared order. The wildcard maps to 0 so it contributes nothing to
//! any sum.

use crate::constants::{PUNCTUATION, WILDCARD};
use crate::error::LikeError;

/// Code for a single character, `Some(0)` for the wildcard, `None` when
/// the character is outside the alphabet.
#[inline]
#[must_use]
pub fn encode(c: char) -> Option<u32> {
    match c {
        'a'..='z' => Some(c as u32 - 'a' as u32 + 1),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 27),
        WILDCARD => Some(0),
        _ => PUNCTUATION
            .iter()
            .position(|&p| p == c)
            .map(|i| 53 + i as u32),
    }
}

/// Encode `text` into `out`, replacing its previous contents.
pub fn encode_into(text: &str, out: &mut Vec<u32>) -> Result<(), LikeError> {
    out.clear();
    out.reserve(text.len());
    for (position, character) in text.chars().enumerate() {
        let code = encode(character).ok_or(LikeError::Encoding {
            character,
            position,
        })?;
        out.push(code);
    }
    Ok(())
}

/// Encode `text` into a fresh vector.
pub fn encode_str(text: &str) -> Result<Vec<u32>, LikeError> {
    let mut out = Vec::new();
    encode_into(text, &mut out)?;
    Ok(out)
}

#[inline]
#[must_use]
pub fn pow3(x: i64) -> i64 {
    x * x * x
}

//! Reference matcher: direct per-offset comparison.
//!
//! Used as the oracle for the FFT strategies and as the `naive` strategy.

use crate::constants::WILDCARD;
use crate::pattern::Pattern;

/// Number of offsets in `line` where `pattern` matches.
#[must_use]
pub fn count_matches(pattern: &Pattern, line: &str) -> u32 {
    let needle = pattern.as_str().as_bytes();
    let hay = line.as_bytes();
    if hay.len() < needle.len() {
        return 0;
    }
    let wildcard = WILDCARD as u8;
    hay.windows(needle.len())
        .filter(|window| {
            window
                .iter()
                .zip(needle)
                .all(|(&t, &p)| p == wildcard || t == p)
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(pattern: &str, line: &str) -> u32 {
        count_matches(&Pattern::new(pattern).unwrap(), line)
    }

    #[test]
    fn wildcard_middle() {
        assert_eq!(count("a_c", "aXc abc aYc"), 3);
    }

    #[test]
    fn overlapping_literal() {
        assert_eq!(count("abc", "ababcabc"), 2);
        assert_eq!(count("aa", "aaaa"), 3);
    }

    #[test]
    fn all_wildcards_match_every_offset() {
        assert_eq!(count("____", "abcdefg"), 4);
    }

    #[test]
    fn short_line() {
        assert_eq!(count("abcd", "abc"), 0);
        assert_eq!(count("a", ""), 0);
    }

    #[test]
    fn equal_length() {
        assert_eq!(count("abc", "abc"), 1);
        assert_eq!(count("abd", "abc"), 0);
    }

    #[test]
    fn text_wildcard_only_matches_pattern_wildcard() {
        assert_eq!(count("a_", "a_"), 1);
        assert_eq!(count("ab", "a_"), 0);
    }
}

//! Strategy selection.

use std::fmt;
use std::str::FromStr;

use crate::error::LikeError;
use crate::window::{WindowKind, WindowLayout};

/// Matching strategy chosen at invocation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Direct comparison at every offset (the oracle).
    Naive,
    /// Overlapping `2m` windows.
    Standard,
    /// Non-overlapping `m` windows with carried partial sums.
    #[default]
    Faster,
}

impl Strategy {
    /// Every strategy, oracle first.
    pub const ALL: [Strategy; 3] = [Strategy::Naive, Strategy::Standard, Strategy::Faster];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Standard => "standard",
            Strategy::Faster => "faster",
        }
    }

    /// Window layout for a pattern of length `pattern_len`; `None` for
    /// the naive strategy, which uses no transforms.
    #[must_use]
    pub fn layout(self, pattern_len: usize) -> Option<WindowLayout> {
        match self {
            Strategy::Naive => None,
            Strategy::Standard => Some(WindowLayout::new(WindowKind::Standard, pattern_len)),
            Strategy::Faster => Some(WindowLayout::new(WindowKind::Faster, pattern_len)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = LikeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" => Ok(Strategy::Naive),
            "standard" => Ok(Strategy::Standard),
            "faster" | "fast" => Ok(Strategy::Faster),
            other => Err(LikeError::Config(format!("unknown strategy: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("naive".parse::<Strategy>().unwrap(), Strategy::Naive);
        assert_eq!("Standard".parse::<Strategy>().unwrap(), Strategy::Standard);
        assert_eq!("faster".parse::<Strategy>().unwrap(), Strategy::Faster);
        assert_eq!("fast".parse::<Strategy>().unwrap(), Strategy::Faster);
    }

    #[test]
    fn parse_unknown() {
        assert!(matches!(
            "regex".parse::<Strategy>(),
            Err(LikeError::Config(_))
        ));
    }

    #[test]
    fn display_matches_name() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string(), strategy.name());
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn layouts() {
        assert!(Strategy::Naive.layout(3).is_none());
        assert_eq!(Strategy::Standard.layout(3).map(|l| l.window_len()), Some(6));
        assert_eq!(Strategy::Faster.layout(3).map(|l| l.window_len()), Some(3));
    }

    #[test]
    fn default_is_faster() {
        assert_eq!(Strategy::default(), Strategy::Faster);
    }
}

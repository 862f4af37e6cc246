//! Alphabet and sizing constants.

/// Pattern character that matches any single text character.
pub const WILDCARD: char = '_';

/// Punctuation accepted after the letters, in code order (53..=60).
pub const PUNCTUATION: [char; 8] = [' ', '.', ',', '-', ':', '?', '!', ';'];

/// Corpus lines claimed by a worker per atomic step.
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Workers per hardware thread in the default pool size.
pub const PARALLELISM_FACTOR: usize = 2;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, transform failure).
    pub const ERROR_GENERIC: i32 = 1;
    /// Fast path disagreed with the oracle or another strategy.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Input outside the supported alphabet.
    pub const ERROR_ENCODING: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_is_distinct() {
        for (i, a) in PUNCTUATION.iter().enumerate() {
            for b in &PUNCTUATION[i + 1..] {
                assert_ne!(a, b);
            }
            assert_ne!(*a, WILDCARD);
        }
    }
}

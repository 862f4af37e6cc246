//! Cross-crate integration tests for the fastlike workspace live in `tests/`.

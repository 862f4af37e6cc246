//! # fastlike-fft
//!
//! Radix-2 complex FFT engine used by the wildcard matcher.
//! Transforms of equal length can share one set of bit-reversal and
//! roots-of-unity tables through the owner/sibling relationship.

pub mod complex;
pub mod tables;
pub mod transform;

// Re-exports
pub use complex::Complex;
pub use tables::{ceil_log2, FftTables};
pub use transform::{convolve_sequences, Tables, Transform, TransformError};

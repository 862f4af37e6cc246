//! Precomputed bit-reversal and roots-of-unity tables.

use std::f64::consts::PI;

use crate::complex::Complex;

/// Smallest `lg` such that `2^lg >= n`.
#[must_use]
pub fn ceil_log2(n: usize) -> u32 {
    let mut lg = 0;
    while (1usize << lg) < n {
        lg += 1;
    }
    lg
}

/// Permutation and twiddle tables for a transform of length `2^log2n`.
///
/// Tables are immutable once built; transforms of equal length read them
/// concurrently.
#[derive(Debug, Clone)]
pub struct FftTables {
    log2n: u32,
    rev: Vec<usize>,
    roots: Vec<Complex>,
}

impl FftTables {
    /// Build the tables for a transform of length `2^log2n`.
    ///
    /// `rev[i]` reverses the low `log2n` bits of `i`. `roots` holds
    /// `n + 1` entries, `roots[k] = e^{2πik/n}`, so the inverse pass can
    /// walk backwards starting from `roots[n]`.
    #[must_use]
    pub fn new(log2n: u32) -> Self {
        let n = 1usize << log2n;

        let mut rev = vec![0usize; n];
        for (i, slot) in rev.iter_mut().enumerate() {
            for j in 0..log2n {
                if i & (1 << j) != 0 {
                    *slot |= 1 << (log2n - j - 1);
                }
            }
        }

        let step = Complex::from_angle(2.0 * PI / n as f64);
        let mut roots = Vec::with_capacity(n + 1);
        roots.push(Complex::ONE);
        for k in 1..=n {
            roots.push(roots[k - 1] * step);
        }

        Self { log2n, rev, roots }
    }

    #[inline]
    #[must_use]
    pub fn log2n(&self) -> u32 {
        self.log2n
    }

    /// Transform length.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rev.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rev.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn rev(&self) -> &[usize] {
        &self.rev
    }

    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[Complex] {
        &self.roots
    }
}

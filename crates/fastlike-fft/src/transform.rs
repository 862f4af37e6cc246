//! In-place radix-2 Cooley-Tukey transform over a fixed-size complex buffer.
//!
//! A [`Transform`] either owns its permutation/root tables or borrows them
//! from another transform of the same length (a *sibling*). Siblings avoid
//! rebuilding identical tables for transforms that always travel together,
//! e.g. the pattern values and the squared pattern values. The borrow ties
//! the sibling's lifetime to its owner, so a sibling can never outlive the
//! tables it reads.

use crate::complex::Complex;
use crate::tables::{ceil_log2, FftTables};

/// Errors raised by transform operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// Two operands of a pointwise product have different transform lengths.
    #[error("transform length mismatch: {left} != {right}")]
    SizeMismatch { left: usize, right: usize },

    /// A load asked for input past the end of the source.
    #[error("load range ends at {end} but input has {len} symbols")]
    RangeOutOfBounds { end: usize, len: usize },

    /// A load does not fit in the buffer.
    #[error("cannot load {len} values into a transform of length {capacity}")]
    WindowTooLarge { len: usize, capacity: usize },

    /// The convolution output buffer is shorter than the logical size.
    #[error("convolution needs {needed} output slots, buffer has {len}")]
    OutputTooSmall { needed: usize, len: usize },
}

/// Where a transform's permutation and root tables live.
#[derive(Debug)]
pub enum Tables<'a> {
    /// Tables built for and owned by this transform.
    Owned(FftTables),
    /// Tables borrowed, read-only, from an owner of the same length.
    Borrowed(&'a FftTables),
}

impl Tables<'_> {
    #[inline]
    #[must_use]
    pub fn get(&self) -> &FftTables {
        match self {
            Tables::Owned(tables) => tables,
            Tables::Borrowed(tables) => tables,
        }
    }
}

/// A power-of-two complex buffer with its transform tables.
///
/// `size` is the logical length (how many convolution outputs are
/// meaningful); the buffer itself is `2^ceil_log2(size)` long.
#[derive(Debug)]
pub struct Transform<'a> {
    data: Vec<Complex>,
    size: usize,
    tables: Tables<'a>,
}

impl Transform<'static> {
    /// Create a table-owning transform able to hold `size` values.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_tables(size, FftTables::new(ceil_log2(size)))
    }

    /// The buffer length is the table length; `size` is clamped to it.
    fn with_tables(size: usize, tables: FftTables) -> Self {
        let n = tables.len();
        Self {
            data: vec![Complex::ZERO; n],
            size: size.min(n),
            tables: Tables::Owned(tables),
        }
    }
}

impl<'a> Transform<'a> {
    /// Create a sibling of `owner`: same length, zeroed buffer, tables
    /// borrowed from the owner instead of rebuilt.
    #[must_use]
    pub fn sibling_of(owner: &'a Transform<'_>) -> Self {
        Self::borrowing(owner.size, owner.tables())
    }

    /// Create a transform that borrows existing tables.
    #[must_use]
    pub fn borrowing(size: usize, tables: &'a FftTables) -> Self {
        let n = tables.len();
        Self {
            data: vec![Complex::ZERO; n],
            size: size.min(n),
            tables: Tables::Borrowed(tables),
        }
    }

    /// Whether this transform borrows its tables.
    #[must_use]
    pub fn is_sibling(&self) -> bool {
        matches!(self.tables, Tables::Borrowed(_))
    }

    #[inline]
    #[must_use]
    pub fn tables(&self) -> &FftTables {
        self.tables.get()
    }

    /// Buffer length (a power of two).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical size: number of meaningful convolution outputs.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[Complex] {
        &self.data
    }

    #[inline]
    pub fn values_mut(&mut self) -> &mut [Complex] {
        &mut self.data
    }

    /// Fill positions `[0, end - begin)` from `codes[begin..end]`.
    ///
    /// Code `0` is the wildcard and leaves its slot untouched (zero after
    /// [`clear`](Self::clear)). Every other code `c` becomes `(value(c), 0)`.
    /// With `reversed`, the range is consumed back to front, turning the
    /// correlation against this operand into a plain convolution.
    pub fn load(
        &mut self,
        codes: &[u32],
        begin: usize,
        end: usize,
        value: impl Fn(u32) -> u64,
        reversed: bool,
    ) -> Result<(), TransformError> {
        if end > codes.len() || begin > end {
            return Err(TransformError::RangeOutOfBounds {
                end,
                len: codes.len(),
            });
        }
        let len = end - begin;
        if len > self.data.len() {
            return Err(TransformError::WindowTooLarge {
                len,
                capacity: self.data.len(),
            });
        }

        for (offset, &code) in codes[begin..end].iter().enumerate() {
            if code == 0 {
                continue;
            }
            let slot = if reversed { len - 1 - offset } else { offset };
            self.data[slot] = Complex::real(value(code) as f64);
        }
        Ok(())
    }

    /// Fill the buffer prefix with arbitrary real values.
    pub fn load_reals(&mut self, values: &[f64]) -> Result<(), TransformError> {
        if values.len() > self.data.len() {
            return Err(TransformError::WindowTooLarge {
                len: values.len(),
                capacity: self.data.len(),
            });
        }
        for (slot, &v) in self.data.iter_mut().zip(values) {
            *slot = Complex::real(v);
        }
        Ok(())
    }

    /// Reset every slot to zero.
    pub fn clear(&mut self) {
        self.data.fill(Complex::ZERO);
    }

    /// Forward transform in place.
    pub fn forward(&mut self) {
        fft_in_place(&mut self.data, self.tables.get(), false);
    }

    /// Inverse transform in place, including the `1/n` scaling.
    pub fn inverse(&mut self) {
        fft_in_place(&mut self.data, self.tables.get(), true);
    }

    /// Multiply this spectrum element-wise by `other`'s.
    pub fn pointwise_multiply(&mut self, other: &Transform<'_>) -> Result<(), TransformError> {
        if self.data.len() != other.data.len() {
            return Err(TransformError::SizeMismatch {
                left: self.data.len(),
                right: other.data.len(),
            });
        }
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a *= b;
        }
        Ok(())
    }

    /// Convolve with `other` and accumulate into `out`.
    ///
    /// Both operands must already be in the frequency domain. After the
    /// product and the inverse pass, each of the first `size` real parts is
    /// rounded to the nearest integer, mapped through `combine` and added
    /// to `out[i]`. With `erase_first`, `out[i]` is zeroed beforehand so the
    /// first of several accumulated convolutions initialises the buffer.
    ///
    /// This buffer holds the time-domain product afterwards and must be
    /// cleared before it is reloaded.
    pub fn convolve(
        &mut self,
        other: &Transform<'_>,
        out: &mut [i64],
        combine: impl Fn(i64) -> i64,
        erase_first: bool,
    ) -> Result<(), TransformError> {
        if out.len() < self.size {
            return Err(TransformError::OutputTooSmall {
                needed: self.size,
                len: out.len(),
            });
        }
        self.pointwise_multiply(other)?;
        self.inverse();

        for (slot, value) in out.iter_mut().zip(&self.data[..self.size]) {
            let rounded = (value.re + 0.5).floor() as i64;
            if erase_first {
                *slot = 0;
            }
            *slot += combine(rounded);
        }
        Ok(())
    }
}

/// Iterative radix-2 Cooley-Tukey over `data` using prebuilt tables.
///
/// The inverse walks the root table backwards from `roots[n]`, which
/// conjugates every twiddle, then divides by `n`.
fn fft_in_place(data: &mut [Complex], tables: &FftTables, inverse: bool) {
    let n = data.len();
    debug_assert_eq!(n, tables.len());

    for (i, &j) in tables.rev().iter().enumerate() {
        if i < j {
            data.swap(i, j);
        }
    }

    let roots = tables.roots();
    let lg = tables.log2n();
    for stage in 1..=lg {
        let span = 1usize << stage;
        let half = span / 2;
        let stride = 1usize << (lg - stage);

        for start in (0..n).step_by(span) {
            for j in 0..half {
                let root = if inverse {
                    roots[n - j * stride]
                } else {
                    roots[j * stride]
                };
                let t = root * data[start + j + half];
                let u = data[start + j];
                data[start + j + half] = u - t;
                data[start + j] = u + t;
            }
        }
    }

    if inverse {
        let scale = n as f64;
        for value in data.iter_mut() {
            *value /= scale;
        }
    }
}

/// Linear convolution of two integer sequences through the transform.
///
/// Returns `a.len() + b.len() - 1` values, or nothing if either input is
/// empty.
pub fn convolve_sequences(a: &[i64], b: &[i64]) -> Result<Vec<i64>, TransformError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }
    let len = a.len() + b.len() - 1;

    let mut lhs = Transform::new(len);
    lhs.load_reals(&a.iter().map(|&v| v as f64).collect::<Vec<_>>())?;
    lhs.forward();

    let mut rhs = Transform::sibling_of(&lhs);
    rhs.load_reals(&b.iter().map(|&v| v as f64).collect::<Vec<_>>())?;
    rhs.forward();

    let mut out = vec![0i64; len];
    rhs.convolve(&lhs, &mut out, |x| x, true)?;
    Ok(out)
}

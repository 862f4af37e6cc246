//! FFT matcher over fixed-size windows.
//!
//! For pattern codes `p` and window codes `t`, offset `i` matches iff
//!
//! ```text
//! Σ p_j (p_j - t_{i+j})² = Σ p_j³ - 2 Σ p_j² t_{i+j} + Σ p_j t_{i+j}² = 0
//! ```
//!
//! Each term is non-negative and wildcard terms vanish, so the sum is zero
//! exactly when every literal position agrees. `Σ p_j³` is the pattern's
//! check value; the other two sums are the convolutions of `t` with the
//! reversed `p²` and of `t²` with the reversed `p`. A match is therefore
//! `2·(t ⊛ p²) - (t² ⊛ p) == check` at the convolution index `i + m - 1`.

use std::mem;

use fastlike_fft::Transform;

use crate::alphabet::encode_into;
use crate::error::LikeError;
use crate::matcher::LineMatcher;
use crate::spectrum::PatternSpectrum;
use crate::window::{Window, WindowKind};

/// Per-worker slice engines and accumulators for one pattern.
///
/// Both slice transforms borrow the pattern owner's tables. `curr` and
/// `prev` are swapped between windows of the faster strategy, which
/// carries the tail of one window's sums into the next.
pub struct WindowedMatcher<'a> {
    spectrum: &'a PatternSpectrum<'a>,
    values: Transform<'a>,
    squares: Transform<'a>,
    curr: Vec<i64>,
    prev: Vec<i64>,
    codes: Vec<u32>,
}

impl<'a> WindowedMatcher<'a> {
    #[must_use]
    pub fn new(spectrum: &'a PatternSpectrum<'a>) -> Self {
        let size = spectrum.layout().transform_size();
        let tables = spectrum.tables();
        Self {
            spectrum,
            values: Transform::borrowing(size, tables),
            squares: Transform::borrowing(size, tables),
            curr: vec![0; size],
            prev: vec![0; size],
            codes: Vec::new(),
        }
    }

    /// Fill `curr` with `2·(t ⊛ p²) - (t² ⊛ p)` for one window.
    fn convolve_window(&mut self, window: &Window) -> Result<(), LikeError> {
        self.values.clear();
        self.squares.clear();

        self.values
            .load(&self.codes, window.begin, window.end, u64::from, false)?;
        self.squares.load(
            &self.codes,
            window.begin,
            window.end,
            |c| u64::from(c) * u64::from(c),
            false,
        )?;

        self.values.forward();
        self.squares.forward();

        // The first convolution initialises `curr`, the second accumulates.
        self.values
            .convolve(self.spectrum.squares(), &mut self.curr, |x| 2 * x, true)?;
        self.squares
            .convolve(self.spectrum.values(), &mut self.curr, |x| -x, false)?;
        Ok(())
    }

    fn count_standard(&mut self) -> Result<u32, LikeError> {
        let layout = self.spectrum.layout();
        let m = layout.pattern_len();
        let check = self.spectrum.check();
        let mut matches = 0usize;

        for window in layout.windows(self.codes.len()) {
            self.convolve_window(&window)?;
            // Full spans end at convolution index m-1 through len-1. The
            // bound is the actual window length, truncated or not.
            matches += self
                .curr
                .get(m - 1..window.len())
                .map_or(0, |sums| sums.iter().filter(|&&v| v == check).count());
        }
        Ok(matches as u32)
    }

    fn count_faster(&mut self) -> Result<u32, LikeError> {
        let layout = self.spectrum.layout();
        let m = layout.pattern_len();
        let check = self.spectrum.check();
        let mut matches = 0usize;

        for window in layout.windows(self.codes.len()) {
            self.convolve_window(&window)?;

            // Index k < m-1 holds the part of an offset that started in the
            // previous window; that window left the rest at index m + k.
            let from = if window.first {
                m - 1
            } else {
                for (sum, carried) in self.curr[..m - 1].iter_mut().zip(&self.prev[m..]) {
                    *sum += carried;
                }
                0
            };

            matches += self.curr[from..window.len()]
                .iter()
                .filter(|&&v| v == check)
                .count();

            mem::swap(&mut self.curr, &mut self.prev);
        }
        Ok(matches as u32)
    }
}

impl LineMatcher for WindowedMatcher<'_> {
    fn count(&mut self, line: &str) -> Result<u32, LikeError> {
        let m = self.spectrum.layout().pattern_len();
        if line.len() < m {
            return Ok(0);
        }
        encode_into(line, &mut self.codes)?;

        match self.spectrum.layout().kind() {
            WindowKind::Standard => self.count_standard(),
            WindowKind::Faster => self.count_faster(),
        }
    }

    fn name(&self) -> &'static str {
        match self.spectrum.layout().kind() {
            WindowKind::Standard => "standard",
            WindowKind::Faster => "faster",
        }
    }
}

//! Pattern-side transforms, computed once per run.
//!
//! [`PatternValues`] owns the permutation and root tables together with the
//! transformed (reversed) pattern. [`PatternSpectrum`] adds the squared
//! pattern as a sibling borrowing those tables; every slice engine of every
//! worker borrows them too, so the tables are built exactly once.

use fastlike_fft::{FftTables, Transform};
use tracing::debug;

use crate::error::LikeError;
use crate::pattern::Pattern;
use crate::window::WindowLayout;

/// Transformed pattern values; owner of the shared tables.
#[derive(Debug)]
pub struct PatternValues {
    pattern: Pattern,
    layout: WindowLayout,
    transform: Transform<'static>,
}

impl PatternValues {
    /// Load the reversed pattern codes and move them to the frequency domain.
    pub fn new(pattern: &Pattern, layout: WindowLayout) -> Result<Self, LikeError> {
        if layout.pattern_len() != pattern.len() {
            return Err(LikeError::Config(format!(
                "layout built for pattern length {}, pattern has {}",
                layout.pattern_len(),
                pattern.len()
            )));
        }

        let mut transform = Transform::new(layout.transform_size());
        transform.load(pattern.codes(), 0, pattern.len(), u64::from, true)?;
        transform.forward();

        debug!(
            pattern = %pattern,
            kind = ?layout.kind(),
            size = transform.size(),
            len = transform.len(),
            "pattern transform ready"
        );

        Ok(Self {
            pattern: pattern.clone(),
            layout,
            transform,
        })
    }

    /// Build the squared-pattern sibling.
    pub fn spectrum(&self) -> Result<PatternSpectrum<'_>, LikeError> {
        let mut squares = Transform::sibling_of(&self.transform);
        squares.load(
            self.pattern.codes(),
            0,
            self.pattern.len(),
            |c| u64::from(c) * u64::from(c),
            true,
        )?;
        squares.forward();
        Ok(PatternSpectrum {
            values: self,
            squares,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub fn layout(&self) -> WindowLayout {
        self.layout
    }

    #[must_use]
    pub fn transform(&self) -> &Transform<'static> {
        &self.transform
    }
}

/// Both pattern-side spectra plus the pattern's match value.
#[derive(Debug)]
pub struct PatternSpectrum<'p> {
    values: &'p PatternValues,
    squares: Transform<'p>,
}

impl<'p> PatternSpectrum<'p> {
    /// Spectrum of the reversed pattern codes `p`.
    #[must_use]
    pub fn values(&self) -> &'p Transform<'static> {
        let owner: &'p PatternValues = self.values;
        &owner.transform
    }

    /// Spectrum of the reversed squared codes `p²`.
    #[must_use]
    pub fn squares(&self) -> &Transform<'p> {
        &self.squares
    }

    /// Tables shared by every transform of this run.
    #[must_use]
    pub fn tables(&self) -> &'p FftTables {
        self.values().tables()
    }

    #[must_use]
    pub fn layout(&self) -> WindowLayout {
        self.values.layout
    }

    #[must_use]
    pub fn check(&self) -> i64 {
        self.values.pattern.check()
    }

    #[must_use]
    pub fn pattern(&self) -> &'p Pattern {
        let owner: &'p PatternValues = self.values;
        &owner.pattern
    }
}

//! Window slicing for the FFT strategies.
//!
//! A line is processed window by window with fixed-size transforms:
//!
//! - **Standard**: windows of `2m`, advancing by `m + 1`. Each window
//!   settles the offsets whose full span lies inside it.
//! - **Faster**: windows of `m`, advancing by `m`. Offsets straddling two
//!   windows are settled by carrying the trailing partial sums of the
//!   previous window's convolution into the next one.
//!
//! The final window is truncated to the line end and ends iteration.

/// Slicing variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    Standard,
    Faster,
}

/// Window geometry for a pattern of length `pattern_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    kind: WindowKind,
    pattern_len: usize,
}

impl WindowLayout {
    #[must_use]
    pub fn new(kind: WindowKind, pattern_len: usize) -> Self {
        Self { kind, pattern_len }
    }

    #[must_use]
    pub fn standard(pattern_len: usize) -> Self {
        Self::new(WindowKind::Standard, pattern_len)
    }

    #[must_use]
    pub fn faster(pattern_len: usize) -> Self {
        Self::new(WindowKind::Faster, pattern_len)
    }

    #[must_use]
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    #[must_use]
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// Untruncated window length.
    #[must_use]
    pub fn window_len(&self) -> usize {
        match self.kind {
            WindowKind::Standard => 2 * self.pattern_len,
            WindowKind::Faster => self.pattern_len,
        }
    }

    /// Distance between consecutive window starts.
    #[must_use]
    pub fn step(&self) -> usize {
        match self.kind {
            WindowKind::Standard => self.pattern_len + 1,
            WindowKind::Faster => self.pattern_len,
        }
    }

    /// Linear convolution length of a window against the pattern.
    #[must_use]
    pub fn transform_size(&self) -> usize {
        self.window_len() + self.pattern_len - 1
    }

    /// Windows covering a line of `line_len` characters. Empty when the
    /// line is shorter than the pattern.
    #[must_use]
    pub fn windows(&self, line_len: usize) -> Windows {
        Windows {
            window_len: self.window_len(),
            step: self.step(),
            index: 0,
            limit: line_len,
            first: true,
            done: line_len < self.pattern_len || self.pattern_len == 0,
        }
    }
}

/// One window `[begin, end)` of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub begin: usize,
    pub end: usize,
    /// First window of the line.
    pub first: bool,
    /// Truncated at the line end; no window follows.
    pub last: bool,
}

impl Window {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == self.begin
    }
}

/// Iterator over the windows of one line.
#[derive(Debug, Clone)]
pub struct Windows {
    window_len: usize,
    step: usize,
    index: usize,
    limit: usize,
    first: bool,
    done: bool,
}

impl Iterator for Windows {
    type Item = Window;

    fn next(&mut self) -> Option<Window> {
        if self.done || self.index >= self.limit {
            return None;
        }

        let mut end = self.index + self.window_len;
        let last = end > self.limit;
        if last {
            end = self.limit;
            self.done = true;
        }

        let window = Window {
            begin: self.index,
            end,
            first: self.first,
            last,
        };
        self.first = false;
        self.index += self.step;
        Some(window)
    }
}

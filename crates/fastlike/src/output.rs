//! CLI output formatting.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Format a duration for display.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write one decimal count per line.
pub fn write_counts<W: Write>(out: W, counts: &[u32]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for count in counts {
        writeln!(out, "{count}")?;
    }
    out.flush()
}

/// Whether `path` names standard output.
#[must_use]
pub fn is_stdout(path: &Path) -> bool {
    path == Path::new("-")
}

/// Write counts to `path`, or to stdout when `path` is `-`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_counts_to(path: &Path, counts: &[u32]) -> io::Result<()> {
    if is_stdout(path) {
        write_counts(io::stdout().lock(), counts)
    } else {
        write_counts(File::create(path)?, counts)
    }
}

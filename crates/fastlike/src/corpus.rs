//! Corpus loading.

use std::fs;
use std::io;
use std::path::Path;

/// Split newline-delimited text into lines, dropping a trailing `\r`.
#[must_use]
pub fn parse_corpus(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Read a corpus file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or is not UTF-8.
pub fn read_corpus(path: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_corpus(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines() {
        assert_eq!(parse_corpus("abc\nde\n\nf"), vec!["abc", "de", "", "f"]);
    }

    #[test]
    fn strips_carriage_returns() {
        assert_eq!(parse_corpus("ab\r\ncd\r\nef\r"), vec!["ab", "cd", "ef"]);
    }

    #[test]
    fn empty_input() {
        assert!(parse_corpus("").is_empty());
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(parse_corpus("x\n").len(), 1);
    }

    #[test]
    fn read_missing_file() {
        let err = read_corpus(Path::new("/nonexistent/fastlike/corpus.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}

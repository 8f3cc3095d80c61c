//! Digit source loading.
//!
//! A digit source is a plain text file containing a long decimal expansion,
//! typically the digits of pi. The file may contain whitespace and a leading
//! `3.` prefix; both are stripped before slicing.
//!
//! # Short slices
//!
//! Requesting a slice past the true end of the source is not an error: the
//! loader returns whatever remains (possibly nothing), and downstream stages
//! simply produce fewer windows. The only hard failure is a source that
//! cannot be read at all.

use crate::error::{Error, Result};
use std::path::Path;

/// A bounded, offset-tagged run of decimal digit characters.
///
/// Immutable once produced; one slice is consumed per scan attempt.
#[derive(Debug, Clone)]
pub struct DigitSlice {
    /// Digit characters `0`-`9`, already cleaned
    pub digits: String,

    /// Absolute index of `digits[0]` within the full source
    pub offset: usize,
}

impl DigitSlice {
    /// Number of digits in the slice.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True if the slice holds no digits (offset past the source end).
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

/// Load up to `precision` digits starting at absolute digit index `start`.
///
/// Cleanup applied to the raw file content, in order:
/// 1. Remove all whitespace (spaces, newlines, tabs)
/// 2. Strip any leading `3` and `.` characters (the `3.` of a pi expansion)
///
/// # Errors
/// Returns `Error::SourceUnavailable` if the file cannot be read.
pub fn load_digits(path: &Path, precision: usize, start: usize) -> Result<DigitSlice> {
    let raw = std::fs::read_to_string(path).map_err(|_| Error::SourceUnavailable {
        path: path.display().to_string(),
    })?;

    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.trim_start_matches(['3', '.']);

    let digits: String = cleaned.chars().skip(start).take(precision).collect();

    Ok(DigitSlice {
        digits,
        offset: start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_source(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("qeac_source_test_{}.txt", name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_strips_prefix_and_whitespace() {
        let path = temp_source("prefix", "3.14 15\n9265");
        let slice = load_digits(&path, 100, 0).unwrap();
        assert_eq!(slice.digits, "14159265");
        assert_eq!(slice.offset, 0);
    }

    #[test]
    fn test_offset_and_precision() {
        let path = temp_source("offset", "3.0123456789");
        let slice = load_digits(&path, 4, 2).unwrap();
        assert_eq!(slice.digits, "2345");
        assert_eq!(slice.offset, 2);
    }

    #[test]
    fn test_short_slice_past_end() {
        let path = temp_source("short", "3.12345");
        let slice = load_digits(&path, 10, 3).unwrap();
        assert_eq!(slice.digits, "45");

        let slice = load_digits(&path, 10, 100).unwrap();
        assert!(slice.is_empty());
    }

    #[test]
    fn test_missing_source() {
        let path = PathBuf::from("/nonexistent/qeac/pi-digits.txt");
        let err = load_digits(&path, 10, 0).unwrap_err();
        assert!(matches!(err, Error::SourceUnavailable { .. }));
        assert!(err.to_string().contains("pi-digits.txt"));
    }

    #[test]
    fn test_leading_threes_all_stripped() {
        // lstrip-style: every leading '3' or '.' goes, not just one "3."
        let path = temp_source("threes", "33.14");
        let slice = load_digits(&path, 10, 0).unwrap();
        assert_eq!(slice.digits, "14");
    }
}

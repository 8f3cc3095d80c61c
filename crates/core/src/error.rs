//! Error types for the QEAC finder.
//!
//! All operations return structured errors rather than panicking.
//! The only failure expected to abort a run is a missing digit source;
//! everything else guards internal misuse or report-sink I/O.

use thiserror::Error;

/// Top-level error type for all operations in the system.
#[derive(Debug, Error)]
pub enum Error {
    /// The digit source file could not be opened or read.
    ///
    /// This is the single fatal condition: without digits there is nothing
    /// to scan.
    #[error("digit source not found: {path}. Place it alongside the program or point --source at it.")]
    SourceUnavailable { path: String },

    /// Two windows of different lengths were handed to the correlation score.
    #[error("window length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A chain was started at an index past the end of the window list.
    #[error("chain start index {index} out of bounds ({windows} windows)")]
    StartOutOfBounds { index: usize, windows: usize },

    /// Report file I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;

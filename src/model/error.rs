//! Error types for loading log content.
//!
//! The layout core itself cannot fail; these cover the shell around it.
//!
//! - [`InputError`] - the log file could not be opened or read. Fatal.
//! - [`ParseError`] - one `.jsonl` line was malformed. Non-fatal: the line
//!   is logged and skipped, the rest of the file still loads.

use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered when reading log input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given log file does not exist.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use hudview::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// Any other I/O failure (permissions, disk errors).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A malformed line in a `.jsonl` log file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line is not a valid `LogLine` JSON object.
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number in the file.
        line: usize,
        /// Parser message.
        message: String,
    },
}

//! Error types for datehist
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.
//!
//! Only two conditions are errors at all: the scan target failing the
//! directory precondition, and I/O failures while opening the directory for
//! enumeration. Everything that goes wrong inside a single tier (missing
//! header, short filename, empty git history) is a silent decline, not an
//! error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for datehist operations
pub type DatehistResult<T> = Result<T, DatehistError>;

/// Main error type for datehist operations
#[derive(Error, Debug)]
pub enum DatehistError {
    /// Scan target is missing or is not a directory
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// IO error while enumerating the directory
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for stylesheet compilation.

use thiserror::Error;

/// Errors that can occur while compiling a stylesheet.
#[derive(Debug, Error)]
pub enum SassError {
    /// The SCSS source failed to compile.
    #[error("SCSS compile error: {message}")]
    Compile { message: String },

    /// Reading the source or writing the target failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for stylesheet operations.
pub type SassResult<T> = Result<T, SassError>;

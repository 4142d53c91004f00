//! Error types for font analysis and embedding
//!
//! # Error Philosophy
//!
//! - Prefer recovery over failure: malformed style or dialogue lines are
//!   skipped where they occur, never surfaced as errors
//! - A dialogue referencing an unknown style attributes no characters; that
//!   is expected behavior, not an error condition
//! - Only true I/O failure is fatal, and it propagates unmodified

use thiserror::Error;

/// Main error type for assfont-core operations
///
/// Malformed subtitle content is handled by local recovery inside the
/// parsers, so in practice only [`CoreError::Io`] reaches callers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Script file could not be read
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    /// Script file could not be written
    #[error("failed to write script: {0}")]
    Write(std::io::Error),

    /// Embedded font file could not be read
    #[error("failed to read font file '{path}': {source}")]
    FontRead {
        /// Path of the font file that failed to load
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

//! Utility functions shared across parser, analysis, and codec modules

use std::path::Path;

use crate::Result;

pub mod hashers;
pub mod utf8;

pub use hashers::{create_hash_map, create_hash_map_with_capacity};
pub use utf8::strip_bom;

/// Read script text from disk, stripping a UTF-8 BOM if present.
///
/// The only fatal failure in the whole analysis path: an unreadable file
/// propagates as [`CoreError::Io`](crate::CoreError::Io). Content that reads
/// successfully is never rejected, however malformed.
///
/// # Errors
///
/// Returns [`CoreError::Io`](crate::CoreError::Io) if the file cannot be
/// read as UTF-8 text.
pub fn load_script<P: AsRef<Path>>(path: P) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;
    match strip_bom(&raw) {
        (stripped, true) => Ok(stripped.to_owned()),
        (_, false) => Ok(raw),
    }
}

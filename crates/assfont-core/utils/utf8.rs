//! Text encoding helpers for ASS script input
//!
//! ASS files written by Windows tooling commonly carry a UTF-8 BOM
//! (`utf-8-sig` in Python terms). The parsers anchor records at line starts,
//! so the BOM has to go before any scanning happens.

/// UTF-8 Byte Order Mark as it appears inside an already-decoded string
const UTF8_BOM: char = '\u{FEFF}';

/// Strip a leading UTF-8 BOM from decoded script text.
///
/// Returns the stripped text and whether a BOM was present.
///
/// # Example
///
/// ```rust
/// use assfont_core::utils::strip_bom;
///
/// let (text, had_bom) = strip_bom("\u{FEFF}[Script Info]");
/// assert_eq!(text, "[Script Info]");
/// assert!(had_bom);
/// ```
#[must_use]
pub fn strip_bom(text: &str) -> (&str, bool) {
    text.strip_prefix(UTF8_BOM)
        .map_or((text, false), |stripped| (stripped, true))
}

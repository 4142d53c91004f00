//! `[Fonts]` section construction, embedding, and inspection
//!
//! The section layout is a header line, then per resource a
//! `fontname: <name>` declaration followed by UU-encoded data lines and a
//! blank separator. Embedding replaces any prior section purely textually:
//! the host file is never re-parsed, only the old section (header through
//! the line before the next bracketed header, or end of file) is dropped.

use std::path::{Path, PathBuf};

use super::uu_encode;
use crate::errors::CoreError;
use crate::utils::load_script;
use crate::Result;

/// Section header marker, matched case-insensitively
const FONTS_HEADER: &str = "[Fonts]";

/// Key introducing one embedded resource, matched case-insensitively
const FONTNAME_KEY: &str = "fontname";

/// One embedded font discovered by [`inspect_embedded_fonts`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EmbeddedFontInfo {
    /// Declared resource name (usually the original file name)
    pub name: String,
    /// Approximate decoded size in bytes; not a verified decode, see
    /// [`estimate_decoded_len`]
    pub estimated_size: usize,
}

/// Build a `[Fonts]` section for the given named resources.
///
/// Returns the empty string when there is nothing to embed, so callers can
/// append the result unconditionally.
pub fn build_fonts_section<'a, I>(fonts: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut section = String::new();

    for (name, data) in fonts {
        if section.is_empty() {
            section.push_str(FONTS_HEADER);
            section.push('\n');
        }
        section.push_str("fontname: ");
        section.push_str(name);
        section.push('\n');
        section.push_str(&uu_encode(data));
        section.push('\n');
        // blank separator after each resource
        section.push('\n');
    }

    section
}

/// Embed fonts into script text, replacing any existing `[Fonts]` section.
///
/// The prior section is located by its header marker and consumed up to the
/// next bracketed section header or end of file. The remaining text is
/// normalized to end with exactly one newline before the new section is
/// appended. Everything outside the section passes through untouched.
pub fn embed_fonts<'a, I>(script: &str, fonts: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut host = String::with_capacity(script.len());
    let mut in_fonts = false;

    // split_inclusive keeps original line endings for the text we retain
    for line in script.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case(FONTS_HEADER) {
            in_fonts = true;
            continue;
        }
        if in_fonts {
            if trimmed.starts_with('[') {
                in_fonts = false;
            } else {
                continue;
            }
        }
        host.push_str(line);
    }

    // exactly one trailing newline before the new section
    host.truncate(host.trim_end().len());
    host.push('\n');

    host.push_str(&build_fonts_section(fonts));
    host
}

/// Embed font files into an ASS script on disk.
///
/// Reads the script and every font file, embeds the fonts under their file
/// names, and writes the result to `output`. This is the only path in the
/// crate that performs writes; all failures here are I/O.
///
/// # Errors
///
/// Returns [`CoreError::Io`] if the script cannot be read,
/// [`CoreError::FontRead`] for an unreadable font file, and
/// [`CoreError::Write`] if the output cannot be written.
pub fn embed_font_files(script_path: &Path, font_paths: &[PathBuf], output: &Path) -> Result<()> {
    let script = load_script(script_path)?;

    let mut fonts = Vec::with_capacity(font_paths.len());
    for path in font_paths {
        let data = std::fs::read(path).map_err(|source| CoreError::FontRead {
            path: path.display().to_string(),
            source,
        })?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        fonts.push((name, data));
    }

    let embedded = embed_fonts(
        &script,
        fonts.iter().map(|(name, data)| (name.as_str(), data.as_slice())),
    );

    std::fs::write(output, embedded).map_err(CoreError::Write)
}

/// List fonts already embedded in script text, with approximate sizes.
///
/// Sizes come from [`estimate_decoded_len`] and are explicitly estimates;
/// padding at the end of each body may inflate them by 1-2 bytes.
#[must_use]
pub fn inspect_embedded_fonts(script: &str) -> Vec<EmbeddedFontInfo> {
    let mut fonts = Vec::new();
    let mut in_section = false;
    let mut current: Option<(String, usize)> = None;

    for line in script.lines() {
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case(FONTS_HEADER) {
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if trimmed.starts_with('[') {
            break;
        }
        // comment lines never carry data
        if trimmed.starts_with(';') || trimmed.starts_with('!') {
            continue;
        }

        if let Some(name) = font_entry_name(trimmed) {
            if let Some((name, chars)) = current.take() {
                fonts.push(entry(name, chars));
            }
            current = Some((name.to_owned(), 0));
        } else if let Some((_, chars)) = current.as_mut() {
            *chars += trimmed.chars().filter(|c| !c.is_whitespace()).count();
        }
    }

    if let Some((name, chars)) = current {
        fonts.push(entry(name, chars));
    }

    fonts
}

/// Extract the resource name from a `fontname:` line, if it is one
fn font_entry_name(line: &str) -> Option<&str> {
    let (key, value) = line.split_once(':')?;
    key.trim()
        .eq_ignore_ascii_case(FONTNAME_KEY)
        .then(|| value.trim())
}

fn entry(name: String, chars: usize) -> EmbeddedFontInfo {
    EmbeddedFontInfo {
        name,
        estimated_size: chars * 3 / 4,
    }
}

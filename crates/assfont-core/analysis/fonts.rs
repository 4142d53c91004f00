//! Font attribution: which characters does each font have to render?
//!
//! Walks every dialogue event as a stream of literal runs and `{...}`
//! directive blocks, tracking the current font through `\fn` overrides and
//! a drawing-mode flag driven by `\p` scale tags. Literal text is attributed
//! to the font active at that point; vector drawing commands are excluded
//! entirely, since they are path data rather than glyph text.
//!
//! The resulting map feeds glyph subsetting: per font, the exact set of
//! Unicode characters a renderer will ask it to draw.
//!
//! # Recovery
//!
//! Malformed dialogue content never fails a scan; the worst outcome for a
//! broken line is that it contributes no characters. A dialogue referencing
//! an unknown style is scanned with no current font, so its text is
//! attributed to nothing (strict behavior, no default-font fallback).

use ahash::RandomState;
use std::collections::{BTreeSet, HashMap};

use crate::parser::{parse_dialogues, StyleTable};
use crate::utils::create_hash_map;

/// Accumulated character set for one font
///
/// Created lazily the first time a font is selected, either through a
/// style's declaration on a dialogue event or through a `\fn` override.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FontUsage<'a> {
    font_name: &'a str,
    chars: BTreeSet<char>,
}

impl<'a> FontUsage<'a> {
    /// Create an empty usage entry for a font
    #[must_use]
    const fn new(font_name: &'a str) -> Self {
        Self {
            font_name,
            chars: BTreeSet::new(),
        }
    }

    /// Font family name this entry tracks
    #[must_use]
    pub const fn font_name(&self) -> &'a str {
        self.font_name
    }

    /// Characters attributed to this font, ordered by code point
    #[must_use]
    pub const fn chars(&self) -> &BTreeSet<char> {
        &self.chars
    }

    /// Number of distinct characters attributed
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.chars.len()
    }

    /// Attribute one literal run to this font, normalizing first.
    ///
    /// Normalization order: drop non-printable characters, then delete the
    /// `\N` hard-break and `\n` soft-break escapes (they encode line breaks,
    /// not glyphs), then replace `\h` with a literal space, which renders as
    /// a non-breaking space glyph that must survive subsetting.
    fn add_run(&mut self, run: &str) {
        let printable: String = run.chars().filter(|c| !c.is_control()).collect();
        let cleaned = printable
            .replace("\\N", "")
            .replace("\\n", "")
            .replace("\\h", " ");
        self.chars.extend(cleaned.chars());
    }
}

/// Mapping from font name to its accumulated [`FontUsage`]
pub type FontUsageMap<'a> = HashMap<&'a str, FontUsage<'a>, RandomState>;

/// One segment of dialogue text: literal glyph text or a directive block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Text outside any `{...}` block
    Literal(&'a str),
    /// Contents of a `{...}` block, braces stripped
    Block(&'a str),
}

/// Split dialogue text into literal runs and directive blocks.
///
/// Blocks are matched brace pairs with no nesting. A `{` with no closing
/// `}` is not a block; it stays literal along with everything after it.
/// A stray `}` is ordinary literal text.
fn segments(text: &str) -> impl Iterator<Item = Segment<'_>> {
    let mut rest = text;

    core::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        if let Some(open) = rest.find('{') {
            if let Some(close) = rest[open..].find('}').map(|rel| open + rel) {
                if open > 0 {
                    let literal = &rest[..open];
                    rest = &rest[open..];
                    return Some(Segment::Literal(literal));
                }
                let block = &rest[1..close];
                rest = &rest[close + 1..];
                return Some(Segment::Block(block));
            }
        }
        // no further complete block; everything left is literal
        let literal = rest;
        rest = "";
        Some(Segment::Literal(literal))
    })
}

/// Find the winning `\p` drawing scale in a block, if any.
///
/// Scans for `\p` immediately followed by ASCII digits (which rules out
/// `\pos` and `\pbo`); the last occurrence in the block wins, so an
/// enter/exit pair inside one block cancels out.
fn last_drawing_scale(block: &str) -> Option<u32> {
    let mut scale = None;
    for (idx, _) in block.match_indices("\\p") {
        let digits: String = block[idx + 2..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        if let Ok(value) = digits.parse() {
            scale = Some(value);
        }
    }
    scale
}

/// Whether a block contains a drawing-mode exit marker (`\p0`)
fn has_drawing_exit(block: &str) -> bool {
    block.match_indices("\\p").any(|(idx, _)| {
        let digits: String = block[idx + 2..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        matches!(digits.parse::<u32>(), Ok(0))
    })
}

/// Find the winning `\fn` override in a block, if any.
///
/// The name runs from `\fn` to the next backslash or the end of the block
/// content and is trimmed. Empty names are ignored; among the rest, the
/// last occurrence wins.
fn last_font_override(block: &str) -> Option<&str> {
    let mut winner = None;
    for (idx, _) in block.match_indices("\\fn") {
        let tail = &block[idx + 3..];
        let name = tail.find('\\').map_or(tail, |end| &tail[..end]).trim();
        if !name.is_empty() {
            winner = Some(name);
        }
    }
    winner
}

/// Font attribution pass over a whole script
///
/// Pure function of the source text: scanning the same script twice yields
/// identical maps. Holds no state between invocations, so batch processing
/// may run one analyzer per file in parallel.
#[derive(Debug, Clone, Copy)]
pub struct FontUsageAnalyzer<'a> {
    /// Script text being analyzed
    source: &'a str,
}

impl<'a> FontUsageAnalyzer<'a> {
    /// Create an analyzer over script text
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Run the attribution pass: style table build, then per-event scan.
    #[must_use]
    pub fn analyze(&self) -> FontUsageMap<'a> {
        let styles = StyleTable::parse(self.source);
        self.analyze_with_styles(&styles)
    }

    /// Run the attribution pass against an externally built style table.
    #[must_use]
    pub fn analyze_with_styles(&self, styles: &StyleTable<'a>) -> FontUsageMap<'a> {
        let mut usage: FontUsageMap<'a> = create_hash_map();

        for event in parse_dialogues(self.source) {
            let base_font = styles
                .get(event.style)
                .map(|style| style.font_name)
                .filter(|font| !font.is_empty());
            scan_event_text(event.text, base_font, &mut usage);
        }

        usage
    }
}

/// Scan one event's text, attributing literal runs to the active font.
fn scan_event_text<'a>(text: &'a str, base_font: Option<&'a str>, usage: &mut FontUsageMap<'a>) {
    let mut current_font = base_font;
    if let Some(font) = current_font {
        ensure_entry(usage, font);
    }

    let mut drawing = false;

    for segment in segments(text) {
        match segment {
            Segment::Literal(run) => {
                if drawing {
                    continue;
                }
                if let Some(font) = current_font {
                    if !run.is_empty() {
                        ensure_entry(usage, font).add_run(run);
                    }
                }
            }
            Segment::Block(block) => {
                if drawing {
                    // the exit marker's own block is consumed whole
                    if has_drawing_exit(block) {
                        drawing = false;
                    }
                    continue;
                }
                match last_drawing_scale(block) {
                    Some(scale) if scale > 0 => drawing = true,
                    _ => {
                        if let Some(font) = last_font_override(block) {
                            current_font = Some(font);
                            ensure_entry(usage, font);
                        }
                    }
                }
            }
        }
    }
}

/// Get or lazily create the usage entry for a font.
fn ensure_entry<'a, 'm>(
    usage: &'m mut FontUsageMap<'a>,
    font: &'a str,
) -> &'m mut FontUsage<'a> {
    usage.entry(font).or_insert_with(|| FontUsage::new(font))
}

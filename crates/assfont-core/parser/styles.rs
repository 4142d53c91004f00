//! Style table construction from `Style:` declarations
//!
//! Builds the mapping from style name to declared font consulted when
//! dialogue events are attributed. Only the first three fields of a style
//! record matter here (`Name`, `Fontname`, `Fontsize`); the long tail of
//! colour and layout fields is consumed and discarded.
//!
//! Recovery policy: a malformed style line is dropped without a partial
//! entry, and the builder never fails for the file as a whole.

use ahash::RandomState;
use std::collections::HashMap;

use crate::utils::create_hash_map;

/// Single style declaration, immutable once parsed
///
/// Zero-copy: fields reference spans of the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Style<'a> {
    /// Style name, the lookup key for dialogue events
    pub name: &'a str,
    /// Declared font family name
    pub font_name: &'a str,
    /// Declared font size, retained for fidelity but unused by attribution
    pub font_size: f32,
}

/// Mapping from style name to [`Style`], built in one pass over the source
///
/// Duplicate style names follow last-declaration-wins, matching renderer
/// behavior when a script redeclares a style.
#[derive(Debug, Clone, Default)]
pub struct StyleTable<'a> {
    styles: HashMap<&'a str, Style<'a>, RandomState>,
}

impl<'a> StyleTable<'a> {
    /// Build the style table from full script text.
    ///
    /// `Style:` records are recognized only at line starts. Lines that fail
    /// to parse (missing fields, non-numeric font size) are skipped silently.
    #[must_use]
    pub fn parse(source: &'a str) -> Self {
        let mut styles = create_hash_map();

        for line in source.lines() {
            if let Some(fields) = line.strip_prefix("Style:") {
                if let Some(style) = parse_style_line(fields) {
                    styles.insert(style.name, style);
                }
            }
        }

        Self { styles }
    }

    /// Look up a style by name (case-sensitive, as renderers match styles)
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Style<'a>> {
        self.styles.get(name)
    }

    /// Number of distinct styles parsed
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no style parsed successfully
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate over parsed styles in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Style<'a>> {
        self.styles.values()
    }
}

/// Parse the field list of one style record, `None` if malformed.
///
/// Expects `Name,Fontname,Fontsize,...`; trailing fields are ignored. Any
/// of the three leading fields being absent or empty, or a font size that
/// does not parse as a float, drops the line.
fn parse_style_line(fields: &str) -> Option<Style<'_>> {
    let mut parts = fields.splitn(4, ',');

    let name = parts.next()?;
    let font_name = parts.next()?;
    let font_size = parts.next()?;

    if name.is_empty() || font_name.is_empty() || font_size.is_empty() {
        return None;
    }

    let font_size: f32 = font_size.trim().parse().ok()?;

    Some(Style {
        name: name.trim(),
        font_name: font_name.trim(),
        font_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_style() {
        let table = StyleTable::parse(
            "Style: Default,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,0,0,0,0,100,100,0,0,1,2,0,2,10,10,10,1\n",
        );
        let style = table.get("Default").expect("Default style");
        assert_eq!(style.font_name, "Arial");
        assert!((style.font_size - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn last_duplicate_declaration_wins() {
        let table = StyleTable::parse("Style: A,First,10\nStyle: A,Second,12\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("A").expect("style A").font_name, "Second");
    }

    #[test]
    fn non_numeric_font_size_drops_line_only() {
        let table = StyleTable::parse("Style: Bad,Arial,huge\nStyle: Good,Arial,20\n");
        assert!(table.get("Bad").is_none());
        assert!(table.get("Good").is_some());
    }

    #[test]
    fn missing_fields_drop_line() {
        let table = StyleTable::parse("Style: OnlyName\nStyle: Name,Font\n");
        assert!(table.is_empty());
    }

    #[test]
    fn empty_field_drops_line() {
        let table = StyleTable::parse("Style: Name,,20\n");
        assert!(table.is_empty());
    }

    #[test]
    fn record_must_be_line_anchored() {
        let table = StyleTable::parse("  Style: Indented,Arial,20\nFoo Style: Inline,Arial,20\n");
        assert!(table.is_empty());
    }

    #[test]
    fn fields_are_trimmed() {
        let table = StyleTable::parse("Style:  Spaced , Comic Sans MS , 18 ,rest\n");
        let style = table.get("Spaced").expect("Spaced style");
        assert_eq!(style.font_name, "Comic Sans MS");
        assert!((style.font_size - 18.0).abs() < f32::EPSILON);
    }

    #[test]
    fn crlf_line_endings() {
        let table = StyleTable::parse("Style: A,Arial,20\r\nStyle: B,Verdana,16\r\n");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn float_font_size() {
        let table = StyleTable::parse("Style: A,Arial,20.5\n");
        let style = table.get("A").expect("style A");
        assert!((style.font_size - 20.5).abs() < f32::EPSILON);
    }
}

//! Dialogue event extraction from `Dialogue:` records
//!
//! A dialogue record carries ten positional fields:
//! `Layer,Start,End,Style,Name,MarginL,MarginR,MarginV,Effect,Text`.
//! Font attribution needs only `Style` and `Text`; the rest are consumed
//! positionally and discarded. `Text` is the remainder of the line and may
//! itself contain commas, so splitting is capped at ten fields.

/// One dialogue event, reduced to the fields font attribution consumes
///
/// Zero-copy: both fields reference spans of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueEvent<'a> {
    /// Referenced style name (field 4), trimmed
    pub style: &'a str,
    /// Raw event text (field 10), tags included, commas preserved
    pub text: &'a str,
}

impl<'a> DialogueEvent<'a> {
    /// Parse a single source line into a dialogue event.
    ///
    /// Returns `None` for non-dialogue lines and for records with fewer
    /// than ten fields; malformed events are dropped, never an error.
    #[must_use]
    pub fn parse_line(line: &'a str) -> Option<Self> {
        let data = line.strip_prefix("Dialogue:")?;

        let mut fields = data.splitn(10, ',');
        let style = fields.nth(3)?;
        let text = fields.nth(5)?;

        Some(Self {
            style: style.trim(),
            text: text.strip_suffix('\r').unwrap_or(text),
        })
    }
}

/// Extract all dialogue events from script text, in document order.
///
/// Records are recognized only at line starts; anything else is ignored.
#[must_use]
pub fn parse_dialogues(source: &str) -> Vec<DialogueEvent<'_>> {
    source.lines().filter_map(DialogueEvent::parse_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_style_and_text() {
        let event =
            DialogueEvent::parse_line("Dialogue: 0,0:00:00.00,0:00:02.00,Default,,0,0,0,,Hello")
                .expect("dialogue parses");
        assert_eq!(event.style, "Default");
        assert_eq!(event.text, "Hello");
    }

    #[test]
    fn text_keeps_embedded_commas() {
        let event = DialogueEvent::parse_line(
            "Dialogue: 0,0:00:00.00,0:00:02.00,Default,,0,0,0,,Wait, what, really?",
        )
        .expect("dialogue parses");
        assert_eq!(event.text, "Wait, what, really?");
    }

    #[test]
    fn effect_field_is_not_part_of_text() {
        let event = DialogueEvent::parse_line(
            "Dialogue: 0,0:00:00.00,0:00:02.00,Default,,0,0,0,karaoke,Sing along",
        )
        .expect("dialogue parses");
        assert_eq!(event.text, "Sing along");
    }

    #[test]
    fn too_few_fields_is_dropped() {
        assert!(DialogueEvent::parse_line("Dialogue: 0,0:00:00.00,0:00:02.00,Default").is_none());
    }

    #[test]
    fn non_dialogue_lines_ignored() {
        assert!(DialogueEvent::parse_line("Comment: 0,0:00:00.00,0:00:02.00,Default,,0,0,0,,hidden").is_none());
        assert!(DialogueEvent::parse_line("[Events]").is_none());
    }

    #[test]
    fn record_must_be_line_anchored() {
        let source = "  Dialogue: 0,0:00:00.00,0:00:02.00,Default,,0,0,0,,Indented\n";
        assert!(parse_dialogues(source).is_empty());
    }

    #[test]
    fn crlf_is_stripped_from_text() {
        let events = parse_dialogues("Dialogue: 0,a,b,Default,,0,0,0,,Hi\r\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].text, "Hi");
    }

    #[test]
    fn empty_text_field_is_valid() {
        let event = DialogueEvent::parse_line("Dialogue: 0,a,b,Default,,0,0,0,,")
            .expect("dialogue parses");
        assert_eq!(event.text, "");
    }
}

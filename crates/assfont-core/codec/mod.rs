//! Binary-to-text transcoding for embedded `[Fonts]` data
//!
//! ASS embeds binary resources with a UUEncode variant: each 3-byte group
//! becomes four 6-bit values, each offset by 33 into printable ASCII
//! (`!`..=`` ` ``), hard-wrapped at 80 columns. There is no length header;
//! a short final group is zero-padded, so the trailing characters of an
//! encoded body may not correspond to real data.

pub mod fonts_section;

pub use fonts_section::{
    build_fonts_section, embed_font_files, embed_fonts, inspect_embedded_fonts, EmbeddedFontInfo,
};

/// Offset added to each 6-bit value to reach printable ASCII
const ENCODE_OFFSET: u8 = 33;

/// Column width encoded output is hard-wrapped at
pub const WRAP_COLUMNS: usize = 80;

/// Encode binary data into the ASS UUEncode variant.
///
/// Groups of 3 bytes become 4 characters in the range `!` through `` ` ``;
/// the final group is zero-padded to 3 bytes before splitting. Output lines
/// are exactly [`WRAP_COLUMNS`] characters, newline-separated, except the
/// last. No length header is emitted.
///
/// # Example
///
/// ```rust
/// use assfont_core::codec::uu_encode;
///
/// assert_eq!(uu_encode(&[0, 0, 0]), "!!!!");
/// assert_eq!(uu_encode(&[]), "");
/// ```
#[must_use]
pub fn uu_encode(data: &[u8]) -> String {
    let group_count = data.len().div_ceil(3);
    let encoded_len = group_count * 4;
    let mut out = String::with_capacity(encoded_len + encoded_len / WRAP_COLUMNS);

    let mut column = 0;
    for group in data.chunks(3) {
        let mut bytes = [0u8; 3];
        bytes[..group.len()].copy_from_slice(group);
        let [b1, b2, b3] = bytes;

        let values = [
            b1 >> 2,
            ((b1 & 0x03) << 4) | (b2 >> 4),
            ((b2 & 0x0F) << 2) | (b3 >> 6),
            b3 & 0x3F,
        ];

        for value in values {
            if column == WRAP_COLUMNS {
                out.push('\n');
                column = 0;
            }
            out.push(char::from(value + ENCODE_OFFSET));
            column += 1;
        }
    }

    out
}

/// Estimate the decoded byte count of previously encoded text.
///
/// Computes `floor(non_whitespace_chars * 3 / 4)`. This is a reporting
/// convenience, not a decoder: it does not invert the encoding, account for
/// end-of-data padding, or validate the character range. For inputs whose
/// original length was a multiple of 3 the estimate is exact; otherwise it
/// may overstate by 1-2 bytes.
#[must_use]
pub fn estimate_decoded_len(encoded: &str) -> usize {
    let chars = encoded.chars().filter(|c| !c.is_whitespace()).count();
    chars * 3 / 4
}

//! UTF-8 sequence classification.
//!
//! [`classify_utf8`] reports the width of the sequence at the start of a
//! buffer and whether it is valid. Most invalid sequences report a width of
//! 1, so they are treated as isolated bytes. The non-characters `U+FFFE`,
//! `U+FFFF`, `U+FDD0..=U+FDEF` and their supplementary-plane counterparts
//! (`U+nFFFE`, `U+nFFFF`) are well-formed byte patterns: they report their
//! full width of 3 or 4 alongside the invalid flag, since some callers treat
//! them as code points without glyphs.
//!
//! Rules follow <https://www.cl.cam.ac.uk/~mgk25/unicode.html#utf-8>.

use crate::lead_byte::{utf8_bytes_of_lead, utf8_is_trail_byte};

/// Validity and width of one UTF-8 sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Utf8Status {
    valid: bool,
    width: u8,
}

impl Utf8Status {
    /// A well-formed, allowed sequence of `width` bytes.
    pub const fn valid(width: u8) -> Self {
        Utf8Status { valid: true, width }
    }

    /// An invalid sequence of `width` bytes.
    pub const fn invalid(width: u8) -> Self {
        Utf8Status {
            valid: false,
            width,
        }
    }

    pub const fn is_valid(self) -> bool {
        self.valid
    }

    /// Width in bytes, 1 through 4.
    pub fn width(self) -> usize {
        usize::from(self.width)
    }

    /// Bytes to treat as one displayable unit: the width, or 1 when invalid.
    pub fn draw_width(self) -> usize {
        if self.valid {
            usize::from(self.width)
        } else {
            1
        }
    }
}

/// Classify the UTF-8 sequence at the start of `bytes`.
///
/// Only `bytes` is examined; a sequence that needs more bytes than are
/// available is invalid with width 1. An empty buffer has no sequence and
/// also reports invalid with width 1.
pub fn classify_utf8(bytes: &[u8]) -> Utf8Status {
    let Some(&lead) = bytes.first() else {
        return Utf8Status::invalid(1);
    };
    if lead < 0x80 {
        return Utf8Status::valid(1);
    }

    let byte_count = utf8_bytes_of_lead(lead);
    if byte_count == 1 || byte_count > bytes.len() {
        // Invalid lead byte, or not enough bytes
        return Utf8Status::invalid(1);
    }

    match *bytes {
        [_, b1, ..] if !utf8_is_trail_byte(b1) => Utf8Status::invalid(1),
        [_, _, ..] if byte_count == 2 => Utf8Status::valid(2),
        [_, b1, b2, ..] if byte_count == 3 && utf8_is_trail_byte(b2) => {
            classify_three(lead, b1, b2)
        }
        [_, b1, b2, b3, ..]
            if byte_count == 4 && utf8_is_trail_byte(b2) && utf8_is_trail_byte(b3) =>
        {
            classify_four(lead, b1, b2, b3)
        }
        _ => Utf8Status::invalid(1),
    }
}

/// Three well-formed bytes: reject overlongs and surrogates, flag
/// non-characters.
fn classify_three(lead: u8, b1: u8, b2: u8) -> Utf8Status {
    if lead == 0xE0 && (b1 & 0xE0) == 0x80 {
        // Overlong
        return Utf8Status::invalid(1);
    }
    if lead == 0xED && (b1 & 0xE0) == 0xA0 {
        // Surrogate
        return Utf8Status::invalid(1);
    }
    if lead == 0xEF && b1 == 0xBF && (b2 == 0xBE || b2 == 0xBF) {
        // U+FFFE or U+FFFF
        return Utf8Status::invalid(3);
    }
    if lead == 0xEF && b1 == 0xB7 && ((b2 & 0xF0) == 0x90 || (b2 & 0xF0) == 0xA0) {
        // U+FDD0 .. U+FDEF
        return Utf8Status::invalid(3);
    }
    Utf8Status::valid(3)
}

/// Four well-formed bytes: flag non-characters, reject values past
/// U+10FFFF and overlongs.
fn classify_four(lead: u8, b1: u8, b2: u8, b3: u8) -> Utf8Status {
    if (b1 & 0x0F) == 0x0F && b2 == 0xBF && (b3 == 0xBE || b3 == 0xBF) {
        // U+nFFFE or U+nFFFF
        return Utf8Status::invalid(4);
    }
    if lead == 0xF4 {
        if b1 > 0x8F {
            // Beyond U+10FFFF
            return Utf8Status::invalid(1);
        }
    } else if lead == 0xF0 && (b1 & 0xF0) == 0x80 {
        // Overlong
        return Utf8Status::invalid(1);
    }
    Utf8Status::valid(4)
}

/// Bytes to treat as one displayable unit at the start of `bytes`.
///
/// Invalid sequences always walk one byte at a time, whatever width they
/// report.
pub fn draw_width_utf8(bytes: &[u8]) -> usize {
    classify_utf8(bytes).draw_width()
}

/// Returns `true` when all of `bytes` is a run of valid sequences.
pub fn utf8_is_valid(bytes: &[u8]) -> bool {
    Utf8Units::new(bytes).all(|unit| unit.status.is_valid())
}

/// Length of U+2028 LINE SEPARATOR and U+2029 PARAGRAPH SEPARATOR in UTF-8.
pub const UTF8_SEPARATOR_LENGTH: usize = 3;

/// Length of U+0085 NEXT LINE in UTF-8.
pub const UTF8_NEL_LENGTH: usize = 2;

/// Returns `true` if `bytes` starts with U+2028 or U+2029.
pub fn utf8_is_separator(bytes: &[u8]) -> bool {
    matches!(bytes, [0xE2, 0x80, 0xA8 | 0xA9, ..])
}

/// Returns `true` if `bytes` starts with U+0085.
pub fn utf8_is_nel(bytes: &[u8]) -> bool {
    matches!(bytes, [0xC2, 0x85, ..])
}

/// One displayable unit found by [`Utf8Units`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Utf8Unit {
    /// Byte offset of the unit in the walked buffer.
    pub pos: usize,
    /// Classification of the sequence starting at `pos`.
    pub status: Utf8Status,
}

impl Utf8Unit {
    /// Bytes this unit covers in the walk.
    pub fn byte_len(&self) -> usize {
        self.status.draw_width()
    }
}

/// Walks a UTF-8 buffer one displayable unit at a time.
///
/// Valid sequences are stepped over whole; invalid ones one byte at a time,
/// so a non-character shows up once per byte.
#[derive(Clone, Debug)]
pub struct Utf8Units<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Utf8Units<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Utf8Units { bytes, pos: 0 }
    }

    /// Byte offset of the next unit.
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl Iterator for Utf8Units<'_> {
    type Item = Utf8Unit;

    fn next(&mut self) -> Option<Utf8Unit> {
        let rest = self.bytes.get(self.pos..).filter(|rest| !rest.is_empty())?;
        let unit = Utf8Unit {
            pos: self.pos,
            status: classify_utf8(rest),
        };
        self.pos += unit.byte_len();
        Some(unit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len().saturating_sub(self.pos);
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl std::iter::FusedIterator for Utf8Units<'_> {}

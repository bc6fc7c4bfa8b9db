//! Cursor-style UTF-8 decoding.
//!
//! [`decode_utf8_at`] decodes the sequence starting at a byte position and
//! returns the position of the next one, so callers drive the walk with an
//! explicit cursor value instead of mutating a shared index.
//!
//! Decoding trusts the lead byte: the sequence length comes from the
//! lead-byte table and the low six bits of each following byte are taken as
//! payload whether or not they are real trail bytes. This matches what the
//! converters have always produced for malformed input. Validation is a
//! separate concern, see [`classify_utf8`](crate::classify_utf8).

use crate::lead_byte::{utf16_length_from_utf8_byte_count, utf8_bytes_of_lead};

/// One decoded step of a UTF-8 walk.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeStep {
    /// A complete sequence of `len` bytes decoding to `value`.
    Scalar { value: u32, len: usize },
    /// The sequence starting with `lead` runs past the end of the buffer.
    ///
    /// Always the last step of a walk.
    Truncated { lead: u8 },
}

impl DecodeStep {
    /// UTF-16 units this step produces when transcoded.
    #[inline]
    pub fn utf16_units(self) -> usize {
        match self {
            DecodeStep::Scalar { len, .. } => utf16_length_from_utf8_byte_count(len),
            DecodeStep::Truncated { .. } => 1,
        }
    }
}

/// Payload bits of a trail byte.
#[inline]
fn trail_value(b: u8) -> u32 {
    u32::from(b & 0b0011_1111)
}

/// Decode the sequence starting at `pos`.
///
/// Returns the step and the cursor for the following sequence, or `None`
/// once `pos` has reached the end of `source`. After a
/// [`DecodeStep::Truncated`] step the returned cursor is `source.len()`.
pub fn decode_utf8_at(source: &[u8], pos: usize) -> Option<(DecodeStep, usize)> {
    let lead = *source.get(pos)?;
    let byte_count = utf8_bytes_of_lead(lead);

    let Some(seq) = source.get(pos..pos + byte_count) else {
        return Some((DecodeStep::Truncated { lead }, source.len()));
    };

    let lead_value = u32::from(lead);
    let value = match *seq {
        [_] => lead_value,
        [_, b1] => ((lead_value & 0x1F) << 6) + trail_value(b1),
        [_, b1, b2] => ((lead_value & 0x0F) << 12) + (trail_value(b1) << 6) + trail_value(b2),
        [_, b1, b2, b3] => {
            ((lead_value & 0x07) << 18)
                + (trail_value(b1) << 12)
                + (trail_value(b2) << 6)
                + trail_value(b3)
        }
        // The table never yields more than four bytes.
        _ => lead_value,
    };

    Some((
        DecodeStep::Scalar {
            value,
            len: byte_count,
        },
        pos + byte_count,
    ))
}

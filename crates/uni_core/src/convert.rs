//! Transcoding into caller-supplied buffers.
//!
//! The bounded converters check each sequence against the destination
//! before writing any of it. On overflow they return
//! [`TranscodeError::OutOfBounds`]; everything written up to that point is
//! a complete conversion of the input before the failing sequence.
//!
//! # Truncated input
//!
//! When the last UTF-8 sequence of the source is cut short, its lead byte
//! is copied through as one code unit (if there is room) and decoding
//! stops. This is policy, not an error.
//!
//! # Bit layout
//!
//! | Code point          | UTF-8                                 | UTF-16          |
//! |---------------------|---------------------------------------|-----------------|
//! | `0x0000..0x0080`    | `0xxxxxxx`                            | 1 unit          |
//! | `0x0080..0x0800`    | `110xxxxx 10xxxxxx`                   | 1 unit          |
//! | `0x0800..0x10000`   | `1110xxxx 10xxxxxx 10xxxxxx`          | 1 unit          |
//! | `0x10000..=0x10FFFF`| `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx` | surrogate pair  |

#![allow(
    clippy::cast_possible_truncation,
    reason = "UTF bit packing deliberately keeps only the low bits of each unit"
)]

use crate::decode::{decode_utf8_at, DecodeStep};
use crate::error::{Encoding, TranscodeError};
use crate::lead_byte::{
    utf16_length_from_utf8_byte_count, utf8_length_of_code_point, SUPPLEMENTAL_PLANE_FIRST,
    SURROGATE_LEAD_FIRST, SURROGATE_TRAIL_FIRST, SURROGATE_TRAIL_LAST, UTF8_MAX_BYTES,
};

/// Whether [`utf8_from_utf16`] appends a `0x00` after its output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// Never write past the converted bytes.
    #[default]
    Never,
    /// Write a `0x00` after the converted bytes when the destination has
    /// room for it. Exact-capacity destinations never receive one.
    IfRoom,
}

fn out_of_bounds(
    target: Encoding,
    written: usize,
    needed: usize,
    capacity: usize,
) -> TranscodeError {
    TranscodeError::OutOfBounds {
        target,
        written,
        required: written + needed,
        capacity,
    }
}

/// Encode `cp` into `out`, which must be exactly
/// [`utf8_length_of_code_point`] bytes long.
fn encode_utf8(cp: u32, out: &mut [u8]) {
    match out {
        [b0] => *b0 = cp as u8,
        [b0, b1] => {
            *b0 = (0xC0 | (cp >> 6)) as u8;
            *b1 = (0x80 | (cp & 0x3F)) as u8;
        }
        [b0, b1, b2] => {
            *b0 = (0xE0 | (cp >> 12)) as u8;
            *b1 = (0x80 | ((cp >> 6) & 0x3F)) as u8;
            *b2 = (0x80 | (cp & 0x3F)) as u8;
        }
        [b0, b1, b2, b3] => {
            *b0 = (0xF0 | (cp >> 18)) as u8;
            *b1 = (0x80 | ((cp >> 12) & 0x3F)) as u8;
            *b2 = (0x80 | ((cp >> 6) & 0x3F)) as u8;
            *b3 = (0x80 | (cp & 0x3F)) as u8;
        }
        _ => {}
    }
}

/// Split a supplementary-plane value into a lead and trail surrogate.
///
/// Values below the supplementary plane only reach here from malformed
/// 4-byte input; they wrap the same way unsigned arithmetic always has.
#[inline]
fn surrogate_pair(value: u32) -> [u16; 2] {
    [
        ((value.wrapping_sub(SUPPLEMENTAL_PLANE_FIRST) >> 10) + SURROGATE_LEAD_FIRST) as u16,
        ((value & 0x3FF) + SURROGATE_TRAIL_FIRST) as u16,
    ]
}

/// Convert UTF-16 units to UTF-8.
///
/// Conversion stops at the first zero unit or the end of `source`. Every
/// unit in `0xD800..=0xDFFF` starts a surrogate pair and is combined with
/// the unit after it; a pair cut off by the end of `source` combines with
/// zero. Returns the number of bytes written, which always equals
/// [`utf8_length`](crate::utf8_length) of the same source.
///
/// With [`Terminator::IfRoom`], a `0x00` is written after the output when
/// `dest` is longer than it. The terminator is not counted.
pub fn utf8_from_utf16(
    source: &[u16],
    dest: &mut [u8],
    terminator: Terminator,
) -> Result<usize, TranscodeError> {
    let mut k = 0;
    let mut i = 0;
    while let Some(&unit) = source.get(i) {
        if unit == 0 {
            break;
        }
        let uch = u32::from(unit);
        let cp = if (SURROGATE_LEAD_FIRST..=SURROGATE_TRAIL_LAST).contains(&uch) {
            i += 1;
            let trail = source.get(i).map_or(0, |&t| u32::from(t));
            SUPPLEMENTAL_PLANE_FIRST + ((uch & 0x3FF) << 10) + (trail & 0x3FF)
        } else {
            uch
        };

        let len = utf8_length_of_code_point(cp);
        let Some(out) = dest.get_mut(k..k + len) else {
            return Err(out_of_bounds(Encoding::Utf8, k, len, dest.len()));
        };
        encode_utf8(cp, out);
        k += len;
        i += 1;
    }

    if terminator == Terminator::IfRoom {
        if let Some(nul) = dest.get_mut(k) {
            *nul = 0;
        }
    }
    Ok(k)
}

/// Encode one code point as UTF-8 followed by a `0x00` terminator.
///
/// Returns the number of bytes written, excluding the terminator. Values
/// above U+10FFFF are packed into 4 bytes with their high bits dropped.
pub fn utf8_from_utf32_char(cp: u32, dest: &mut [u8; UTF8_MAX_BYTES + 1]) -> usize {
    let len = utf8_length_of_code_point(cp);
    let (out, rest) = dest.split_at_mut(len);
    encode_utf8(cp, out);
    if let Some(nul) = rest.first_mut() {
        *nul = 0;
    }
    len
}

/// Convert UTF-8 to UTF-16 units.
///
/// Returns the number of units written, which always equals
/// [`utf16_length`](crate::utf16_length) of the same source when `dest` is
/// large enough.
pub fn utf16_from_utf8(source: &[u8], dest: &mut [u16]) -> Result<usize, TranscodeError> {
    let mut written = 0;
    let mut pos = 0;
    while let Some((step, next)) = decode_utf8_at(source, pos) {
        match step {
            DecodeStep::Truncated { lead } => {
                if let Some(unit) = dest.get_mut(written) {
                    *unit = u16::from(lead);
                    written += 1;
                }
                break;
            }
            DecodeStep::Scalar { value, len } => {
                let needed = utf16_length_from_utf8_byte_count(len);
                let Some(out) = dest.get_mut(written..written + needed) else {
                    return Err(out_of_bounds(Encoding::Utf16, written, needed, dest.len()));
                };
                match out {
                    [unit] => *unit = value as u16,
                    [lead, trail] => [*lead, *trail] = surrogate_pair(value),
                    _ => {}
                }
                written += needed;
            }
        }
        pos = next;
    }
    Ok(written)
}

/// Convert UTF-8 to UTF-32 units, one per sequence.
///
/// Returns the number of units written, which always equals
/// [`utf32_length`](crate::utf32_length) of the same source when `dest` is
/// large enough.
pub fn utf32_from_utf8(source: &[u8], dest: &mut [u32]) -> Result<usize, TranscodeError> {
    let mut written = 0;
    let mut pos = 0;
    while let Some((step, next)) = decode_utf8_at(source, pos) {
        let value = match step {
            DecodeStep::Truncated { lead } => {
                if let Some(unit) = dest.get_mut(written) {
                    *unit = u32::from(lead);
                    written += 1;
                }
                break;
            }
            DecodeStep::Scalar { value, .. } => value,
        };
        let Some(unit) = dest.get_mut(written) else {
            return Err(out_of_bounds(Encoding::Utf32, written, 1, dest.len()));
        };
        *unit = value;
        written += 1;
        pos = next;
    }
    Ok(written)
}

/// Encode one code point as UTF-16. Returns the number of units written.
pub fn utf16_from_utf32_char(cp: u32, dest: &mut [u16; 2]) -> usize {
    if cp < SUPPLEMENTAL_PLANE_FIRST {
        dest[0] = cp as u16;
        1
    } else {
        *dest = surrogate_pair(cp);
        2
    }
}

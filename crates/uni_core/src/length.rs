//! Destination sizing.
//!
//! Each estimator returns exactly the number of units its converter writes
//! for the same source, so a destination of that length never overflows.
//! The estimators are total: any input, however malformed, has a length.

use crate::decode::decode_utf8_at;
use crate::lead_byte::{SURROGATE_LEAD_FIRST, SURROGATE_TRAIL_LAST};

/// UTF-8 bytes needed to encode `source`.
///
/// Stops at the first zero unit. Any surrogate unit is taken to start a pair
/// and accounts for 4 bytes and two input units, even when the pair is cut
/// off by the end of the buffer.
pub fn utf8_length(source: &[u16]) -> usize {
    let mut len = 0;
    let mut i = 0;
    while let Some(&unit) = source.get(i) {
        if unit == 0 {
            break;
        }
        let uch = u32::from(unit);
        if uch < 0x80 {
            len += 1;
        } else if uch < 0x800 {
            len += 2;
        } else if (SURROGATE_LEAD_FIRST..=SURROGATE_TRAIL_LAST).contains(&uch) {
            len += 4;
            i += 1;
        } else {
            len += 3;
        }
        i += 1;
    }
    len
}

/// UTF-16 units needed to decode `source`.
///
/// A sequence whose declared length runs past the end of `source` counts as
/// a single unit.
pub fn utf16_length(source: &[u8]) -> usize {
    let mut len = 0;
    let mut pos = 0;
    while let Some((step, next)) = decode_utf8_at(source, pos) {
        len += step.utf16_units();
        pos = next;
    }
    len
}

/// UTF-32 units (one per sequence) needed to decode `source`.
pub fn utf32_length(source: &[u8]) -> usize {
    let mut len = 0;
    let mut pos = 0;
    while let Some((_, next)) = decode_utf8_at(source, pos) {
        len += 1;
        pos = next;
    }
    len
}

#[cfg(test)]
mod tests;

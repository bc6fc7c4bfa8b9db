//! Replacement of invalid UTF-8.

use crate::classify::Utf8Units;
use crate::lead_byte::REPLACEMENT_UTF8;

/// Copy `text`, replacing every invalid byte with U+FFFD.
///
/// The walk follows [`Utf8Units`]: a valid sequence is copied whole, an
/// invalid one becomes a single replacement character and the walk moves on
/// by one byte. A non-character such as `U+FFFE` is therefore replaced once
/// per byte. The result is valid by [`classify_utf8`](crate::classify_utf8)
/// and running it through again changes nothing.
pub fn fix_invalid_utf8(text: &[u8]) -> String {
    let mut fixed = Vec::with_capacity(text.len());
    for unit in Utf8Units::new(text) {
        let valid = if unit.status.is_valid() {
            text.get(unit.pos..unit.pos + unit.status.width())
        } else {
            None
        };
        match valid {
            Some(seq) => fixed.extend_from_slice(seq),
            None => fixed.extend_from_slice(&REPLACEMENT_UTF8),
        }
    }
    // Every classifier-valid sequence is also valid to `str`, so the lossy
    // arm only runs if the two ever disagree.
    match String::from_utf8(fixed) {
        Ok(fixed) => fixed,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

/// Returns `true` if [`fix_invalid_utf8`] would change `text`.
pub fn needs_fixing(text: &[u8]) -> bool {
    !crate::utf8_is_valid(text)
}

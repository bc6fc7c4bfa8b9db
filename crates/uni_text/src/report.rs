//! UTF-8 validation reports.
//!
//! [`scan_invalid`] lists the invalid sequences in a buffer with their
//! positions, so an editor can mark them. [`sanitize`] repairs the buffer
//! and says how much it had to replace.

use uni_core::Utf8Units;

/// Why a sequence was reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidKind {
    /// A byte that does not belong to any well-formed sequence: a bad
    /// lead, a missing trail, an overlong form, a surrogate, a value past
    /// U+10FFFF, or a sequence cut off by the end of the buffer.
    Malformed,
    /// A well-formed encoding of a non-character (`U+FFFE`, `U+FFFF`,
    /// `U+FDD0..=U+FDEF`, `U+nFFFE`, `U+nFFFF`).
    NonCharacter,
}

/// One invalid sequence found by [`scan_invalid`].
///
/// Carries the byte position and byte length of the problematic sequence:
/// 1 for a malformed byte, 3 or 4 for a non-character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvalidSequence {
    pub kind: InvalidKind,
    pub pos: usize,
    pub len: usize,
}

/// Find every invalid sequence in `bytes`.
///
/// A non-character is reported once, covering all of its bytes. Each
/// malformed byte is reported on its own.
#[tracing::instrument(level = "trace", skip_all, fields(bytes = bytes.len()))]
pub fn scan_invalid(bytes: &[u8]) -> Vec<InvalidSequence> {
    let mut issues = Vec::new();
    // End of the last non-character; its inner bytes are not reported again.
    let mut covered = 0;
    for unit in Utf8Units::new(bytes) {
        if unit.status.is_valid() || unit.pos < covered {
            continue;
        }
        let len = unit.status.width();
        let kind = if len > 1 {
            InvalidKind::NonCharacter
        } else {
            InvalidKind::Malformed
        };
        issues.push(InvalidSequence {
            kind,
            pos: unit.pos,
            len,
        });
        covered = unit.pos + len;
    }
    issues
}

/// Output of [`sanitize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sanitized {
    /// The repaired text.
    pub text: String,
    /// Number of U+FFFD characters inserted.
    pub replaced: usize,
}

impl Sanitized {
    /// Returns `true` if the input was already valid.
    pub fn is_unchanged(&self) -> bool {
        self.replaced == 0
    }
}

/// Replace invalid bytes in `bytes` with U+FFFD, counting replacements.
///
/// Produces the same text as [`uni_core::fix_invalid_utf8`].
#[tracing::instrument(level = "trace", skip_all, fields(bytes = bytes.len()))]
pub fn sanitize(bytes: &[u8]) -> Sanitized {
    let replaced = Utf8Units::new(bytes)
        .filter(|unit| !unit.status.is_valid())
        .count();
    let text = uni_core::fix_invalid_utf8(bytes);
    if replaced > 0 {
        tracing::debug!(
            replaced,
            grown_by = text.len() - bytes.len(),
            "replaced invalid UTF-8 with U+FFFD"
        );
    }
    Sanitized { text, replaced }
}

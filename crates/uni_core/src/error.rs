//! Conversion failures.
//!
//! The only failure a converter reports is running out of destination
//! space. Truncated or malformed input is handled by policy and never
//! surfaces here.

use std::fmt;

/// A Unicode encoding form, named by the code units it produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    Utf8,
    Utf16,
    Utf32,
}

impl Encoding {
    /// Size of one code unit in bytes.
    pub const fn unit_size(self) -> usize {
        match self {
            Encoding::Utf8 => 1,
            Encoding::Utf16 => 2,
            Encoding::Utf32 => 4,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16 => "UTF-16",
            Encoding::Utf32 => "UTF-32",
        })
    }
}

/// Failure of a bounded converter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TranscodeError {
    /// The next sequence would not fit in the destination.
    ///
    /// Nothing of that sequence was written. The first `written` units of
    /// the destination hold the complete conversion of the input before it.
    #[error(
        "{target} conversion attempted write beyond end of destination \
         (needed {required} units, capacity {capacity})"
    )]
    OutOfBounds {
        /// Encoding being written.
        target: Encoding,
        /// Units successfully written before the failure.
        written: usize,
        /// Units the failing sequence needed in total (`written` plus its own).
        required: usize,
        /// Destination length.
        capacity: usize,
    },
}

impl TranscodeError {
    /// Units written before the conversion stopped.
    pub fn written(&self) -> usize {
        match self {
            TranscodeError::OutOfBounds { written, .. } => *written,
        }
    }
}

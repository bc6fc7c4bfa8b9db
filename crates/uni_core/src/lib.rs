//! Low-level Unicode transcoding for text buffers (standalone, zero `uni_*` dependencies).
//!
//! Converts between UTF-8, UTF-16 and UTF-32 code-unit buffers, sizes
//! destinations before conversion, classifies UTF-8 sequences and repairs
//! malformed UTF-8.
//!
//! # Buffers
//!
//! Every converter writes into a caller-supplied `&mut [T]` and returns the
//! number of units written. Destinations are sized with the matching length
//! estimator:
//!
//! | Conversion        | Estimator        | Converter          |
//! |-------------------|------------------|--------------------|
//! | UTF-16 -> UTF-8   | [`utf8_length`]  | [`utf8_from_utf16`]|
//! | UTF-8 -> UTF-16   | [`utf16_length`] | [`utf16_from_utf8`]|
//! | UTF-8 -> UTF-32   | [`utf32_length`] | [`utf32_from_utf8`]|
//!
//! A destination that is too small produces [`TranscodeError::OutOfBounds`];
//! nothing is ever written past its end.
//!
//! # Validity
//!
//! The converters decode by declared sequence length and do not validate.
//! Use [`classify_utf8`] (or [`Utf8Units`]) to find malformed sequences and
//! [`fix_invalid_utf8`] to replace them with U+FFFD.

mod classify;
mod convert;
mod decode;
mod error;
mod lead_byte;
mod length;
mod sanitize;

pub use classify::{
    classify_utf8, draw_width_utf8, utf8_is_nel, utf8_is_separator, utf8_is_valid, Utf8Status,
    Utf8Unit, Utf8Units, UTF8_NEL_LENGTH, UTF8_SEPARATOR_LENGTH,
};
pub use convert::{
    utf16_from_utf32_char, utf16_from_utf8, utf32_from_utf8, utf8_from_utf16,
    utf8_from_utf32_char, Terminator,
};
pub use decode::{decode_utf8_at, DecodeStep};
pub use error::{Encoding, TranscodeError};
pub use lead_byte::{
    utf16_char_length, utf16_length_from_utf8_byte_count, utf8_bytes_of_lead, utf8_is_ascii,
    utf8_is_trail_byte, utf8_length_of_code_point, MAX_UNICODE, REPLACEMENT_CHARACTER,
    REPLACEMENT_UTF8, SUPPLEMENTAL_PLANE_FIRST, SURROGATE_LEAD_FIRST, SURROGATE_LEAD_LAST,
    SURROGATE_TRAIL_FIRST, SURROGATE_TRAIL_LAST, UTF8_BYTES_OF_LEAD, UTF8_MAX_BYTES,
};
pub use length::{utf16_length, utf32_length, utf8_length};
pub use sanitize::{fix_invalid_utf8, needs_fixing};

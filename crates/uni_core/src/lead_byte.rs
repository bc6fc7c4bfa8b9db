//! Lead-byte table and code-unit classification helpers.
//!
//! The table maps a UTF-8 lead byte to the number of bytes a well-formed
//! sequence starting with it occupies. Bytes that can never start a
//! sequence (`0x80..=0xC1`, `0xF5..=0xFF`) map to 1, so a walker that trusts
//! the table advances by exactly one byte over garbage.
//!
//! The table says nothing about trail bytes. Whether a sequence is actually
//! well-formed is decided by [`classify_utf8`](crate::classify_utf8).

/// Longest UTF-8 sequence for a Unicode scalar value.
pub const UTF8_MAX_BYTES: usize = 4;

pub const SURROGATE_LEAD_FIRST: u32 = 0xD800;
pub const SURROGATE_LEAD_LAST: u32 = 0xDBFF;
pub const SURROGATE_TRAIL_FIRST: u32 = 0xDC00;
pub const SURROGATE_TRAIL_LAST: u32 = 0xDFFF;

/// First code point outside the Basic Multilingual Plane.
pub const SUPPLEMENTAL_PLANE_FIRST: u32 = 0x1_0000;

/// Last Unicode code point.
pub const MAX_UNICODE: u32 = 0x10_FFFF;

/// U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

/// U+FFFD encoded as UTF-8.
pub const REPLACEMENT_UTF8: [u8; 3] = [0xEF, 0xBF, 0xBD];

/// Expected UTF-8 sequence length, indexed by lead byte.
#[rustfmt::skip]
pub static UTF8_BYTES_OF_LEAD: [u8; 256] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 00 - 0F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 10 - 1F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 20 - 2F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 30 - 3F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 40 - 4F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 50 - 5F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 60 - 6F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 70 - 7F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 80 - 8F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 90 - 9F
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // A0 - AF
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // B0 - BF
    1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // C0 - CF
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, // D0 - DF
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, // E0 - EF
    4, 4, 4, 4, 4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // F0 - FF
];

/// Expected length of the sequence introduced by `lead`.
#[inline]
pub fn utf8_bytes_of_lead(lead: u8) -> usize {
    usize::from(UTF8_BYTES_OF_LEAD[usize::from(lead)])
}

/// Returns `true` for `0b10xx_xxxx` continuation bytes.
#[inline]
pub const fn utf8_is_trail_byte(b: u8) -> bool {
    (b & 0xC0) == 0x80
}

#[inline]
pub const fn utf8_is_ascii(b: u8) -> bool {
    b < 0x80
}

/// UTF-16 units produced by a UTF-8 sequence of `byte_count` bytes.
#[inline]
pub const fn utf16_length_from_utf8_byte_count(byte_count: usize) -> usize {
    if byte_count < 4 {
        1
    } else {
        2
    }
}

/// UTF-16 units occupied by the character starting with `unit`.
///
/// A lead surrogate announces a pair; everything else, including a stray
/// trail surrogate, stands alone.
#[inline]
pub fn utf16_char_length(unit: u16) -> usize {
    if (SURROGATE_LEAD_FIRST..=SURROGATE_LEAD_LAST).contains(&u32::from(unit)) {
        2
    } else {
        1
    }
}

/// UTF-8 bytes needed to encode `cp`.
///
/// Values above [`MAX_UNICODE`] are sized as 4 bytes, matching what
/// [`utf8_from_utf32_char`](crate::utf8_from_utf32_char) writes for them.
#[inline]
pub const fn utf8_length_of_code_point(cp: u32) -> usize {
    if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < SUPPLEMENTAL_PLANE_FIRST {
        3
    } else {
        4
    }
}

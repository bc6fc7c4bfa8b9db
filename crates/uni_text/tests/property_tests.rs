//! Property-based tests for the transcoding pipeline.
//!
//! These tests use proptest to generate text and raw byte buffers and verify:
//! 1. Round trips: UTF-8 -> UTF-16 -> UTF-8 and UTF-8 -> UTF-32 -> UTF-8
//! 2. Sizing: every estimator equals the units its converter writes
//! 3. Repair: sanitizing is idempotent and leaves no invalid sequences

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use uni_core::{
    utf16_from_utf8, utf16_length, utf32_from_utf8, utf32_length, utf8_from_utf16, utf8_length,
    Terminator, TranscodeError,
};
use uni_text::{
    sanitize, scan_invalid, utf16_from_str_bytes, utf32_from_str_bytes, utf8_from_utf16_units,
    utf8_from_utf32_units,
};

// -- Strategies --

/// Text without U+0000, which ends UTF-16 input early.
fn text_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        any::<char>().prop_filter("no NUL", |c| *c != '\0'),
        0..48,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Bytes biased toward UTF-8 lead and trail bytes.
fn bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![
            any::<u8>(),
            0x80..=0xBFu8,
            0xC2..=0xF4u8,
            Just(0xED),
            Just(0xEF),
        ],
        0..96,
    )
}

proptest! {
    // -- Round trips --

    #[test]
    fn utf16_round_trip(text in text_strategy()) {
        let units = utf16_from_str_bytes(text.as_bytes()).unwrap();
        let expected: Vec<u16> = text.encode_utf16().collect();
        prop_assert_eq!(&units, &expected);
        prop_assert_eq!(utf8_from_utf16_units(&units).unwrap(), text.as_bytes());
    }

    #[test]
    fn utf32_round_trip(text in text_strategy()) {
        let cps = utf32_from_str_bytes(text.as_bytes()).unwrap();
        let expected: Vec<u32> = text.chars().map(u32::from).collect();
        prop_assert_eq!(&cps, &expected);
        prop_assert_eq!(utf8_from_utf32_units(&cps), text.as_bytes());
    }

    // -- Sizing --

    #[test]
    fn utf8_length_equals_bytes_written(units in proptest::collection::vec(any::<u16>(), 0..48)) {
        let len = utf8_length(&units);
        let mut dest = vec![0u8; len];
        prop_assert_eq!(utf8_from_utf16(&units, &mut dest, Terminator::Never), Ok(len));
    }

    #[test]
    fn utf16_length_equals_units_written(bytes in bytes_strategy()) {
        let len = utf16_length(&bytes);
        let mut dest = vec![0u16; len];
        prop_assert_eq!(utf16_from_utf8(&bytes, &mut dest), Ok(len));
    }

    #[test]
    fn utf32_length_equals_units_written(bytes in bytes_strategy()) {
        let len = utf32_length(&bytes);
        let mut dest = vec![0u32; len];
        prop_assert_eq!(utf32_from_utf8(&bytes, &mut dest), Ok(len));
    }

    #[test]
    fn short_destination_reports_overflow(
        text in text_strategy().prop_filter("non-empty", |t| !t.is_empty())
    ) {
        let bytes = text.as_bytes();
        let len = utf16_length(bytes);
        let mut dest = vec![0u16; len - 1];
        let result = utf16_from_utf8(bytes, &mut dest);
        let Err(TranscodeError::OutOfBounds { written, capacity, .. }) = result else {
            return Err(TestCaseError::fail(format!("expected overflow, got {:?}", result)));
        };
        prop_assert_eq!(capacity, len - 1);
        // Everything before the failing sequence was converted.
        let expected: Vec<u16> = text.encode_utf16().take(written).collect();
        prop_assert_eq!(&dest[..written], &expected[..]);
    }

    // -- Repair --

    #[test]
    fn sanitized_text_is_clean_and_stable(bytes in bytes_strategy()) {
        let once = sanitize(&bytes);
        prop_assert!(scan_invalid(once.text.as_bytes()).is_empty());
        prop_assert_eq!(once.replaced == 0, scan_invalid(&bytes).is_empty());
        let twice = sanitize(once.text.as_bytes());
        prop_assert!(twice.is_unchanged());
        prop_assert_eq!(twice.text, once.text);
    }
}

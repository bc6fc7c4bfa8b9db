use super::*;

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

// === utf8_length ===

#[test]
fn utf8_length_of_empty() {
    assert_eq!(utf8_length(&[]), 0);
}

#[test]
fn utf8_length_matches_std_for_valid_text() {
    let cases = [
        "",
        "abc",
        "caf\u{E9}",
        "\u{20AC}100",
        "\u{1F600}\u{1F601}",
        "a\u{7FF}\u{800}\u{FFFF}",
    ];
    for s in cases {
        assert_eq!(utf8_length(&units(s)), s.len(), "{s:?}");
    }
}

#[test]
fn utf8_length_of_surrogate_pair() {
    assert_eq!(utf8_length(&[0xD83D, 0xDE00]), 4);
}

#[test]
fn utf8_length_stops_at_zero_unit() {
    assert_eq!(utf8_length(&[0x41, 0x42, 0x0000, 0x43]), 2);
    assert_eq!(utf8_length(&[0x0000, 0x43]), 0);
}

#[test]
fn utf8_length_counts_cut_off_pair_as_four() {
    assert_eq!(utf8_length(&[0x41, 0xD83D]), 5);
}

#[test]
fn utf8_length_treats_lone_trail_as_pair_start() {
    // A trail surrogate swallows the following unit, as a lead would.
    assert_eq!(utf8_length(&[0xDE00, 0x41]), 4);
}

// === utf16_length ===

#[test]
fn utf16_length_of_mixed_widths() {
    assert_eq!(utf16_length(&[0x41, 0xC3, 0xA9, 0xE2, 0x82, 0xAC]), 3);
}

#[test]
fn utf16_length_counts_supplementary_as_two() {
    assert_eq!(utf16_length(&[0xF0, 0x9F, 0x98, 0x80]), 2);
}

#[test]
fn utf16_length_matches_std_for_valid_text() {
    for s in ["", "abc", "caf\u{E9}", "\u{20AC}100", "x\u{1F600}y", "\u{10FFFF}"] {
        assert_eq!(utf16_length(s.as_bytes()), s.encode_utf16().count(), "{s:?}");
    }
}

#[test]
fn utf16_length_counts_truncated_tail_as_one() {
    assert_eq!(utf16_length(&[0xE2, 0x82]), 1);
    assert_eq!(utf16_length(&[0x41, 0xF0, 0x9F, 0x98]), 2);
}

#[test]
fn utf16_length_counts_invalid_bytes_individually() {
    assert_eq!(utf16_length(&[0x80, 0xBF, 0xFF]), 3);
}

// === utf32_length ===

#[test]
fn utf32_length_counts_sequences() {
    assert_eq!(utf32_length("A\u{E9}\u{20AC}\u{1F600}".as_bytes()), 4);
}

#[test]
fn utf32_length_counts_truncated_tail_as_one() {
    assert_eq!(utf32_length(&[0x41, 0xF0, 0x9F]), 2);
}

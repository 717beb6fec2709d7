use super::*;
use pretty_assertions::assert_eq;

fn scalars(decoded: &Decoded) -> Vec<u32> {
    decoded.entries().iter().map(|e| e.scalar).collect()
}

fn offsets(decoded: &Decoded) -> Vec<u32> {
    decoded.entries().iter().map(|e| e.byte_offset).collect()
}

fn decode_default(raw: &[u8]) -> Decoded {
    decode(raw, None, &DecodeLimits::default())
}

fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn utf16be(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_be_bytes).collect()
}

// === Encoding Detection ===

#[test]
fn detects_utf8_bom() {
    assert_eq!(
        detect_encoding(b"\xEF\xBB\xBFa", None, 1024),
        (Encoding::Utf8, 3)
    );
}

#[test]
fn detects_utf16_boms() {
    assert_eq!(detect_encoding(b"\xFF\xFEa\0", None, 1024), (Encoding::Utf16Le, 2));
    assert_eq!(detect_encoding(b"\xFE\xFF\0a", None, 1024), (Encoding::Utf16Be, 2));
}

#[test]
fn bom_beats_charset_hint() {
    assert_eq!(
        detect_encoding(b"\xFF\xFEa\0", Some("utf-8"), 1024),
        (Encoding::Utf16Le, 2)
    );
}

#[test]
fn charset_hint_used_without_bom() {
    assert_eq!(
        detect_encoding(b"a\0", Some(" UTF-16LE "), 1024),
        (Encoding::Utf16Le, 0)
    );
    assert_eq!(
        detect_encoding(b"\0a", Some("utf-16be"), 1024),
        (Encoding::Utf16Be, 0)
    );
}

#[test]
fn unknown_hint_falls_back_to_utf8() {
    assert_eq!(
        detect_encoding(b"a", Some("koi8-r"), 1024),
        (Encoding::Utf8, 0)
    );
}

#[test]
fn encoding_labels() {
    assert_eq!(Encoding::from_label("UTF8"), Some(Encoding::Utf8));
    assert_eq!(Encoding::from_label("unicode-1-1-utf-8"), Some(Encoding::Utf8));
    assert_eq!(Encoding::from_label("utf-16"), Some(Encoding::Utf16Le));
    assert_eq!(Encoding::from_label("latin1"), None);
    assert_eq!(Encoding::Utf16Be.to_string(), "utf-16be");
}

// === @charset Extraction ===

#[test]
fn extracts_charset_label() {
    assert_eq!(
        extract_charset(b"@charset \"UTF-8\"; a{}"),
        Some(&b"UTF-8"[..])
    );
}

#[test]
fn extracts_charset_after_other_at_signs() {
    assert_eq!(
        extract_charset(b"@media x {} @charset \"utf-8\";"),
        Some(&b"utf-8"[..])
    );
}

#[test]
fn charset_without_closing_quote_is_ignored() {
    assert_eq!(extract_charset(b"@charset \"utf-8"), None);
}

#[test]
fn overlong_charset_label_is_skipped() {
    let long = format!("@charset \"{}\";", "x".repeat(40));
    assert_eq!(extract_charset(long.as_bytes()), None);
}

#[test]
fn charset_rule_does_not_change_default() {
    let decoded = decode_default(b"@charset \"utf-8\"; a");
    assert_eq!(decoded.encoding(), Encoding::Utf8);
    assert_eq!(decoded.len(), 19);
}

// === UTF-8 ===

#[test]
fn decodes_multibyte_utf8_with_offsets() {
    let decoded = decode_default("aé☺😀".as_bytes());
    assert_eq!(scalars(&decoded), vec![0x61, 0xE9, 0x263A, 0x1F600]);
    assert_eq!(offsets(&decoded), vec![0, 1, 3, 6]);
    assert_eq!(decoded.byte_end(), 10);
}

#[test]
fn utf8_bom_is_skipped_but_offsets_stay_absolute() {
    let decoded = decode_default(b"\xEF\xBB\xBFab");
    assert_eq!(scalars(&decoded), vec![0x61, 0x62]);
    assert_eq!(offsets(&decoded), vec![3, 4]);
    assert_eq!(decoded.bom_len(), 3);
}

#[test]
fn invalid_lead_byte_advances_one_byte() {
    // 0x80 is a stray continuation byte; 0xC3 lacks its continuation.
    let decoded = decode_default(b"\x80a\xC3b");
    assert_eq!(scalars(&decoded), vec![REPLACEMENT, 0x61, REPLACEMENT, 0x62]);
    assert_eq!(offsets(&decoded), vec![0, 1, 2, 3]);
}

#[test]
fn overlong_encodings_are_replaced() {
    // Overlong '/' in 2, 3 and 4 bytes.
    let decoded = decode_default(b"\xC0\xAF\xE0\x80\xAF\xF0\x80\x80\xAF");
    assert_eq!(scalars(&decoded), vec![REPLACEMENT; 3]);
    assert_eq!(offsets(&decoded), vec![0, 2, 5]);
}

#[test]
fn encoded_surrogates_are_replaced() {
    let decoded = decode_default(b"\xED\xA0\x80");
    assert_eq!(scalars(&decoded), vec![REPLACEMENT]);
}

#[test]
fn out_of_range_code_points_are_replaced() {
    let decoded = decode_default(b"\xF4\x90\x80\x80");
    assert_eq!(scalars(&decoded), vec![REPLACEMENT]);
}

// === UTF-16 ===

#[test]
fn decodes_utf16le_with_bom() {
    let mut raw = vec![0xFF, 0xFE];
    raw.extend(utf16le("a😀"));
    let decoded = decode_default(&raw);
    assert_eq!(decoded.encoding(), Encoding::Utf16Le);
    assert_eq!(scalars(&decoded), vec![0x61, 0x1F600]);
    assert_eq!(offsets(&decoded), vec![2, 4]);
    assert_eq!(decoded.byte_end(), 8);
}

#[test]
fn decodes_utf16be_with_bom() {
    let mut raw = vec![0xFE, 0xFF];
    raw.extend(utf16be("x{}"));
    let decoded = decode_default(&raw);
    assert_eq!(decoded.encoding(), Encoding::Utf16Be);
    assert_eq!(scalars(&decoded), vec![0x78, 0x7B, 0x7D]);
}

#[test]
fn unpaired_surrogates_are_replaced() {
    // high + 'a', lone low, trailing high
    let raw = [0xFF, 0xFE, 0x00, 0xD8, 0x61, 0x00, 0x00, 0xDC, 0x00, 0xD8];
    let decoded = decode_default(&raw);
    assert_eq!(
        scalars(&decoded),
        vec![REPLACEMENT, 0x61, REPLACEMENT, REPLACEMENT]
    );
}

#[test]
fn dangling_odd_byte_is_replaced() {
    let raw = [0xFF, 0xFE, 0x61, 0x00, 0x62];
    let decoded = decode_default(&raw);
    assert_eq!(scalars(&decoded), vec![0x61, REPLACEMENT]);
    assert_eq!(decoded.byte_end(), 5);
}

// === Normalization ===

#[test]
fn normalizes_newlines_and_nul() {
    let decoded = decode_default(b"a\r\nb\rc\x0Cd\0");
    assert_eq!(
        scalars(&decoded),
        vec![0x61, 0x0A, 0x62, 0x0A, 0x63, 0x0A, 0x64, REPLACEMENT]
    );
}

#[test]
fn crlf_keeps_cr_offset() {
    let decoded = decode_default(b"a\r\nb");
    assert_eq!(offsets(&decoded), vec![0, 1, 3]);
}

#[test]
fn normalization_applies_to_utf16() {
    let decoded = decode("a\r\n".as_bytes(), Some("utf-8"), &DecodeLimits::default());
    assert_eq!(scalars(&decoded), vec![0x61, 0x0A]);

    let raw = utf16le("a\r\nb");
    let decoded = decode(&raw, Some("utf-16le"), &DecodeLimits::default());
    assert_eq!(scalars(&decoded), vec![0x61, 0x0A, 0x62]);
    assert_eq!(offsets(&decoded), vec![0, 2, 6]);
}

#[test]
fn normalize_collapses_cr_run_pairwise() {
    let mut entries: Vec<DecodedEntry> = [0x0D, 0x0D, 0x0A]
        .iter()
        .zip(0..)
        .map(|(&scalar, offset)| DecodedEntry::new(scalar, offset))
        .collect();
    normalize(&mut entries);
    assert_eq!(
        entries,
        vec![DecodedEntry::new(0x0A, 0), DecodedEntry::new(0x0A, 1)]
    );
}

// === Failure and Limits ===

#[test]
fn empty_input_is_rejected() {
    let decoded = decode_default(b"");
    assert!(decoded.is_empty());
    assert_eq!(decoded.issue(), Some(DecodeIssue::EmptyInput));
}

#[test]
fn zero_capacity_is_rejected() {
    let limits = DecodeLimits {
        max_output_len: 0,
        ..DecodeLimits::default()
    };
    let decoded = decode(b"a", None, &limits);
    assert!(decoded.is_empty());
    assert_eq!(decoded.issue(), Some(DecodeIssue::ZeroCapacity));
}

#[test]
fn nul_flood_is_rejected() {
    let decoded = decode_default(&[0u8; 900]);
    assert!(decoded.is_empty());
    assert_eq!(
        decoded.issue(),
        Some(DecodeIssue::SuspiciousNulls { count: 900 })
    );
}

#[test]
fn nuls_under_threshold_are_normalized() {
    let decoded = decode_default(&[0u8; 10]);
    assert_eq!(decoded.len(), 10);
    assert!(decoded.entries().iter().all(|e| e.scalar == REPLACEMENT));
}

#[test]
fn repeated_bom_bytes_are_rejected() {
    let decoded = decode_default(b"ab\xFF\xFEcd");
    assert!(decoded.is_empty());
    assert_eq!(decoded.issue(), Some(DecodeIssue::RepeatedBomBytes { pos: 3 }));
}

#[test]
fn stacked_boms_are_rejected_after_first() {
    let decoded = decode_default(b"\xFF\xFE\xFF\xFEa\0");
    assert_eq!(decoded.issue(), Some(DecodeIssue::RepeatedBomBytes { pos: 3 }));
}

#[test]
fn utf16_text_with_adjacent_ff_fe_bytes_is_rejected() {
    // BOM, then U+FF01 U+30FE as little-endian code units.
    let decoded = decode_default(b"\xFF\xFE\x01\xFF\xFE\x30");
    assert!(decoded.is_empty());
    assert_eq!(decoded.encoding(), Encoding::Utf16Le);
    assert_eq!(decoded.issue(), Some(DecodeIssue::RepeatedBomBytes { pos: 4 }));
}

#[test]
fn genuine_utf16_ascii_passes_sniff() {
    let mut raw = vec![0xFF, 0xFE];
    raw.extend(utf16le(&"a{color:red}".repeat(100)));
    let decoded = decode_default(&raw);
    assert_eq!(decoded.issue(), None);
    assert_eq!(decoded.len(), 1200);
}

#[test]
fn input_ceiling_truncates() {
    let limits = DecodeLimits {
        max_input_len: 4,
        ..DecodeLimits::default()
    };
    let decoded = decode(b"abcdef", None, &limits);
    assert_eq!(decoded.len(), 4);
    assert!(decoded.is_truncated());
    assert_eq!(decoded.byte_end(), 4);
}

#[test]
fn output_ceiling_truncates() {
    let limits = DecodeLimits {
        max_output_len: 2,
        ..DecodeLimits::default()
    };
    let decoded = decode("é☺x".as_bytes(), None, &limits);
    assert_eq!(scalars(&decoded), vec![0xE9, 0x263A]);
    assert!(decoded.is_truncated());
    assert_eq!(decoded.byte_end(), 5);
}

#[test]
fn entry_as_char() {
    assert_eq!(DecodedEntry::new(0x263A, 0).as_char(), '☺');
    assert_eq!(DecodedEntry::new(0xD800, 0).as_char(), '\u{FFFD}');
}

use crate::classify::{is_hex_digit, is_whitespace};
use crate::cursor::Cursor;

/// Longest hex run an escape may contain.
const MAX_HEX_DIGITS: usize = 6;

/// Consume an escaped code point and return its value.
///
/// The backslash must already be consumed. Up to six hex digits are read,
/// plus one whitespace code point after them. A zero, surrogate or
/// out-of-range value decodes to U+FFFD while the whole literal sequence
/// stays consumed. Without hex digits the single next code point is the
/// value; at EOF the value is U+FFFD.
pub fn consume_escape(cursor: &mut Cursor<'_>) -> char {
    let first = cursor.current();
    if !is_hex_digit(first) {
        return match cursor.bump() {
            Some(entry) => entry.as_char(),
            None => char::REPLACEMENT_CHARACTER,
        };
    }

    let mut value = 0u32;
    for _ in 0..MAX_HEX_DIGITS {
        let Some(digit) = cursor.current().to_digit(16) else {
            break;
        };
        value = value * 16 + digit;
        cursor.bump();
    }
    if is_whitespace(cursor.current()) {
        cursor.bump();
    }

    match char::from_u32(value) {
        Some(c) if value != 0 => c,
        _ => char::REPLACEMENT_CHARACTER,
    }
}

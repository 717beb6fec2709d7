//! Single-code-point classification and the CSS lookahead checks built on it.
//!
//! Every predicate returns `false` for [`EOF_CHAR`](crate::cursor::EOF_CHAR)
//! except [`is_non_printable`], so lookahead past the end never extends a
//! construct.

/// Space, tab, line feed, carriage return or form feed.
///
/// CR and FF cannot survive normalization; they are still recognized so the
/// predicate is correct on unnormalized input.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C')
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline]
pub fn is_non_ascii(c: char) -> bool {
    !c.is_ascii()
}

/// Letter, non-ASCII or `_`.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    is_letter(c) || is_non_ascii(c) || c == '_'
}

/// Ident start, digit or `-`.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c) || c == '-'
}

/// Control characters that make an unquoted URL invalid.
#[inline]
pub fn is_non_printable(c: char) -> bool {
    matches!(c, '\0'..='\x08' | '\x0B' | '\x0E'..='\x1F' | '\x7F')
}

/// `true` if `first` and `second` form a valid escape: a backslash followed by
/// something other than a line feed or EOF.
#[inline]
pub fn is_valid_escape(first: char, second: char) -> bool {
    first == '\\' && second != '\n' && second != crate::cursor::EOF_CHAR
}

/// `true` if the three code points would start an ident sequence.
#[inline]
pub fn would_start_ident(first: char, second: char, third: char) -> bool {
    match first {
        '-' => is_ident_start(second) || second == '-' || is_valid_escape(second, third),
        '\\' => is_valid_escape(first, second),
        c => is_ident_start(c),
    }
}

/// `true` if the three code points would start a number.
#[inline]
pub fn starts_number(first: char, second: char, third: char) -> bool {
    match first {
        '+' | '-' => is_digit(second) || (second == '.' && is_digit(third)),
        '.' => is_digit(second),
        c => is_digit(c),
    }
}

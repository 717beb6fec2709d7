//! Cooked token values.
//!
//! A token only records where its text is. Cooking reads that text again
//! and produces what a parser wants: escapes resolved, delimiters dropped.
//!
//! ```text
//! entries[token.span] → cook() → String → Arena
//! ```
//!
//! Each tag has its own path:
//! - **ident, function**: the name, without the `(`
//! - **at-keyword, hash**: the name, without `@` or `#`
//! - **string, bad-string**: the contents, without quotes and line continuations
//! - **url**: the address, without `url(` and surrounding whitespace
//! - **dimension**: the unit
//! - **delim**: the code point itself
//!
//! The escape and ident rules are the scanner's own ([`consume_escape`],
//! [`IdentChars`]), run over the token's slice instead of the whole input.

use comot_css_core::classify::{is_whitespace, would_start_ident};
use comot_css_core::{
    consume_escape, consume_ident_sequence, consume_number, Cursor, DecodedEntry, IdentChars,
    NumberType, TokenTag,
};

/// Whether a hash name could also be an identifier (`#id` vs `#123`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashFlag {
    Id,
    Unrestricted,
}

/// The value of a number, percentage or dimension token.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Numeric<'a> {
    pub value: f64,
    pub kind: NumberType,
    /// Cooked unit, dimensions only.
    pub unit: Option<&'a str>,
}

/// Cooked text of a token with tag `tag` covering `entries`.
///
/// `None` for tags that carry no text of their own (punctuation, trivia,
/// bad-url, plain numbers). Use [`number`] for numeric values.
pub fn cook(tag: TokenTag, entries: &[DecodedEntry]) -> Option<String> {
    match tag {
        TokenTag::Ident | TokenTag::Function => Some(ident(entries)),
        TokenTag::AtKeyword | TokenTag::Hash => entries.get(1..).map(ident),
        TokenTag::String | TokenTag::BadString => Some(string(entries)),
        TokenTag::Url => Some(url(entries)),
        TokenTag::Dimension => Some(unit(entries)),
        TokenTag::Delim => entries.first().map(|entry| entry.as_char().to_string()),
        _ => None,
    }
}

/// The decoded code points, unchanged.
pub fn text(entries: &[DecodedEntry]) -> String {
    entries.iter().map(|entry| entry.as_char()).collect()
}

/// The leading ident sequence, unescaped.
pub fn ident(entries: &[DecodedEntry]) -> String {
    IdentChars::new(entries).collect()
}

/// String contents. Accepts a token with or without its closing quote.
pub fn string(entries: &[DecodedEntry]) -> String {
    let mut cursor = Cursor::new(entries);
    let Some(quote) = cursor.bump().map(DecodedEntry::as_char) else {
        return String::new();
    };

    let mut out = String::with_capacity(entries.len());
    while let Some(entry) = cursor.bump() {
        match entry.as_char() {
            c if c == quote => break,
            '\\' => {
                if cursor.current() == '\n' {
                    cursor.bump();
                } else if !cursor.is_at_end() {
                    out.push(consume_escape(&mut cursor));
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// The address of an unquoted url token.
pub fn url(entries: &[DecodedEntry]) -> String {
    let mut cursor = Cursor::new(entries);
    consume_ident_sequence(&mut cursor);
    cursor.bump();
    cursor.eat_while(is_whitespace);

    let mut out = String::with_capacity(entries.len());
    while let Some(entry) = cursor.bump() {
        match entry.as_char() {
            '\\' => out.push(consume_escape(&mut cursor)),
            c if is_whitespace(c) => break,
            c => out.push(c),
        }
    }
    out
}

/// The unit of a dimension token.
pub fn unit(entries: &[DecodedEntry]) -> String {
    ident(&entries[number_len(entries)..])
}

/// Numeric value and type of the number body at the start of `entries`,
/// plus how many entries the body spans.
pub fn number(entries: &[DecodedEntry]) -> Option<(f64, NumberType, usize)> {
    let mut cursor = Cursor::new(entries);
    let kind = consume_number(&mut cursor);
    let len = cursor.index() as usize;
    if len == 0 {
        return None;
    }
    let value = text(&entries[..len]).parse::<f64>().ok()?;
    Some((value, kind, len))
}

/// Type flag of a hash token (`entries` includes the `#`).
pub fn hash_flag(entries: &[DecodedEntry]) -> HashFlag {
    let cursor = Cursor::new(entries.get(1..).unwrap_or_default());
    if would_start_ident(cursor.char_at(0), cursor.char_at(1), cursor.char_at(2)) {
        HashFlag::Id
    } else {
        HashFlag::Unrestricted
    }
}

fn number_len(entries: &[DecodedEntry]) -> usize {
    let mut cursor = Cursor::new(entries);
    consume_number(&mut cursor);
    cursor.index() as usize
}

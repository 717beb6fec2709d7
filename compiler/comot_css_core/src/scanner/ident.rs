use super::{consume_escape, Scanner};
use crate::classify::{is_ident_continue, is_valid_escape, is_whitespace};
use crate::cursor::Cursor;
use crate::decoder::DecodedEntry;
use crate::tag::{Token, TokenKind, TokenTag};

/// Consume a maximal ident sequence: ident code points and valid escapes.
///
/// Emits nothing; the caller decides which token the sequence belongs to.
pub fn consume_ident_sequence(cursor: &mut Cursor<'_>) {
    loop {
        let c = cursor.current();
        if is_ident_continue(c) {
            cursor.bump();
        } else if is_valid_escape(c, cursor.char_at(1)) {
            cursor.bump();
            consume_escape(cursor);
        } else {
            return;
        }
    }
}

/// The unescaped code points of an ident sequence, without allocating.
///
/// Stops at the first code point that cannot continue an ident, so it can be
/// pointed at the start of a token and read just the name part.
#[derive(Clone, Debug)]
pub struct IdentChars<'a> {
    cursor: Cursor<'a>,
}

impl<'a> IdentChars<'a> {
    pub fn new(entries: &'a [DecodedEntry]) -> Self {
        IdentChars {
            cursor: Cursor::new(entries),
        }
    }

    /// Entries consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor.index() as usize
    }
}

impl Iterator for IdentChars<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = self.cursor.current();
        if is_ident_continue(c) {
            self.cursor.bump();
            Some(c)
        } else if is_valid_escape(c, self.cursor.char_at(1)) {
            self.cursor.bump();
            Some(consume_escape(&mut self.cursor))
        } else {
            None
        }
    }
}

impl Scanner<'_> {
    /// Ident, function or url token.
    ///
    /// `url(` followed by a quote becomes a function token so the string is
    /// scanned on its own; any other `url(` goes to the url consumer.
    pub(super) fn ident_like(&mut self) -> Token {
        let name_start = self.cursor.index() as usize;
        consume_ident_sequence(&mut self.cursor);
        let name_end = self.cursor.index() as usize;

        if self.cursor.current() != '(' {
            return self.finish(TokenTag::Ident, TokenKind::Valid);
        }
        self.cursor.bump();

        let name = &self.cursor.entries()[name_start..name_end];
        if !is_url(name) {
            return self.finish(TokenTag::Function, TokenKind::Valid);
        }

        self.cursor.eat_while(is_whitespace);
        if matches!(self.cursor.current(), '"' | '\'') {
            return self.finish(TokenTag::Function, TokenKind::Valid);
        }
        self.url()
    }
}

/// ASCII case-insensitive match of an ident sequence against `url`.
fn is_url(name: &[DecodedEntry]) -> bool {
    IdentChars::new(name)
        .map(|c| c.to_ascii_lowercase())
        .eq("url".chars())
}

//! The tokenizer state machine.
//!
//! [`Scanner::next_token`] runs an explicit loop over [`ScanState`]. `Data`
//! inspects one code point and either emits a token directly or rewinds that
//! code point and hands off to a sub-consumer state. Nothing persists across
//! calls except the cursor and the issue list, so every call starts in `Data`.
//!
//! Sub-consumers live in child modules, one per token shape. The pieces that
//! other layers reuse to reinterpret token text (escapes, ident sequences,
//! number bodies) are free functions over a [`Cursor`].

mod comment;
mod escape;
mod ident;
mod number;
mod string;
mod url;

pub use escape::consume_escape;
pub use ident::{consume_ident_sequence, IdentChars};
pub use number::{consume_number, NumberType};

use tracing::trace;

use crate::classify::{
    is_digit, is_ident_continue, is_ident_start, is_valid_escape, is_whitespace, starts_number,
    would_start_ident,
};
use crate::cursor::{Cursor, Position};
use crate::decoder::DecodedEntry;
use crate::issue::{ScanIssue, ScanIssueKind};
use crate::tag::{Token, TokenKind, TokenTag};
use crate::Span;

/// Dispatch state inside a single [`Scanner::next_token`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Data,
    Identifier,
    String(char),
    Number,
    Whitespace,
    Delim,
}

/// Produces tokens from a decoded entry sequence.
///
/// Once the end is reached every call returns an `Eof` token at the same
/// position.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Byte offset just past the last entry.
    byte_end: u32,
    /// Where the token being scanned began.
    start: Position,
    state: ScanState,
    issues: Vec<ScanIssue>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `entries`. `byte_end` closes the byte range of
    /// the last entry (see [`Decoded::byte_end`](crate::Decoded::byte_end)).
    pub fn new(entries: &'a [DecodedEntry], byte_end: u32) -> Self {
        Scanner {
            cursor: Cursor::new(entries),
            byte_end,
            start: Position::START,
            state: ScanState::Data,
            issues: Vec::new(),
        }
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Token {
        self.start = self.cursor.position();
        self.state = ScanState::Data;
        loop {
            match self.state {
                ScanState::Data => {
                    if let Some(token) = self.dispatch() {
                        return token;
                    }
                }
                ScanState::Identifier => return self.ident_like(),
                ScanState::String(quote) => return self.string(quote),
                ScanState::Number => return self.numeric(),
                ScanState::Whitespace => {
                    self.cursor.eat_while(is_whitespace);
                    return self.finish(TokenTag::Whitespace, TokenKind::Valid);
                }
                ScanState::Delim => return self.finish(TokenTag::Delim, TokenKind::Valid),
            }
        }
    }

    /// Parse errors recorded so far.
    pub fn issues(&self) -> &[ScanIssue] {
        &self.issues
    }

    /// Remove and return every recorded parse error.
    pub fn drain_issues(&mut self) -> std::vec::Drain<'_, ScanIssue> {
        self.issues.drain(..)
    }

    /// Position of the next unconsumed code point.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    pub fn entries(&self) -> &'a [DecodedEntry] {
        self.cursor.entries()
    }

    pub fn byte_end(&self) -> u32 {
        self.byte_end
    }

    /// Byte offset where entry `index` starts (`byte_end` past the last one).
    pub fn byte_offset(&self, index: u32) -> u32 {
        self.cursor
            .entries()
            .get(index as usize)
            .map_or(self.byte_end, |entry| entry.byte_offset)
    }

    /// Look at the code point just consumed and pick what happens next.
    ///
    /// Returns a token when the decision is final, or `None` after switching
    /// state. Sub-consumer states are entered through [`reconsume`](Self::reconsume)
    /// so they see the construct from its first code point; `Delim` keeps the
    /// code point already consumed.
    fn dispatch(&mut self) -> Option<Token> {
        let Some(entry) = self.cursor.bump() else {
            return Some(self.finish(TokenTag::Eof, TokenKind::Valid));
        };
        let c = entry.as_char();
        let next = self.cursor.char_at(0);
        let after = self.cursor.char_at(1);

        if let Some(tag) = TokenTag::punctuation(c) {
            return Some(self.finish(tag, TokenKind::Valid));
        }

        match c {
            '/' => Some(self.comment_or_delim()),
            c if is_whitespace(c) => self.reconsume(ScanState::Whitespace),
            '"' | '\'' => self.reconsume(ScanState::String(c)),
            '#' => Some(self.hash()),
            '+' if starts_number(c, next, after) => self.reconsume(ScanState::Number),
            c if is_ident_start(c) => self.reconsume(ScanState::Identifier),
            c if is_digit(c) => self.reconsume(ScanState::Number),
            '-' if starts_number(c, next, after) => self.reconsume(ScanState::Number),
            '-' if next == '-' && after == '>' => {
                self.cursor.advance(2);
                Some(self.finish(TokenTag::Cdc, TokenKind::Valid))
            }
            '-' if would_start_ident(c, next, after) => self.reconsume(ScanState::Identifier),
            '.' if starts_number(c, next, after) => self.reconsume(ScanState::Number),
            '<' if next == '!' && after == '-' && self.cursor.char_at(2) == '-' => {
                self.cursor.advance(3);
                Some(self.finish(TokenTag::Cdo, TokenKind::Valid))
            }
            '@' if would_start_ident(next, after, self.cursor.char_at(2)) => {
                consume_ident_sequence(&mut self.cursor);
                Some(self.finish(TokenTag::AtKeyword, TokenKind::Valid))
            }
            '\\' if is_valid_escape(c, next) => self.reconsume(ScanState::Identifier),
            '\\' => {
                self.report(ScanIssueKind::StrayBackslash);
                Some(self.finish(TokenTag::Delim, TokenKind::Error))
            }
            _ => {
                self.state = ScanState::Delim;
                None
            }
        }
    }

    /// Rewind the code point `dispatch` consumed and switch to `state`.
    fn reconsume(&mut self, state: ScanState) -> Option<Token> {
        self.cursor.step_back();
        self.state = state;
        None
    }

    fn hash(&mut self) -> Token {
        let next = self.cursor.char_at(0);
        if is_ident_continue(next) || is_valid_escape(next, self.cursor.char_at(1)) {
            consume_ident_sequence(&mut self.cursor);
            self.finish(TokenTag::Hash, TokenKind::Valid)
        } else {
            self.finish(TokenTag::Delim, TokenKind::Valid)
        }
    }

    /// Build a token from `start` to the cursor.
    fn finish(&self, tag: TokenTag, kind: TokenKind) -> Token {
        let end = self.cursor.index();
        debug_assert!(end as usize <= self.cursor.entries().len());
        let token = Token {
            tag,
            kind,
            span: Span::new(self.start.index, end),
            bytes: Span::new(self.byte_offset(self.start.index), self.byte_offset(end)),
            line: self.start.line,
            column: self.start.column,
        };
        trace!(%token, "scanned");
        token
    }

    /// Record a parse error covering `start` to the cursor.
    fn report(&mut self, kind: ScanIssueKind) {
        self.issues.push(ScanIssue {
            kind,
            span: Span::new(self.start.index, self.cursor.index()),
            line: self.start.line,
            column: self.start.column,
        });
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

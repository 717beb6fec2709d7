use super::{consume_escape, Scanner};
use crate::classify::{is_non_printable, is_valid_escape, is_whitespace};
use crate::issue::{BadUrlReason, ScanIssueKind};
use crate::tag::{Token, TokenKind, TokenTag};

impl Scanner<'_> {
    /// Unquoted url body, entered after `url(` and its leading whitespace.
    ///
    /// The closing `)` is left for the next token on every path.
    pub(super) fn url(&mut self) -> Token {
        loop {
            if self.cursor.is_at_end() {
                self.report(ScanIssueKind::UnterminatedUrl);
                return self.finish(TokenTag::Url, TokenKind::Valid);
            }
            let c = self.cursor.current();
            match c {
                ')' => return self.finish(TokenTag::Url, TokenKind::Valid),
                c if is_whitespace(c) => {
                    self.cursor.eat_while(is_whitespace);
                    if self.cursor.is_at_end() {
                        self.report(ScanIssueKind::UnterminatedUrl);
                        return self.finish(TokenTag::Url, TokenKind::Valid);
                    }
                    if self.cursor.current() == ')' {
                        return self.finish(TokenTag::Url, TokenKind::Valid);
                    }
                    return self.bad_url(BadUrlReason::InteriorWhitespace);
                }
                '"' | '\'' => return self.bad_url(BadUrlReason::Quote),
                '(' => return self.bad_url(BadUrlReason::OpenParen),
                c if is_non_printable(c) => return self.bad_url(BadUrlReason::NonPrintable),
                '\\' if is_valid_escape(c, self.cursor.char_at(1)) => {
                    self.cursor.bump();
                    consume_escape(&mut self.cursor);
                }
                '\\' => return self.bad_url(BadUrlReason::InvalidEscape),
                _ => {
                    self.cursor.bump();
                }
            }
        }
    }

    fn bad_url(&mut self, reason: BadUrlReason) -> Token {
        self.consume_bad_url_remnants();
        self.report(ScanIssueKind::BadUrl(reason));
        self.finish(TokenTag::BadUrl, TokenKind::Error)
    }

    /// Skip to the next unescaped `)` or EOF without consuming the `)`.
    fn consume_bad_url_remnants(&mut self) {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current();
            if c == ')' {
                return;
            }
            self.cursor.bump();
            if is_valid_escape(c, self.cursor.current()) {
                consume_escape(&mut self.cursor);
            }
        }
    }
}

use super::{consume_escape, Scanner};
use crate::issue::ScanIssueKind;
use crate::tag::{Token, TokenKind, TokenTag};

impl Scanner<'_> {
    /// Quoted string, entered on the opening `quote`.
    ///
    /// An unescaped line feed ends the token before the line feed as a
    /// bad-string. EOF yields a string token with error kind.
    pub(super) fn string(&mut self, quote: char) -> Token {
        self.cursor.bump();
        loop {
            let Some(entry) = self.cursor.peek(0) else {
                self.report(ScanIssueKind::UnterminatedString);
                return self.finish(TokenTag::String, TokenKind::Error);
            };
            match entry.as_char() {
                c if c == quote => {
                    self.cursor.bump();
                    return self.finish(TokenTag::String, TokenKind::Valid);
                }
                '\n' => {
                    self.report(ScanIssueKind::NewlineInString);
                    return self.finish(TokenTag::BadString, TokenKind::Error);
                }
                '\\' => {
                    self.cursor.bump();
                    // At EOF the next iteration reports the unterminated string.
                    if self.cursor.current() == '\n' {
                        self.cursor.bump();
                    } else if !self.cursor.is_at_end() {
                        consume_escape(&mut self.cursor);
                    }
                }
                _ => {
                    self.cursor.bump();
                }
            }
        }
    }
}

use super::Scanner;
use crate::issue::ScanIssueKind;
use crate::tag::{Token, TokenKind, TokenTag};

impl Scanner<'_> {
    /// Comment or `/` delim. The `/` has already been consumed.
    ///
    /// EOF before `*/` still yields a comment, with error kind.
    pub(super) fn comment_or_delim(&mut self) -> Token {
        if self.cursor.current() != '*' {
            return self.finish(TokenTag::Delim, TokenKind::Valid);
        }
        self.cursor.bump();

        while let Some(entry) = self.cursor.bump() {
            if entry.as_char() == '*' && self.cursor.current() == '/' {
                self.cursor.bump();
                return self.finish(TokenTag::Comment, TokenKind::Valid);
            }
        }
        self.report(ScanIssueKind::UnterminatedComment);
        self.finish(TokenTag::Comment, TokenKind::Error)
    }
}

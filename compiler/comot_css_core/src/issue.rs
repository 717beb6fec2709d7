//! Parse errors recorded by the scanner.
//!
//! The scanner never reports directly; it appends a [`ScanIssue`] and keeps
//! going. Callers drain the list and decide what to surface.

use std::fmt;

use crate::Span;

/// What made a URL token bad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BadUrlReason {
    /// A `"` or `'` inside an unquoted URL.
    Quote,
    /// A `(` inside an unquoted URL.
    OpenParen,
    /// A backslash that does not start a valid escape.
    InvalidEscape,
    /// Whitespace followed by more URL content.
    InteriorWhitespace,
    /// A control character.
    NonPrintable,
}

impl BadUrlReason {
    pub const fn describe(self) -> &'static str {
        match self {
            BadUrlReason::Quote => "quote inside unquoted url",
            BadUrlReason::OpenParen => "'(' inside unquoted url",
            BadUrlReason::InvalidEscape => "invalid escape inside url",
            BadUrlReason::InteriorWhitespace => "whitespace inside url",
            BadUrlReason::NonPrintable => "non-printable character inside url",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanIssueKind {
    /// EOF inside `/* ... */`.
    UnterminatedComment,
    /// EOF inside a quoted string.
    UnterminatedString,
    /// Unescaped line feed inside a quoted string.
    NewlineInString,
    /// EOF before the `)` of an unquoted URL.
    UnterminatedUrl,
    BadUrl(BadUrlReason),
    /// A backslash outside any string or URL that cannot start an escape.
    StrayBackslash,
}

impl fmt::Display for ScanIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanIssueKind::UnterminatedComment => f.write_str("unterminated comment"),
            ScanIssueKind::UnterminatedString => f.write_str("unterminated string"),
            ScanIssueKind::NewlineInString => f.write_str("newline inside string"),
            ScanIssueKind::UnterminatedUrl => f.write_str("unterminated url"),
            ScanIssueKind::BadUrl(reason) => f.write_str(reason.describe()),
            ScanIssueKind::StrayBackslash => f.write_str("stray backslash"),
        }
    }
}

/// One recorded parse error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScanIssue {
    pub kind: ScanIssueKind,
    /// Decoded-entry range of the offending token.
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

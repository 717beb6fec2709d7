//! Token tags and the token value type.

use std::fmt;

use crate::Span;

/// Kind of a CSS token.
///
/// Discriminants are grouped into ranges so related tags sort together:
///
/// | range   | group                   |
/// |---------|-------------------------|
/// | 0-7     | ident-like              |
/// | 8-15    | strings and urls        |
/// | 16-23   | numerics                |
/// | 32-47   | trivia                  |
/// | 64-79   | punctuation             |
/// | 80      | delim                   |
/// | 255     | end of input            |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenTag {
    // Ident-like
    Ident = 0,
    Function = 1,
    AtKeyword = 2,
    Hash = 3,

    // Strings and urls
    String = 8,
    BadString = 9,
    Url = 10,
    BadUrl = 11,

    // Numerics
    Number = 16,
    Percentage = 17,
    Dimension = 18,

    // Trivia
    Whitespace = 32,
    Comment = 33,

    // Punctuation
    Colon = 64,
    Semicolon = 65,
    Comma = 66,
    LeftParen = 67,
    RightParen = 68,
    LeftSquare = 69,
    RightSquare = 70,
    LeftCurly = 71,
    RightCurly = 72,
    Cdo = 73,
    Cdc = 74,

    Delim = 80,

    Eof = 255,
}

impl TokenTag {
    /// Name used in token dumps and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenTag::Ident => "ident",
            TokenTag::Function => "function",
            TokenTag::AtKeyword => "at-keyword",
            TokenTag::Hash => "hash",
            TokenTag::String => "string",
            TokenTag::BadString => "bad-string",
            TokenTag::Url => "url",
            TokenTag::BadUrl => "bad-url",
            TokenTag::Number => "number",
            TokenTag::Percentage => "percentage",
            TokenTag::Dimension => "dimension",
            TokenTag::Whitespace => "whitespace",
            TokenTag::Comment => "comment",
            TokenTag::Colon => "colon",
            TokenTag::Semicolon => "semicolon",
            TokenTag::Comma => "comma",
            TokenTag::LeftParen => "left-paren",
            TokenTag::RightParen => "right-paren",
            TokenTag::LeftSquare => "left-square",
            TokenTag::RightSquare => "right-square",
            TokenTag::LeftCurly => "left-curly",
            TokenTag::RightCurly => "right-curly",
            TokenTag::Cdo => "CDO",
            TokenTag::Cdc => "CDC",
            TokenTag::Delim => "delim",
            TokenTag::Eof => "EOF",
        }
    }

    /// Source text for tags that always have the same spelling.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenTag::Colon => Some(":"),
            TokenTag::Semicolon => Some(";"),
            TokenTag::Comma => Some(","),
            TokenTag::LeftParen => Some("("),
            TokenTag::RightParen => Some(")"),
            TokenTag::LeftSquare => Some("["),
            TokenTag::RightSquare => Some("]"),
            TokenTag::LeftCurly => Some("{"),
            TokenTag::RightCurly => Some("}"),
            TokenTag::Cdo => Some("<!--"),
            TokenTag::Cdc => Some("-->"),
            _ => None,
        }
    }

    /// Map a single punctuation code point to its tag.
    pub const fn punctuation(c: char) -> Option<TokenTag> {
        match c {
            ':' => Some(TokenTag::Colon),
            ';' => Some(TokenTag::Semicolon),
            ',' => Some(TokenTag::Comma),
            '(' => Some(TokenTag::LeftParen),
            ')' => Some(TokenTag::RightParen),
            '[' => Some(TokenTag::LeftSquare),
            ']' => Some(TokenTag::RightSquare),
            '{' => Some(TokenTag::LeftCurly),
            '}' => Some(TokenTag::RightCurly),
            _ => None,
        }
    }

    /// Whitespace and comments.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenTag::Whitespace | TokenTag::Comment)
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a token was well formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    #[default]
    Valid,
    /// Malformed input recovered into a best-effort token.
    Error,
}

/// A token: a tagged view into the decoded sequence.
///
/// Tokens never own text. `span` indexes decoded entries, `bytes` indexes the
/// original input; both are half-open and describe the same source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub tag: TokenTag,
    pub kind: TokenKind,
    /// Decoded-entry range.
    pub span: Span,
    /// Byte range in the original input.
    pub bytes: Span,
    /// 1-based line of the first code point.
    pub line: u32,
    /// 1-based column of the first code point.
    pub column: u32,
}

impl Token {
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.tag == TokenTag::Eof
    }

    /// Number of decoded code points covered.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {} {}", self.line, self.column, self.tag, self.span)?;
        if self.is_error() {
            f.write_str(" (error)")?;
        }
        Ok(())
    }
}

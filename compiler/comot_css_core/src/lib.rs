//! Standalone core of the comot CSS tokenizer.
//!
//! Raw bytes go through [`decode`] into a sequence of [`DecodedEntry`]
//! values; a [`Scanner`] walks that sequence with a [`Cursor`] and produces
//! [`Token`]s plus [`ScanIssue`] records for malformed input.
//!
//! This crate has no dependency on the rest of the workspace. Tools that only
//! need token boundaries (highlighters, minifiers) can use it directly;
//! `comot_css` adds the arena, diagnostics and cooked token values.
//!
//! ```
//! use comot_css_core::{decode, DecodeLimits, Scanner, TokenTag};
//!
//! let decoded = decode(b"a { color: red }", None, &DecodeLimits::default());
//! let tags: Vec<_> = Scanner::new(decoded.entries(), decoded.byte_end())
//!     .map(|t| t.tag)
//!     .collect();
//! assert_eq!(tags[0], TokenTag::Ident);
//! assert_eq!(tags[2], TokenTag::LeftCurly);
//! ```

pub mod classify;
mod cursor;
mod decoder;
mod issue;
mod scanner;
mod span;
mod tag;

pub use cursor::{Cursor, Position, EOF_CHAR};
pub use decoder::{
    decode, detect_encoding, extract_charset, normalize, DecodeIssue, DecodeLimits, Decoded,
    DecodedEntry, Encoding, REPLACEMENT,
};
pub use issue::{BadUrlReason, ScanIssue, ScanIssueKind};
pub use scanner::{
    consume_escape, consume_ident_sequence, consume_number, IdentChars, NumberType, Scanner,
};
pub use span::Span;
pub use tag::{Token, TokenKind, TokenTag};

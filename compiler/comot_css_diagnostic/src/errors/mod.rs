//! Embedded error documentation for `comot explain`.
//!
//! Each error code has a markdown file in this directory that explains the
//! problem, shows an example and says how to fix it. The files are embedded
//! at compile time.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `CXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the documentation for an error code.
    ///
    /// ```
    /// use comot_css_diagnostic::{ErrorCode, ErrorDocs};
    ///
    /// let doc = ErrorDocs::get(ErrorCode::C0002).unwrap_or_default();
    /// assert!(doc.starts_with("# C0002"));
    /// ```
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }

    /// Get all documented error codes.
    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|(code, _)| *code)
    }

    /// Check if an error code has documentation.
    pub fn has_docs(code: ErrorCode) -> bool {
        DOCS.iter().any(|(c, _)| *c == code)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    (ErrorCode::C0001, include_str!("C0001.md")),
    (ErrorCode::C0002, include_str!("C0002.md")),
    (ErrorCode::C0003, include_str!("C0003.md")),
    (ErrorCode::C0004, include_str!("C0004.md")),
    (ErrorCode::C0005, include_str!("C0005.md")),
    (ErrorCode::C0006, include_str!("C0006.md")),
    (ErrorCode::C0007, include_str!("C0007.md")),
    (ErrorCode::C0008, include_str!("C0008.md")),
    (ErrorCode::C0009, include_str!("C0009.md")),
];

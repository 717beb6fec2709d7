use std::fmt;

use comot_css_core::ScanIssueKind;

use crate::{ErrorDocs, Severity};

/// Stable codes for every diagnostic the tokenizer can report.
///
/// Format: C#### where the first digit groups them:
/// - C000x: Tokenization and input problems
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Comment reaches EOF without `*/`
    C0001,
    /// String reaches EOF without its closing quote
    C0002,
    /// Unescaped line feed inside a string
    C0003,
    /// Unquoted url reaches EOF without `)`
    C0004,
    /// Malformed unquoted url
    C0005,
    /// Backslash that cannot start an escape
    C0006,
    /// Input cut at a size ceiling (warning)
    C0007,
    /// Input refused before tokenization
    C0008,
    /// Diagnostic limit reached (note)
    C0009,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::C0001,
        ErrorCode::C0002,
        ErrorCode::C0003,
        ErrorCode::C0004,
        ErrorCode::C0005,
        ErrorCode::C0006,
        ErrorCode::C0007,
        ErrorCode::C0008,
        ErrorCode::C0009,
    ];

    /// Get the code as a string (e.g., "C0001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::C0001 => "C0001",
            ErrorCode::C0002 => "C0002",
            ErrorCode::C0003 => "C0003",
            ErrorCode::C0004 => "C0004",
            ErrorCode::C0005 => "C0005",
            ErrorCode::C0006 => "C0006",
            ErrorCode::C0007 => "C0007",
            ErrorCode::C0008 => "C0008",
            ErrorCode::C0009 => "C0009",
        }
    }

    /// One-line title, used as the message when no other is given.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::C0001 => "unterminated comment",
            ErrorCode::C0002 => "unterminated string",
            ErrorCode::C0003 => "newline in string",
            ErrorCode::C0004 => "unterminated url",
            ErrorCode::C0005 => "malformed url",
            ErrorCode::C0006 => "stray backslash",
            ErrorCode::C0007 => "input truncated",
            ErrorCode::C0008 => "input rejected",
            ErrorCode::C0009 => "too many diagnostics",
        }
    }

    /// Check if this is a warning code.
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::C0007)
    }

    /// Severity a diagnostic with this code is reported at.
    pub fn severity(&self) -> Severity {
        match self {
            ErrorCode::C0007 => Severity::Warning,
            ErrorCode::C0009 => Severity::Note,
            _ => Severity::Error,
        }
    }

    /// Long-form explanation, as printed by `comot explain`.
    pub fn explain(&self) -> Option<&'static str> {
        ErrorDocs::get(*self)
    }
}

impl From<ScanIssueKind> for ErrorCode {
    fn from(kind: ScanIssueKind) -> Self {
        match kind {
            ScanIssueKind::UnterminatedComment => ErrorCode::C0001,
            ScanIssueKind::UnterminatedString => ErrorCode::C0002,
            ScanIssueKind::NewlineInString => ErrorCode::C0003,
            ScanIssueKind::UnterminatedUrl => ErrorCode::C0004,
            ScanIssueKind::BadUrl(_) => ErrorCode::C0005,
            ScanIssueKind::StrayBackslash => ErrorCode::C0006,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"C0002"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or(())
    }
}

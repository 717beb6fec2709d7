use std::fmt;

use comot_css_core::{ScanIssue, Span};

use crate::ErrorCode;

/// How serious a diagnostic is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// One reportable problem.
///
/// `span` is a byte range into the original input, so a sink can slice the
/// raw bytes without knowing about decoded entries. `context` holds the
/// offending source text, already decoded and possibly shortened.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    /// 1-based line; 0 when the diagnostic has no position.
    pub line: u32,
    /// 1-based column; 0 when the diagnostic has no position.
    pub column: u32,
    pub context: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic at the severity its code implies.
    ///
    /// The message defaults to the code's title.
    #[cold]
    pub fn new(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: code.severity(),
            message: code.title().to_string(),
            span: Span::DUMMY,
            line: 0,
            column: 0,
            context: String::new(),
            notes: Vec::new(),
        }
    }

    /// Build the diagnostic for a scanner issue.
    ///
    /// `bytes` is the byte range of the token the issue was recorded on;
    /// the issue itself only knows decoded-entry indices.
    #[cold]
    pub fn from_scan_issue(issue: &ScanIssue, bytes: Span, context: impl Into<String>) -> Self {
        Diagnostic::new(ErrorCode::from(issue.kind))
            .with_message(issue.kind.to_string())
            .with_span(bytes)
            .at(issue.line, issue.column)
            .with_context(context)
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the 1-based line and column.
    #[must_use]
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Whether a line and column were attached.
    pub fn has_position(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if self.has_position() {
            write!(f, " at {}:{}", self.line, self.column)?;
        }
        Ok(())
    }
}

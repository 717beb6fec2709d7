//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::{Diagnostic, DiagnosticStats, Severity};

use super::DiagnosticSink;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` value.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// Counts the errors and warnings it renders so [`summary`](DiagnosticSink::summary)
/// can close the session with one line.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    /// Shown before `line:column` when set, usually a file path.
    origin: Option<String>,
    errors: usize,
    warnings: usize,
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            origin: None,
            errors: 0,
            warnings: 0,
        }
    }

    /// Name the input in location lines (`--> origin:line:column`).
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn warning_count(&self) -> usize {
        self.warnings
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_gutter(&mut self, marker: &str) {
        let _ = write!(self.writer, "  ");
        self.write_colored(marker, colors::GUTTER);
        let _ = write!(self.writer, " ");
    }
}

impl<W: Write> DiagnosticSink for TerminalEmitter<W> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Note => {}
        }

        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if diagnostic.has_position() {
            self.write_gutter("-->");
            if let Some(origin) = &self.origin {
                let _ = write!(self.writer, "{origin}:");
            }
            let _ = writeln!(self.writer, "{}:{}", diagnostic.line, diagnostic.column);
        }

        if !diagnostic.context.is_empty() {
            self.write_gutter(" |");
            let _ = writeln!(self.writer, "{}", diagnostic.context.escape_debug());
        }

        for note in &diagnostic.notes {
            self.write_gutter(" =");
            if self.colors {
                let _ = write!(self.writer, "{}note{}", colors::BOLD, colors::RESET);
            } else {
                let _ = write!(self.writer, "note");
            }
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn summary(&mut self, stats: DiagnosticStats) {
        let (errors, warnings) = (self.errors, self.warnings);
        if errors == 0 && warnings == 0 && stats.suppressed == 0 {
            return;
        }

        if errors > 0 {
            self.write_colored("error", colors::ERROR);
        } else if warnings > 0 {
            self.write_colored("warning", colors::WARNING);
        } else {
            self.write_colored("note", colors::NOTE);
        }

        let mut parts = Vec::new();
        if errors > 0 {
            parts.push(format!("{errors} error{}", plural_s(errors)));
        }
        if warnings > 0 {
            parts.push(format!("{warnings} warning{}", plural_s(warnings)));
        }

        let _ = write!(self.writer, ": ");
        if !parts.is_empty() {
            let _ = write!(self.writer, "{} reported", parts.join(", "));
            if stats.suppressed > 0 {
                let _ = write!(self.writer, "; ");
            }
        }
        if stats.suppressed > 0 {
            let _ = write!(
                self.writer,
                "{} more diagnostic{} suppressed",
                stats.suppressed,
                plural_s(stats.suppressed)
            );
        }
        let _ = writeln!(self.writer);
    }
}

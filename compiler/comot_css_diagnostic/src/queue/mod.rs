//! Rate limiting for reported diagnostics.
//!
//! The tokenizer hands every diagnostic to a [`DiagnosticQueue`] together
//! with its sink. The queue forwards until the configured limit is reached,
//! then counts the rest and tells the sink once that it has gone quiet.

use crate::{Diagnostic, DiagnosticSink, ErrorCode};

/// Configuration for diagnostic reporting.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of diagnostics forwarded per session (0 = unlimited).
    pub error_limit: usize,
    /// When `false`, every diagnostic is counted as suppressed.
    pub enabled: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            enabled: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            enabled: true,
        }
    }

    /// Create a config that reports nothing.
    pub fn silent() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            enabled: false,
        }
    }

    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }
}

/// What a session reported.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticStats {
    /// Diagnostics forwarded to the sink (the limit note excluded).
    pub reported: usize,
    /// Diagnostics dropped by the limit or because reporting is disabled.
    pub suppressed: usize,
}

impl DiagnosticStats {
    pub fn total(&self) -> usize {
        self.reported + self.suppressed
    }
}

/// Throttle between a diagnostic source and its sink.
///
/// # Example
///
/// ```
/// use comot_css_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode};
///
/// let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::default().with_error_limit(1));
/// let mut sink: Vec<Diagnostic> = Vec::new();
/// assert!(queue.report(Diagnostic::new(ErrorCode::C0002), &mut sink));
/// assert!(!queue.report(Diagnostic::new(ErrorCode::C0003), &mut sink));
/// // The second one was replaced by a single "too many diagnostics" note.
/// assert_eq!(sink.len(), 2);
/// assert_eq!(queue.stats().suppressed, 1);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct DiagnosticQueue {
    config: DiagnosticConfig,
    stats: DiagnosticStats,
    /// Whether the limit note went out.
    limit_noted: bool,
}

impl DiagnosticQueue {
    /// Create a new queue with default configuration.
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    /// Create a queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            stats: DiagnosticStats::default(),
            limit_noted: false,
        }
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    /// Forward `diag` to `sink` unless the session is throttled.
    ///
    /// Returns `true` if the sink saw the diagnostic. The first diagnostic
    /// dropped by the limit is replaced by [`too_many_diagnostics`].
    pub fn report<S: DiagnosticSink + ?Sized>(&mut self, diag: Diagnostic, sink: &mut S) -> bool {
        if !self.config.enabled {
            self.stats.suppressed += 1;
            return false;
        }
        if self.limit_reached() {
            self.stats.suppressed += 1;
            if !self.limit_noted {
                self.limit_noted = true;
                sink.report(&too_many_diagnostics(self.config.error_limit));
            }
            return false;
        }
        sink.report(&diag);
        self.stats.reported += 1;
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.stats.reported >= self.config.error_limit
    }

    pub fn stats(&self) -> DiagnosticStats {
        self.stats
    }

    /// End the session: hand the stats to `sink` and flush it.
    pub fn finish<S: DiagnosticSink + ?Sized>(&self, sink: &mut S) {
        sink.summary(self.stats);
        sink.flush();
    }
}

/// The note sent once a session hits its diagnostic limit.
#[cold]
pub fn too_many_diagnostics(limit: usize) -> Diagnostic {
    Diagnostic::new(ErrorCode::C0009)
        .with_message(format!(
            "reached the limit of {limit} diagnostics; further ones are suppressed"
        ))
        .with_note("use --max-errors to raise the limit, or 0 for none")
}

#[cfg(test)]
mod tests;

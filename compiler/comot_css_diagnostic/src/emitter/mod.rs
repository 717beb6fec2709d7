//! Diagnostic sinks.
//!
//! A sink receives every diagnostic the [`DiagnosticQueue`](crate::DiagnosticQueue)
//! lets through:
//! - `Vec<Diagnostic>`: collects them, for tests and embedders
//! - [`TracingSink`]: logs them through `tracing` (the tokenizer default)
//! - [`TerminalEmitter`]: renders them for a human, optionally colored

mod log_sink;
mod terminal;

pub use log_sink::TracingSink;
pub use terminal::{ColorMode, TerminalEmitter};

use crate::{Diagnostic, DiagnosticStats};

/// Receiver of reported diagnostics.
pub trait DiagnosticSink {
    /// Handle a single diagnostic.
    fn report(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self) {}

    /// Called once when a session ends.
    fn summary(&mut self, stats: DiagnosticStats) {
        let _ = stats;
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }

    fn flush(&mut self) {
        (**self).flush();
    }

    fn summary(&mut self, stats: DiagnosticStats) {
        (**self).summary(stats);
    }
}

use super::*;

use crate::Severity;
use pretty_assertions::assert_eq;

fn diag(code: ErrorCode) -> Diagnostic {
    Diagnostic::new(code).at(1, 1)
}

// === Config ===

#[test]
fn test_default_config() {
    let config = DiagnosticConfig::default();
    assert_eq!(config.error_limit, 10);
    assert!(config.enabled);
}

#[test]
fn test_config_presets() {
    assert_eq!(DiagnosticConfig::unlimited().error_limit, 0);
    assert!(DiagnosticConfig::unlimited().enabled);
    assert!(!DiagnosticConfig::silent().enabled);
    assert_eq!(DiagnosticConfig::default().with_error_limit(3).error_limit, 3);
}

// === Limit ===

#[test]
fn test_forwards_until_limit() {
    let mut queue = DiagnosticQueue::new();
    let mut sink: Vec<Diagnostic> = Vec::new();

    for _ in 0..10 {
        assert!(queue.report(diag(ErrorCode::C0002), &mut sink));
    }
    assert!(queue.limit_reached());
    assert_eq!(sink.len(), 10);
    assert_eq!(
        queue.stats(),
        DiagnosticStats {
            reported: 10,
            suppressed: 0
        }
    );
}

#[test]
fn test_limit_note_is_sent_once() {
    let config = DiagnosticConfig::default().with_error_limit(2);
    let mut queue = DiagnosticQueue::with_config(config);
    let mut sink: Vec<Diagnostic> = Vec::new();

    for _ in 0..6 {
        queue.report(diag(ErrorCode::C0001), &mut sink);
    }

    let codes: Vec<_> = sink.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::C0001, ErrorCode::C0001, ErrorCode::C0009]
    );
    assert_eq!(sink[2].severity, Severity::Note);
    assert!(sink[2].message.contains("limit of 2"));
    assert_eq!(
        queue.stats(),
        DiagnosticStats {
            reported: 2,
            suppressed: 4
        }
    );
}

#[test]
fn test_no_note_when_exactly_at_limit() {
    let config = DiagnosticConfig::default().with_error_limit(2);
    let mut queue = DiagnosticQueue::with_config(config);
    let mut sink: Vec<Diagnostic> = Vec::new();
    queue.report(diag(ErrorCode::C0001), &mut sink);
    queue.report(diag(ErrorCode::C0001), &mut sink);
    assert_eq!(sink.len(), 2);
    assert!(sink.iter().all(|d| d.code == ErrorCode::C0001));
}

#[test]
fn test_unlimited() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let mut sink: Vec<Diagnostic> = Vec::new();
    for _ in 0..100 {
        assert!(queue.report(diag(ErrorCode::C0006), &mut sink));
    }
    assert!(!queue.limit_reached());
    assert_eq!(sink.len(), 100);
}

#[test]
fn test_disabled_counts_everything_as_suppressed() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::silent());
    let mut sink: Vec<Diagnostic> = Vec::new();
    for _ in 0..3 {
        assert!(!queue.report(diag(ErrorCode::C0003), &mut sink));
    }
    assert!(sink.is_empty());
    assert_eq!(queue.stats().suppressed, 3);
    assert_eq!(queue.stats().total(), 3);
}

// === Finish ===

#[derive(Default)]
struct Recording {
    summary: Option<DiagnosticStats>,
    flushed: bool,
}

impl DiagnosticSink for Recording {
    fn report(&mut self, _diagnostic: &Diagnostic) {}

    fn flush(&mut self) {
        self.flushed = true;
    }

    fn summary(&mut self, stats: DiagnosticStats) {
        self.summary = Some(stats);
    }
}

#[test]
fn test_finish_passes_stats_and_flushes() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::default().with_error_limit(1));
    let mut sink = Recording::default();
    queue.report(diag(ErrorCode::C0004), &mut sink);
    queue.report(diag(ErrorCode::C0004), &mut sink);
    queue.finish(&mut sink);

    assert!(sink.flushed);
    assert_eq!(
        sink.summary,
        Some(DiagnosticStats {
            reported: 1,
            suppressed: 1
        })
    );
}

#[test]
fn test_too_many_diagnostics_note() {
    let note = too_many_diagnostics(10);
    assert_eq!(note.code, ErrorCode::C0009);
    assert_eq!(note.severity, Severity::Note);
    assert!(!note.has_position());
    assert_eq!(note.notes.len(), 1);
}

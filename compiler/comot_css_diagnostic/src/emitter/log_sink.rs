use tracing::{error, info, warn};

use crate::{Diagnostic, DiagnosticStats, Severity};

use super::DiagnosticSink;

/// Sink that logs each diagnostic as a `tracing` event.
///
/// Errors log at `error`, warnings at `warn`, notes at `info`. Nothing is
/// visible unless the embedding program installs a subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        let code = diagnostic.code.as_str();
        let line = diagnostic.line;
        let column = diagnostic.column;
        let context = diagnostic.context.as_str();
        match diagnostic.severity {
            Severity::Error => {
                error!(code, line, column, context, "{}", diagnostic.message);
            }
            Severity::Warning => {
                warn!(code, line, column, context, "{}", diagnostic.message);
            }
            Severity::Note => {
                info!(code, line, column, context, "{}", diagnostic.message);
            }
        }
    }

    fn summary(&mut self, stats: DiagnosticStats) {
        if stats.suppressed > 0 {
            info!(
                reported = stats.reported,
                suppressed = stats.suppressed,
                "diagnostics suppressed after limit"
            );
        }
    }
}

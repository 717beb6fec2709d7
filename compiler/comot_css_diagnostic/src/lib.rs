//! Diagnostics for the comot CSS tokenizer.
//!
//! The scanner in `comot_css_core` only records [`ScanIssue`]s. This crate
//! turns them into [`Diagnostic`]s with stable [`ErrorCode`]s, hands them to
//! a [`DiagnosticSink`], and throttles them through a [`DiagnosticQueue`]:
//! - Error codes for searchability (`comot explain C0002`)
//! - Byte span plus line and column of the offending token
//! - The offending source text as context
//! - A cap on how many diagnostics one session may report
//!
//! Diagnostics never change tokenization results. A suppressed diagnostic
//! still has its error token; it is only counted, not shown.
//!
//! [`ScanIssue`]: comot_css_core::ScanIssue

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod queue;

pub use diagnostic::{Diagnostic, Severity};
pub use emitter::{ColorMode, DiagnosticSink, TerminalEmitter, TracingSink};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use queue::{too_many_diagnostics, DiagnosticConfig, DiagnosticQueue, DiagnosticStats};

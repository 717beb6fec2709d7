//! CSS tokenizer.
//!
//! Built on `comot_css_core` (decoder and scanner) and
//! `comot_css_diagnostic` (reporting), this crate is what applications use:
//!
//! - [`Arena`]: owns the decoded input and every cooked value
//! - [`Tokenizer`]: `create`, then `next_token` / `peek` or iterate
//! - [`cook`]: escape-resolved token values
//!
//! ```
//! use comot_css::{Arena, TokenTag, Tokenizer, TokenizerConfig};
//!
//! let arena = Arena::default();
//! let config = TokenizerConfig::default();
//! let tokenizer = Tokenizer::create(b"a { color: red }", &arena, &config).unwrap();
//! let tags: Vec<TokenTag> = tokenizer.map(|t| t.tag).collect();
//! assert_eq!(tags.len(), 10);
//! ```
//!
//! Malformed CSS never fails: it produces tokens with [`TokenKind::Error`]
//! and diagnostics. Only [`Tokenizer::create`] can fail, when there is
//! nothing usable to tokenize.

mod arena;
mod config;
pub mod cook;
mod error;
mod tokenizer;

pub use arena::Arena;
pub use config::TokenizerConfig;
pub use cook::{HashFlag, Numeric};
pub use error::CreateError;
pub use tokenizer::Tokenizer;

pub use comot_css_core::{
    DecodeIssue, DecodeLimits, Encoding, NumberType, Span, Token, TokenKind, TokenTag,
};
pub use comot_css_diagnostic::{
    ColorMode, Diagnostic, DiagnosticConfig, DiagnosticSink, DiagnosticStats, ErrorCode,
    Severity, TerminalEmitter, TracingSink,
};

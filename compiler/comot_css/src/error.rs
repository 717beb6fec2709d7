use comot_css_core::DecodeIssue;
use thiserror::Error;

/// Why [`Tokenizer::create`](crate::Tokenizer::create) failed.
///
/// Everything after creation is recoverable and surfaces as error tokens
/// and diagnostics instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateError {
    #[error("input is empty")]
    EmptyInput,

    #[error("input rejected: {0}")]
    Rejected(DecodeIssue),

    #[error("input decodes to no code points")]
    NoCodePoints,

    #[error("arena exhausted: needed {requested} bytes, {remaining} left")]
    ArenaExhausted { requested: usize, remaining: usize },
}

impl From<DecodeIssue> for CreateError {
    fn from(issue: DecodeIssue) -> Self {
        match issue {
            DecodeIssue::EmptyInput => CreateError::EmptyInput,
            other => CreateError::Rejected(other),
        }
    }
}

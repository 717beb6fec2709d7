use comot_css_core::DecodeLimits;
use comot_css_diagnostic::DiagnosticConfig;

/// Everything a tokenizer session can be tuned with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenizerConfig {
    pub decode: DecodeLimits,
    pub diagnostics: DiagnosticConfig,
    /// Encoding label supplied by the caller, e.g. from an HTTP header.
    ///
    /// Overrides `@charset`, but not a byte order mark.
    pub charset_hint: Option<String>,
}

impl TokenizerConfig {
    #[must_use]
    pub fn with_decode_limits(mut self, decode: DecodeLimits) -> Self {
        self.decode = decode;
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: DiagnosticConfig) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Cap reported diagnostics (0 = unlimited).
    #[must_use]
    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.diagnostics.error_limit = error_limit;
        self
    }

    /// Count diagnostics without reporting any.
    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.diagnostics.enabled = false;
        self
    }

    #[must_use]
    pub fn with_charset_hint(mut self, label: impl Into<String>) -> Self {
        self.charset_hint = Some(label.into());
        self
    }
}

//! The public tokenizer.
//!
//! [`Tokenizer`] ties the pieces together: it decodes the input once, moves
//! the decoded entries into the caller's [`Arena`], drives a core
//! [`Scanner`], and turns the scanner's issues into throttled diagnostics.
//!
//! A tokenizer is not `Sync` (its arena is not), and must be advanced from
//! one place at a time.

use std::mem;

use comot_css_core::{decode, DecodedEntry, Encoding, Scanner, Span, Token, TokenTag};
use comot_css_diagnostic::{
    Diagnostic, DiagnosticQueue, DiagnosticSink, DiagnosticStats, ErrorCode, TracingSink,
};
use tracing::{debug, warn};

use crate::cook::{self, HashFlag, Numeric};
use crate::{Arena, CreateError, TokenizerConfig};

/// Code points of source text quoted in a diagnostic.
const CONTEXT_LEN: usize = 40;

/// Tokenizer over one input buffer.
///
/// Tokens borrow nothing; they index the decoded entries and the input
/// bytes, which both outlive the tokenizer (`'a`). Cooked values are
/// allocated in the arena and share that lifetime.
///
/// ```
/// use comot_css::{Arena, TokenTag, Tokenizer, TokenizerConfig};
///
/// let arena = Arena::default();
/// let mut tokenizer =
///     Tokenizer::create(b"@media print", &arena, &TokenizerConfig::default()).unwrap();
/// let token = tokenizer.next_token();
/// assert_eq!(token.tag, TokenTag::AtKeyword);
/// assert_eq!(tokenizer.value(&token), Some("media"));
/// ```
pub struct Tokenizer<'a, S: DiagnosticSink = TracingSink> {
    input: &'a [u8],
    arena: &'a Arena,
    entries: &'a [DecodedEntry],
    byte_end: u32,
    encoding: Encoding,
    truncated: bool,
    scanner: Scanner<'a>,
    queue: DiagnosticQueue,
    sink: S,
    /// Token returned by `peek` and not yet by `next_token`.
    peeked: Option<Token>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer that logs diagnostics through `tracing`.
    ///
    /// Fails if the input is empty, rejected by the decoder, decodes to
    /// nothing, or does not fit in `arena`.
    pub fn create(
        input: &'a [u8],
        arena: &'a Arena,
        config: &TokenizerConfig,
    ) -> Result<Self, CreateError> {
        Tokenizer::create_with_sink(input, arena, config, TracingSink)
    }
}

impl<'a, S: DiagnosticSink> Tokenizer<'a, S> {
    /// Create a tokenizer that reports diagnostics to `sink`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = input.len()))]
    pub fn create_with_sink(
        input: &'a [u8],
        arena: &'a Arena,
        config: &TokenizerConfig,
        sink: S,
    ) -> Result<Self, CreateError> {
        let decoded = decode(input, config.charset_hint.as_deref(), &config.decode);
        if let Some(issue) = decoded.issue() {
            return Err(issue.into());
        }
        if decoded.is_empty() {
            return Err(CreateError::NoCodePoints);
        }

        let entries = arena
            .alloc_slice_copy(decoded.entries())
            .ok_or_else(|| CreateError::ArenaExhausted {
                requested: mem::size_of_val(decoded.entries()),
                remaining: arena.remaining(),
            })?;
        let byte_end = decoded.byte_end();
        debug!(
            encoding = %decoded.encoding(),
            entries = entries.len(),
            arena_used = arena.used(),
            "tokenizer created"
        );

        let mut tokenizer = Tokenizer {
            input,
            arena,
            entries,
            byte_end,
            encoding: decoded.encoding(),
            truncated: decoded.is_truncated(),
            scanner: Scanner::new(entries, byte_end),
            queue: DiagnosticQueue::with_config(config.diagnostics.clone()),
            sink,
            peeked: None,
        };
        if tokenizer.truncated {
            let diag = Diagnostic::new(ErrorCode::C0007).with_message(format!(
                "input exceeds the size limit; only the first {byte_end} bytes are tokenized"
            ));
            tokenizer.queue.report(diag, &mut tokenizer.sink);
        }
        Ok(tokenizer)
    }

    /// Return the next token.
    ///
    /// After the end of input every call returns an `Eof` token at the same
    /// position.
    pub fn next_token(&mut self) -> Token {
        match self.peeked.take() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    /// Return the next token without consuming it.
    ///
    /// The token is scanned once; its diagnostics are reported now, not
    /// again when [`next_token`](Self::next_token) returns it.
    pub fn peek(&mut self) -> Token {
        if let Some(token) = self.peeked {
            return token;
        }
        let token = self.scan();
        self.peeked = Some(token);
        token
    }

    /// The token's bytes in the original input.
    pub fn raw(&self, token: &Token) -> &'a [u8] {
        self.input.get(token.bytes.to_range()).unwrap_or_default()
    }

    /// The token's decoded, normalized source text.
    pub fn text(&self, token: &Token) -> String {
        cook::text(self.slice(token))
    }

    /// The token's cooked value, allocated in the arena.
    ///
    /// `None` for tags without a text value (see [`cook::cook`]) and when
    /// the arena is out of budget.
    pub fn value(&self, token: &Token) -> Option<&'a str> {
        let cooked = cook::cook(token.tag, self.slice(token))?;
        self.alloc(&cooked)
    }

    /// Value, type flag and unit of a number, percentage or dimension.
    pub fn numeric(&self, token: &Token) -> Option<Numeric<'a>> {
        if !matches!(
            token.tag,
            TokenTag::Number | TokenTag::Percentage | TokenTag::Dimension
        ) {
            return None;
        }
        let entries = self.slice(token);
        let (value, kind, len) = cook::number(entries)?;
        let unit = if token.tag == TokenTag::Dimension {
            Some(self.alloc(&cook::ident(&entries[len..]))?)
        } else {
            None
        };
        Some(Numeric { value, kind, unit })
    }

    /// Type flag of a hash token; `None` for other tags.
    pub fn hash_flag(&self, token: &Token) -> Option<HashFlag> {
        (token.tag == TokenTag::Hash).then(|| cook::hash_flag(self.slice(token)))
    }

    /// The decoded, normalized input.
    pub fn entries(&self) -> &'a [DecodedEntry] {
        self.entries
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Whether the input was cut at a size limit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// How many diagnostics were reported and suppressed so far.
    pub fn diagnostic_stats(&self) -> DiagnosticStats {
        self.queue.stats()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// End the session: send the summary to the sink and return it.
    pub fn finish(mut self) -> S {
        self.queue.finish(&mut self.sink);
        self.sink
    }

    fn scan(&mut self) -> Token {
        let token = self.scanner.next_token();
        if !self.scanner.issues().is_empty() {
            self.report_issues();
        }
        token
    }

    #[cold]
    fn report_issues(&mut self) {
        let (entries, byte_end) = (self.entries, self.byte_end);
        for issue in self.scanner.drain_issues() {
            let bytes = byte_span(entries, byte_end, issue.span);
            let context = excerpt(entries.get(issue.span.to_range()).unwrap_or_default());
            let diag = Diagnostic::from_scan_issue(&issue, bytes, context);
            self.queue.report(diag, &mut self.sink);
        }
    }

    fn slice(&self, token: &Token) -> &'a [DecodedEntry] {
        self.entries.get(token.span.to_range()).unwrap_or_default()
    }

    fn alloc(&self, s: &str) -> Option<&'a str> {
        let value = self.arena.alloc_str(s);
        if value.is_none() {
            warn!(
                len = s.len(),
                remaining = self.arena.remaining(),
                "arena exhausted; dropping cooked value"
            );
        }
        value
    }
}

impl<S: DiagnosticSink> Iterator for Tokenizer<'_, S> {
    type Item = Token;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

/// Byte range of the entries in `span`.
fn byte_span(entries: &[DecodedEntry], byte_end: u32, span: Span) -> Span {
    let offset = |index: u32| {
        entries
            .get(index as usize)
            .map_or(byte_end, |entry| entry.byte_offset)
    };
    Span::new(offset(span.start), offset(span.end))
}

/// Source text for a diagnostic, shortened to `CONTEXT_LEN` code points.
fn excerpt(entries: &[DecodedEntry]) -> String {
    let mut out = cook::text(&entries[..entries.len().min(CONTEXT_LEN)]);
    if entries.len() > CONTEXT_LEN {
        out.push_str("...");
    }
    out
}

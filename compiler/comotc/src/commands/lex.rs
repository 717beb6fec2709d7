//! The `lex` command: print the tokens of a stylesheet.

use std::fmt::Write as _;
use std::io::IsTerminal;

use comot_css::{
    Arena, Diagnostic, DiagnosticSink, ErrorCode, HashFlag, NumberType, TerminalEmitter, Token,
    TokenTag, Tokenizer,
};

use super::read_file;
use crate::options::LexOptions;

/// Tokenize the file at `path`. Returns `false` if any error was reported.
pub fn lex_file(path: &str, options: &LexOptions) -> bool {
    let content = read_file(path);
    lex_source(&content, path, options)
}

/// Tokenize `input`, naming it `origin` in diagnostics.
///
/// Tokens go to stdout, diagnostics and the closing summary to stderr.
/// Returns `false` if any error was reported.
pub fn lex_source(input: &[u8], origin: &str, options: &LexOptions) -> bool {
    let config = options.tokenizer_config();
    let is_tty = std::io::stderr().is_terminal();
    let emitter = TerminalEmitter::stderr(options.color, is_tty).with_origin(origin);

    let arena = Arena::for_input(input.len());
    let mut tokenizer = match Tokenizer::create_with_sink(input, &arena, &config, emitter) {
        Ok(tokenizer) => tokenizer,
        Err(err) => {
            // The first emitter went down with the failed tokenizer.
            let mut emitter = TerminalEmitter::stderr(options.color, is_tty).with_origin(origin);
            let diag = Diagnostic::new(ErrorCode::C0008).with_message(err.to_string());
            emitter.report(&diag);
            emitter.flush();
            return false;
        }
    };

    println!(
        "Tokens for '{origin}' ({}, {} code points):",
        tokenizer.encoding(),
        tokenizer.entries().len()
    );
    let mut count = 0usize;
    loop {
        let token = tokenizer.next_token();
        if token.is_eof() {
            break;
        }
        count += 1;
        println!("  {}", describe(&tokenizer, &token));
    }
    println!("{count} token{}", if count == 1 { "" } else { "s" });

    let emitter = tokenizer.finish();
    emitter.error_count() == 0
}

/// One output line: the token, then its cooked value or numeric reading.
fn describe<S: DiagnosticSink>(tokenizer: &Tokenizer<'_, S>, token: &Token) -> String {
    let mut line = token.to_string();
    match token.tag {
        TokenTag::Number | TokenTag::Percentage | TokenTag::Dimension => {
            if let Some(numeric) = tokenizer.numeric(token) {
                let kind = match numeric.kind {
                    NumberType::Integer => "integer",
                    NumberType::Number => "number",
                };
                let _ = write!(line, "  {} ({kind})", numeric.value);
                if let Some(unit) = numeric.unit {
                    let _ = write!(line, " unit {unit:?}");
                }
            }
        }
        TokenTag::Hash => {
            if let (Some(value), Some(flag)) = (tokenizer.value(token), tokenizer.hash_flag(token))
            {
                let flag = match flag {
                    HashFlag::Id => "id",
                    HashFlag::Unrestricted => "unrestricted",
                };
                let _ = write!(line, "  {value:?} ({flag})");
            }
        }
        TokenTag::Whitespace | TokenTag::Comment => {}
        _ => {
            if let Some(value) = tokenizer.value(token) {
                let _ = write!(line, "  {value:?}");
            }
        }
    }
    line
}

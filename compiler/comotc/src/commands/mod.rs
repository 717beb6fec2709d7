//! Command handlers for the comot CLI.
//!
//! Shared helpers like `read_file` live here in the module root.

mod explain;
mod lex;

pub use explain::explain_error;
pub use lex::{lex_file, lex_source};

/// Read a file as raw bytes, exiting with a message on failure.
///
/// Bytes rather than a `String`: the tokenizer does its own decoding, and
/// UTF-16 stylesheets are not valid UTF-8.
pub(crate) fn read_file(path: &str) -> Vec<u8> {
    match std::fs::read(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

//! Comot CSS tokenizer CLI.

use std::sync::Once;

mod commands;
mod options;

use commands::{explain_error, lex_file, lex_source};
use options::LexOptions;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// `RUST_LOG=comot_css=debug comot lex style.css` shows decoder and
/// tokenizer events on stderr.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            let options = match LexOptions::parse(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!();
                    print_lex_usage();
                    std::process::exit(1);
                }
            };
            let clean = match &options.inline {
                Some(css) => lex_source(css.as_bytes(), "<inline>", &options),
                None => {
                    let Some(path) = options.path.as_deref() else {
                        eprintln!("error: missing file path");
                        eprintln!();
                        print_lex_usage();
                        std::process::exit(1);
                    };
                    lex_file(path, &options)
                }
            };
            if !clean {
                std::process::exit(1);
            }
        }
        "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: comot explain <code>");
                eprintln!("Example: comot explain C0002");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("comot {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Comot CSS tokenizer");
    println!();
    println!("Usage: comot <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>       Tokenize a stylesheet and print its tokens");
    println!("  lex -e <css>     Tokenize CSS given on the command line");
    println!("  explain <code>   Explain a diagnostic code (e.g. C0002)");
    println!("  help             Show this message");
    println!("  version          Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=comot_css=debug) for tracing output.");
}

fn print_lex_usage() {
    eprintln!("Usage: comot lex <file> [options]");
    eprintln!("       comot lex -e <css> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --max-errors=<n>     Report at most n diagnostics (0 = unlimited, default 10)");
    eprintln!("  --quiet              Do not report diagnostics");
    eprintln!("  --charset=<label>    Encoding to assume when there is no byte-order mark");
    eprintln!("  --color=<mode>       auto, always or never (default auto)");
}

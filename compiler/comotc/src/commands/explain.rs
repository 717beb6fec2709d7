//! The `explain` command: display documentation for diagnostic codes.

use comot_css_diagnostic::ErrorCode;

/// Print the documentation for `code_str`, or exit 1 if the code is unknown.
pub fn explain_error(code_str: &str) {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format CXXXX where X is a digit.");
        let known: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        eprintln!("Known codes: {}", known.join(", "));
        std::process::exit(1);
    };

    if let Some(doc) = code.explain() {
        println!("{doc}");
    } else {
        eprintln!("No documentation available for {code}: {}", code.title());
        std::process::exit(1);
    }
}

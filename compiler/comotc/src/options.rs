//! Option parsing for `comot lex`.

use comot_css::{ColorMode, TokenizerConfig};

/// Parsed `lex` arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Stylesheet to read.
    pub path: Option<String>,
    /// CSS passed with `-e`, used instead of `path`.
    pub inline: Option<String>,
    /// `None` keeps the default limit.
    pub max_errors: Option<usize>,
    pub quiet: bool,
    pub charset: Option<String>,
    pub color: ColorMode,
}

impl LexOptions {
    /// Parse everything after `lex`.
    ///
    /// `-e` takes the following argument; every other option uses the
    /// `--name=value` form.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = LexOptions::default();
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            if arg == "-e" {
                let Some(css) = args.get(i + 1) else {
                    return Err("-e requires a CSS argument".to_string());
                };
                options.inline = Some(css.clone());
                i += 2;
                continue;
            }

            if arg == "--quiet" || arg == "-q" {
                options.quiet = true;
            } else if let Some(n) = arg.strip_prefix("--max-errors=") {
                let limit = n
                    .parse()
                    .map_err(|_| format!("invalid --max-errors value '{n}'"))?;
                options.max_errors = Some(limit);
            } else if let Some(label) = arg.strip_prefix("--charset=") {
                options.charset = Some(label.to_string());
            } else if let Some(mode) = arg.strip_prefix("--color=") {
                options.color = ColorMode::from_flag(mode)
                    .ok_or_else(|| format!("invalid --color value '{mode}'"))?;
            } else if arg.starts_with('-') {
                return Err(format!("unknown option '{arg}'"));
            } else if options.path.is_none() {
                options.path = Some(arg.to_string());
            } else {
                return Err(format!("unexpected argument '{arg}'"));
            }
            i += 1;
        }

        if options.path.is_some() && options.inline.is_some() {
            return Err("pass either a file or -e, not both".to_string());
        }
        Ok(options)
    }

    /// Tokenizer configuration for these options.
    pub fn tokenizer_config(&self) -> TokenizerConfig {
        let mut config = TokenizerConfig::default();
        if let Some(limit) = self.max_errors {
            config = config.with_error_limit(limit);
        }
        if self.quiet {
            config = config.quiet();
        }
        if let Some(label) = &self.charset {
            config = config.with_charset_hint(label.clone());
        }
        config
    }
}

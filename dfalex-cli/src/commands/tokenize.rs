//! Tokenize command implementation.
//!
//! Reads source text from a file or stdin, scans it and dumps the token
//! stream to stdout. Diagnostics for error tokens go to stderr.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use dfalex_lex::{Scanner, Token};
use dfalex_util::Handler;

use crate::commands::common::{write_tokens, OutputFormat};
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{CliError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// File to scan; stdin when absent.
    pub file: Option<PathBuf>,
    /// Read all of stdin instead of its first line.
    pub all: bool,
    /// Dump format; falls back to the configured one.
    pub format: Option<OutputFormat>,
    /// Fail when any error token is produced.
    pub deny_errors: bool,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
    config: Config,
}

impl TokenizeCommand {
    /// Effective dump format.
    pub fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.output.format)
    }

    /// Whether error tokens fail the command.
    pub fn deny_errors(&self) -> bool {
        self.args.deny_errors || self.config.output.deny_errors
    }

    /// Read the source text.
    ///
    /// A file is always read whole. From `stdin` only the first line is
    /// taken, without its line terminator, unless `--all` was given.
    fn read_source<R: BufRead>(&self, mut stdin: R) -> Result<String> {
        if let Some(path) = &self.args.file {
            debug!("reading {}", path.display());
            return fs::read_to_string(path).map_err(|e| {
                CliError::Validation(format!("cannot read {}: {}", path.display(), e))
            });
        }

        let mut source = String::new();
        if self.args.all {
            stdin.read_to_string(&mut source)?;
        } else {
            stdin.read_line(&mut source)?;
            let trimmed = source.trim_end_matches(['\n', '\r']).len();
            source.truncate(trimmed);
        }
        Ok(source)
    }

    /// Scan, dump and report. Returns the number of tokens produced.
    pub fn run_with<R, W, E>(&self, stdin: R, out: &mut W, err: &mut E) -> Result<usize>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let source = self.read_source(stdin)?;
        let lexicon = self.config.lexicon()?;
        let handler = Handler::new();

        let tokens: Vec<Token> = Scanner::with_lexicon(&source, &handler, &lexicon).collect();
        write_tokens(out, &tokens, self.format())?;
        out.flush()?;

        for diagnostic in handler.diagnostics() {
            write!(err, "{}", diagnostic.render(&source))?;
        }

        let errors = handler.error_count();
        debug!(
            "{} tokens, {} errors, dumped as {}",
            tokens.len(),
            errors,
            self.format().as_str()
        );
        if errors > 0 && self.deny_errors() {
            return Err(CliError::LexErrors { count: errors });
        }
        Ok(tokens.len())
    }
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = usize;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs, config: Config) -> Result<()> {
    let command = TokenizeCommand::new(args, config);
    debug!("running {}", TokenizeCommand::name());
    command.execute().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexiconConfig;
    use tempfile::TempDir;

    fn run(args: TokenizeArgs, config: Config, stdin: &str) -> (Result<usize>, String, String) {
        let command = TokenizeCommand::new(args, config);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = command.run_with(stdin.as_bytes(), &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_reads_first_line_only() {
        let (result, out, err) = run(TokenizeArgs::default(), Config::default(), "a b\r\nc\n");
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out, "<ID, a> <ID, b> \n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_reads_all_of_stdin() {
        let args = TokenizeArgs {
            all: true,
            ..Default::default()
        };
        let (result, out, _) = run(args, Config::default(), "a\nb\n");
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out, "<ID, a> <ID, b> \n");
    }

    #[test]
    fn test_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.c");
        fs::write(&path, "return 0;\n// end\n").unwrap();

        let args = TokenizeArgs {
            file: Some(path),
            format: Some(OutputFormat::Lines),
            ..Default::default()
        };
        let (result, out, _) = run(args, Config::default(), "");
        assert_eq!(result.unwrap(), 4);
        assert_eq!(
            out,
            "1:1\t<KEYWORD, return>\n1:8\t<NUMBER, 0>\n1:9\t<SEMICOLON, ;>\n2:1\t<COMMENT, // end>\n"
        );
    }

    #[test]
    fn test_missing_file() {
        let args = TokenizeArgs {
            file: Some(PathBuf::from("/nonexistent/input.c")),
            ..Default::default()
        };
        let (result, _, _) = run(args, Config::default(), "");
        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn test_errors_reported_but_allowed() {
        let (result, out, err) = run(TokenizeArgs::default(), Config::default(), "x @");
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out, "<ID, x> <ERROR, @> \n");
        assert!(err.contains("error[E1001]: unexpected character `@`"), "{err}");
    }

    #[test]
    fn test_deny_errors_flag() {
        let args = TokenizeArgs {
            deny_errors: true,
            ..Default::default()
        };
        let (result, out, _) = run(args, Config::default(), "\"open");
        assert!(matches!(result, Err(CliError::LexErrors { count: 1 })));
        assert_eq!(out, "<ERROR, \"open> \n");
    }

    #[test]
    fn test_config_supplies_defaults() {
        let mut config = Config::default();
        config.output.deny_errors = true;
        config.output.format = OutputFormat::Json;
        config.lexicon = LexiconConfig {
            keywords: vec!["let".to_string()],
        };

        let command = TokenizeCommand::new(TokenizeArgs::default(), config.clone());
        assert_eq!(command.format(), OutputFormat::Json);
        assert!(command.deny_errors());

        let args = TokenizeArgs {
            format: Some(OutputFormat::Repr),
            ..Default::default()
        };
        let (result, out, _) = run(args, config, "let x");
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out, "<KEYWORD, let> <ID, x> \n");
    }

    #[test]
    fn test_invalid_configured_keyword() {
        let mut config = Config::default();
        config.lexicon.keywords = vec!["not valid".to_string()];
        let (result, _, _) = run(TokenizeArgs::default(), config, "x");
        assert!(matches!(result, Err(CliError::Validation(_))));
    }
}

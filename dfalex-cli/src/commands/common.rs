//! Common types and utilities for dfalex commands.
//!
//! Output formats and the writers that dump a token stream in each of them.

use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use dfalex_lex::Token;

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported token dump formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<KIND, lexeme>` for every token, space separated, on one line.
    #[default]
    Repr,
    /// One token per line, prefixed with `line:column`.
    Lines,
    /// A JSON array of token records.
    Json,
}

impl OutputFormat {
    /// Name used on the command line and in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Repr => "repr",
            Self::Lines => "lines",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Token Output
// ============================================================================

/// A token as serialized by the `json` format.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    lexeme: &'a str,
    line: u32,
    column: u32,
    start: usize,
    end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let span = token.span();
        Self {
            kind: token.kind().as_str(),
            lexeme: token.lexeme(),
            line: span.line,
            column: span.column,
            start: span.start,
            end: span.end,
            error: token.error().map(|e| e.to_string()),
        }
    }
}

/// Write `tokens` to `out` in the given format.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Repr => {
            for token in tokens {
                write!(out, "{} ", token)?;
            }
            writeln!(out)?;
        },
        OutputFormat::Lines => {
            for token in tokens {
                writeln!(out, "{}\t{}", token.span(), token)?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}

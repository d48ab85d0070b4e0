//! dfalex-lex - a table-driven lexical analyzer
//!
//! This crate turns a finite in-memory string into an ordered list of
//! classified tokens in a single left-to-right pass, without backtracking.
//!
//! # Overview
//!
//! Scanning is split in two:
//!
//! - the **state machine** ([`ScanState::step`]) decides, one character at a
//!   time, where a token ends and the next one begins;
//! - the **classifier** ([`classify`], [`Lexicon::classify`]) decides what kind
//!   of token the finished text is.
//!
//! # Example Usage
//!
//! ```
//! use dfalex_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize(r#"if (x) { "hi there" }"#);
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword,
//!         TokenKind::LParen,
//!         TokenKind::Identifier,
//!         TokenKind::RParen,
//!         TokenKind::LBrace,
//!         TokenKind::String,
//!         TokenKind::RBrace,
//!     ]
//! );
//! assert_eq!(tokens[5].to_string(), "<STRING, hi there>");
//! ```
//!
//! Diagnostics for malformed input are collected on a
//! [`Handler`](dfalex_util::Handler):
//!
//! ```
//! use dfalex_util::Handler;
//! use dfalex_lex::Scanner;
//!
//! let handler = Handler::new();
//! let tokens: Vec<_> = Scanner::new("a @ b", &handler).collect();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(handler.error_count(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - `Token` and `TokenKind`
//! - [`lexicon`] - keyword/punctuation/operator tables and the classifier
//! - [`lexer`] - the state machine and the `Scanner`
//! - [`cursor`] - character cursor with line and column tracking
//! - [`error`] - lexical error kinds
//!
//! # Token Categories
//!
//! - **Keywords**: `if else while for do return break continue int float char void`
//! - **Identifiers**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Numbers**: digits with an optional single `.`, e.g. `42`, `3.14`
//! - **Strings**: `"..."` with `\` escapes, may span lines
//! - **Comments**: `// ...` and nesting `/* ... */`
//! - **Operators**: `+ - * / % = == != < <= > >= ! && || . ->`
//! - **Punctuation**: `( ) { } [ ] ; ,`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod lexicon;
pub mod token;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexErrorKind;
pub use lexer::{Finished, ScanState, Scanner, Step};
pub use lexicon::{classify, Category, CharClass, Lexicon};
pub use token::{Token, TokenKind};

use dfalex_util::Handler;

/// Tokenizes `input` with the default lexicon.
///
/// Never fails: malformed input shows up as [`TokenKind::Error`] tokens.
/// Use [`tokenize_with`] to also collect diagnostics.
pub fn tokenize(input: &str) -> Vec<Token> {
    let handler = Handler::new();
    tokenize_with(input, &handler)
}

/// Tokenizes `input`, reporting every error token to `handler`.
pub fn tokenize_with(input: &str, handler: &Handler) -> Vec<Token> {
    let tokens: Vec<Token> = Scanner::new(input, handler).collect();
    log::debug!(
        "tokenized {} bytes: {} tokens, {} errors",
        input.len(),
        tokens.len(),
        tokens.iter().filter(|t| t.is_error()).count()
    );
    tokens
}

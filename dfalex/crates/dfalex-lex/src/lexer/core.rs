//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, which drives the state machine
//! over the input, finalizes tokens and reports lexical errors.

use std::mem;

use log::{debug, trace};

use dfalex_util::{Handler, Span};

use super::{Finished, ScanState, Step};
use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::LexErrorKind;
use crate::lexicon::Lexicon;
use crate::token::{Token, TokenKind};

/// Scanner over a single input.
///
/// The scanner owns its state and cursor; nothing is shared between scans
/// except the read-only [`Lexicon`]. Every error token is also reported as a
/// diagnostic on the handler.
pub struct Scanner<'a> {
    /// Character cursor for input traversal.
    cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a Handler,

    /// Keyword, punctuation and operator tables.
    lexicon: &'a Lexicon,

    /// The token attempt in progress.
    state: ScanState,

    /// Where the token attempt in progress started.
    token_start: CursorSnapshot,

    /// Number of tokens handed out so far.
    emitted: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner using the default lexicon.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_lexicon(source, handler, Lexicon::global())
    }

    /// Creates a scanner using a caller-supplied lexicon.
    pub fn with_lexicon(source: &'a str, handler: &'a Handler, lexicon: &'a Lexicon) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            lexicon,
            state: ScanState::Empty,
            token_start: CursorSnapshot::default(),
            emitted: 0,
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Each character is fed to the transition function exactly once, except
    /// a character that terminates a token without being part of it: that one
    /// is offered again to the now empty state.
    pub fn next_token(&mut self) -> Option<Token> {
        while let Some(ch) = self.cursor.current_char() {
            let state = mem::take(&mut self.state);
            if state.is_empty() {
                self.token_start = self.cursor.snapshot();
            }

            match state.step(ch, self.lexicon) {
                Step::Skip => self.cursor.advance(),
                Step::Pending(next) => {
                    self.cursor.advance();
                    self.state = next;
                },
                Step::Emit(finished) => {
                    self.cursor.advance();
                    return Some(self.finalize(finished));
                },
                Step::Yield(finished) => return Some(self.finalize(finished)),
            }
        }

        match mem::take(&mut self.state).finish() {
            Some(finished) => Some(self.finalize(finished)),
            None => {
                if self.emitted > 0 || self.cursor.position() > 0 {
                    debug!(
                        "scanned {} bytes into {} tokens",
                        self.cursor.position(),
                        self.emitted
                    );
                }
                None
            },
        }
    }

    /// Turns a finished attempt into a token and resets accumulation.
    fn finalize(&mut self, finished: Finished) -> Token {
        let start = self.token_start;
        let span = Span::new(start.position, self.cursor.position(), start.line, start.column);
        debug_assert_eq!(self.cursor.slice_from(start.position), finished.text);

        let kind = self.lexicon.classify(&finished.text, finished.category);
        let lexeme = match kind {
            TokenKind::String => strip_quotes(finished.text),
            _ => finished.text,
        };
        let token = Token::new(kind, lexeme, span);

        if let TokenKind::Error(error) = kind {
            self.report(error, &token);
        }
        trace!("{} at {}", token, span);

        self.emitted += 1;
        token
    }

    /// Reports an error token as a diagnostic.
    fn report(&self, error: LexErrorKind, token: &Token) {
        let message = if error.is_unterminated() {
            error.to_string()
        } else {
            format!("{} `{}`", error, token.lexeme().escape_debug())
        };
        debug!("{} at {}", message, token.span());

        self.handler
            .build_error(token.span(), message)
            .code(error.code())
            .help(error.help())
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the input.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// The lexicon this scanner classifies against.
    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// Drops the surrounding quotes of a closed string literal.
fn strip_quotes(text: String) -> String {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        text[1..text.len() - 1].to_owned()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dfalex_util::DiagnosticCode;

    fn scan(source: &str) -> (Vec<Token>, Handler) {
        let handler = Handler::new();
        let tokens = Scanner::new(source, &handler).collect();
        (tokens, handler)
    }

    #[test]
    fn test_next_token_sequence() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("if (x)", &handler);

        assert_eq!(scanner.next_token().map(|t| t.kind()), Some(TokenKind::Keyword));
        assert_eq!(scanner.next_token().map(|t| t.kind()), Some(TokenKind::LParen));
        assert_eq!(scanner.next_token().map(|t| t.kind()), Some(TokenKind::Identifier));
        assert_eq!(scanner.next_token().map(|t| t.kind()), Some(TokenKind::RParen));
        assert_eq!(scanner.next_token(), None);
        assert_eq!(scanner.next_token(), None);
    }

    #[test]
    fn test_terminator_is_reoffered() {
        let (tokens, _) = scan("abc(");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme(), "abc");
        assert_eq!(tokens[1].kind(), TokenKind::LParen);
        assert_eq!(tokens[1].span(), Span::new(3, 4, 1, 4));
    }

    #[test]
    fn test_spans_track_lines() {
        let (tokens, _) = scan("a\n  bc");
        assert_eq!(tokens[0].span(), Span::new(0, 1, 1, 1));
        assert_eq!(tokens[1].span(), Span::new(4, 6, 2, 3));
    }

    #[test]
    fn test_string_span_includes_quotes() {
        let (tokens, _) = scan("x = \"hi\"");
        let string = &tokens[2];
        assert_eq!(string.kind(), TokenKind::String);
        assert_eq!(string.lexeme(), "hi");
        assert_eq!(string.span(), Span::new(4, 8, 1, 5));
    }

    #[test]
    fn test_error_tokens_emit_diagnostics() {
        let (tokens, handler) = scan("a @ \"open");
        assert_eq!(tokens.len(), 3);
        assert_eq!(handler.error_count(), 2);

        let diags = handler.diagnostics();
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEX_UNEXPECTED_CHAR));
        assert_eq!(diags[0].message, "unexpected character `@`");
        assert_eq!(diags[0].span, Span::new(2, 3, 1, 3));
        assert_eq!(diags[1].code, Some(DiagnosticCode::E_LEX_UNTERMINATED_STRING));
        assert_eq!(diags[1].message, "unterminated string literal");
        assert_eq!(diags[1].helps.len(), 1);
    }

    #[test]
    fn test_clean_input_reports_nothing() {
        let handler = Handler::new_panicking();
        let tokens: Vec<Token> = Scanner::new("while (i < 10) { i = i + 1; }", &handler).collect();
        assert_eq!(tokens.len(), 14);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_custom_lexicon() {
        let handler = Handler::new();
        let lexicon = Lexicon::new().with_keywords(["let"]);
        let tokens: Vec<Token> = Scanner::with_lexicon("let x", &handler, &lexicon).collect();
        assert_eq!(tokens[0].kind(), TokenKind::Keyword);
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_position_accessors() {
        let handler = Handler::new();
        let mut scanner = Scanner::new("ab\ncd", &handler);
        let _ = scanner.next_token();
        assert_eq!(scanner.position(), 2);
        assert_eq!(scanner.line(), 1);
        let _ = scanner.next_token();
        assert_eq!(scanner.line(), 2);
        assert_eq!(scanner.column(), 3);
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"\"".into()), "");
        assert_eq!(strip_quotes("\"a b\"".into()), "a b");
        assert_eq!(strip_quotes("\"\\\"\"".into()), "\\\"");
    }
}

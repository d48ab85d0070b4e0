//! Token type definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the lexeme that produced it and the
//! [`Span`] it occupies in the input. Tokens are immutable once built.

use std::fmt;

use dfalex_util::Span;

use crate::error::LexErrorKind;
use crate::lexicon::Category;

/// The closed set of token categories.
///
/// New punctuation, operators or keywords are added to the
/// [`Lexicon`](crate::Lexicon) tables, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// Any spelling from the operator table (`+`, `==`, `->`, ...).
    Operator,
    /// A reserved word.
    Keyword,
    /// A name that is not a reserved word.
    Identifier,
    /// A decimal number, optionally with a fraction.
    Number,
    /// A string literal. The lexeme is the body without the quotes.
    String,
    /// A line or block comment, delimiters included.
    Comment,
    /// Malformed input; the payload says why.
    Error(LexErrorKind),
}

impl TokenKind {
    /// Display name used in the `<KIND, lexeme>` form.
    ///
    /// ```
    /// use dfalex_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::LBrace.as_str(), "L-CURLY-BRACE");
    /// assert_eq!(TokenKind::Identifier.as_str(), "ID");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::LParen => "LPAR",
            TokenKind::RParen => "RPAR",
            TokenKind::LBrace => "L-CURLY-BRACE",
            TokenKind::RBrace => "R-CURLY-BRACE",
            TokenKind::LBracket => "L-BRACKET",
            TokenKind::RBracket => "R-BRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Operator => "OP",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "ID",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Error(_) => "ERROR",
        }
    }

    /// Returns true for single-character punctuation.
    pub const fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::Semicolon
                | TokenKind::Comma
        )
    }

    /// Returns true for error tokens.
    pub const fn is_error(self) -> bool {
        matches!(self, TokenKind::Error(_))
    }

    /// The scanner category a lexeme of this kind is classified under.
    ///
    /// `classify(lexeme, kind.category())` gives back `kind` for every
    /// token the scanner emits.
    pub const fn category(self) -> Category {
        match self {
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::Semicolon
            | TokenKind::Comma => Category::Punctuation,
            TokenKind::Operator | TokenKind::Error(LexErrorKind::UnknownOperator) => {
                Category::Operator
            },
            TokenKind::Keyword | TokenKind::Identifier => Category::Identifier,
            TokenKind::Number => Category::Number,
            TokenKind::String => Category::String,
            TokenKind::Comment => Category::Comment,
            TokenKind::Error(LexErrorKind::UnexpectedChar) => Category::Unrecognized,
            TokenKind::Error(LexErrorKind::UnterminatedString) => Category::UnterminatedString,
            TokenKind::Error(LexErrorKind::UnterminatedComment) => Category::UnterminatedComment,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme.
///
/// # Example
///
/// ```
/// use dfalex_lex::{Token, TokenKind};
/// use dfalex_util::Span;
///
/// let token = Token::new(TokenKind::Keyword, "if", Span::new(0, 2, 1, 1));
/// assert_eq!(token.to_string(), "<KEYWORD, if>");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    span: Span,
}

static_assertions::assert_impl_all!(Token: Send, Sync);

impl Token {
    /// Builds a token. Only the scanner needs to call this.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The text that produced this token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Where the token sits in the input, delimiters included.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns true if this is an error token.
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    /// The error cause, for error tokens.
    pub fn error(&self) -> Option<LexErrorKind> {
        match self.kind {
            TokenKind::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.kind, self.lexeme)
    }
}

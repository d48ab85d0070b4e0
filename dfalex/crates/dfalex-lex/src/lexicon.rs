//! Lexicon tables and the classifier.
//!
//! Everything the scanner needs to know about the concrete language lives
//! here as data: which characters start which token family, which words are
//! reserved, which characters are punctuation and which spellings are
//! operators. Extending the language means editing these tables.
//!
//! The default lexicon is built once, on first use, and never mutated.
//! Custom lexicons are assembled with [`Lexicon::with_keywords`] before a
//! scan starts and are only ever read during it.

use lazy_static::lazy_static;

use dfalex_util::{FxHashMap, FxHashSet};

use crate::error::LexErrorKind;
use crate::token::TokenKind;

/// Reserved words recognized by the default lexicon (case-sensitive).
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "do", "return", "break", "continue", "int", "float", "char",
    "void",
];

/// Operator spellings recognized by every lexicon.
///
/// The scanner munches the longest spelling that is a prefix of the input,
/// so `==` wins over `=` and `->` over `-`.
pub const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "==", "!=", "<", "<=", ">", ">=", "!", "&&", "||", ".", "->",
];

/// Single-character punctuation and the kind each one maps to.
pub const PUNCTUATION: &[(char, TokenKind)] = &[
    ('(', TokenKind::LParen),
    (')', TokenKind::RParen),
    ('{', TokenKind::LBrace),
    ('}', TokenKind::RBrace),
    ('[', TokenKind::LBracket),
    (']', TokenKind::RBracket),
    (';', TokenKind::Semicolon),
    (',', TokenKind::Comma),
];

/// The token family a scan attempt belongs to.
///
/// Decided by the scanner (mostly at the attempt's first character) and
/// handed to [`Lexicon::classify`] together with the finished lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Letters, digits and underscores; may turn out to be a keyword.
    Identifier,
    /// Digits with an optional fraction.
    Number,
    /// A closed string literal.
    String,
    /// A line comment, or a closed block comment.
    Comment,
    /// A single punctuation character.
    Punctuation,
    /// A maximal run matching operator prefixes.
    Operator,
    /// A character that starts nothing.
    Unrecognized,
    /// A string literal cut off by end of input.
    UnterminatedString,
    /// A block comment cut off by end of input.
    UnterminatedComment,
}

/// How a character behaves when no token is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Separates tokens and is discarded.
    Whitespace,
    /// Starts a number.
    Digit,
    /// Starts an identifier or keyword.
    IdentStart,
    /// Starts a string literal.
    Quote,
    /// Starts a division operator or a comment.
    Slash,
    /// A complete one-character token on its own.
    Punctuation,
    /// First character of some operator spelling.
    OperatorStart,
    /// Starts nothing.
    Other,
}

lazy_static! {
    static ref DEFAULT_LEXICON: Lexicon = Lexicon::new();
}

/// The keyword, punctuation and operator tables.
#[derive(Clone, Debug)]
pub struct Lexicon {
    keywords: FxHashSet<String>,
    punctuation: FxHashMap<char, TokenKind>,
    operators: FxHashSet<&'static str>,
}

static_assertions::assert_impl_all!(Lexicon: Send, Sync);

impl Lexicon {
    /// Builds the default lexicon.
    pub fn new() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_owned()).collect(),
            punctuation: PUNCTUATION.iter().copied().collect(),
            operators: OPERATORS.iter().copied().collect(),
        }
    }

    /// The shared, process-wide default lexicon.
    pub fn global() -> &'static Lexicon {
        &DEFAULT_LEXICON
    }

    /// Adds extra reserved words.
    ///
    /// ```
    /// use dfalex_lex::{Category, Lexicon, TokenKind};
    ///
    /// let lexicon = Lexicon::new().with_keywords(["fn", "let"]);
    /// assert_eq!(lexicon.classify("let", Category::Identifier), TokenKind::Keyword);
    /// assert_eq!(lexicon.classify("lets", Category::Identifier), TokenKind::Identifier);
    /// ```
    pub fn with_keywords<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Returns true if `word` is reserved.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// All reserved words, sorted.
    pub fn keywords(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.keywords.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Returns true if `text` is a complete operator spelling.
    pub fn is_operator(&self, text: &str) -> bool {
        self.operators.contains(text)
    }

    /// Returns true if `text` followed by `ch` is still a prefix of some
    /// operator spelling.
    pub fn extends_operator(&self, text: &str, ch: char) -> bool {
        self.operators.iter().any(|op| {
            op.len() > text.len() && op.starts_with(text) && op[text.len()..].starts_with(ch)
        })
    }

    /// The punctuation kind of `ch`, if it is punctuation.
    pub fn punctuation(&self, ch: char) -> Option<TokenKind> {
        self.punctuation.get(&ch).copied()
    }

    /// Start-of-token behaviour of `ch`.
    pub fn char_class(&self, ch: char) -> CharClass {
        if ch.is_whitespace() {
            CharClass::Whitespace
        } else if ch.is_ascii_digit() {
            CharClass::Digit
        } else if ch.is_ascii_alphabetic() || ch == '_' {
            CharClass::IdentStart
        } else if ch == '"' {
            CharClass::Quote
        } else if ch == '/' {
            CharClass::Slash
        } else if self.punctuation.contains_key(&ch) {
            CharClass::Punctuation
        } else if self.operators.iter().any(|op| op.starts_with(ch)) {
            CharClass::OperatorStart
        } else {
            CharClass::Other
        }
    }

    /// Maps a finished lexeme to its token kind.
    ///
    /// Keywords are recognized only here, after the whole identifier has been
    /// accumulated, so `iffy` can never be mistaken for `if`.
    pub fn classify(&self, lexeme: &str, category: Category) -> TokenKind {
        debug_assert!(
            !lexeme.is_empty() || category == Category::String,
            "empty lexeme for {:?}",
            category
        );

        match category {
            Category::Identifier if self.is_keyword(lexeme) => TokenKind::Keyword,
            Category::Identifier => TokenKind::Identifier,
            Category::Number => TokenKind::Number,
            Category::String => TokenKind::String,
            Category::Comment => TokenKind::Comment,
            Category::Punctuation => {
                let mut chars = lexeme.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => self
                        .punctuation(ch)
                        .unwrap_or(TokenKind::Error(LexErrorKind::UnexpectedChar)),
                    _ => TokenKind::Error(LexErrorKind::UnexpectedChar),
                }
            },
            Category::Operator if self.is_operator(lexeme) => TokenKind::Operator,
            Category::Operator => TokenKind::Error(LexErrorKind::UnknownOperator),
            Category::Unrecognized => TokenKind::Error(LexErrorKind::UnexpectedChar),
            Category::UnterminatedString => TokenKind::Error(LexErrorKind::UnterminatedString),
            Category::UnterminatedComment => TokenKind::Error(LexErrorKind::UnterminatedComment),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies `lexeme` against the default lexicon.
///
/// ```
/// use dfalex_lex::{classify, Category, TokenKind};
///
/// assert_eq!(classify("if", Category::Identifier), TokenKind::Keyword);
/// assert_eq!(classify("iffy", Category::Identifier), TokenKind::Identifier);
/// assert_eq!(classify("{", Category::Punctuation), TokenKind::LBrace);
/// ```
pub fn classify(lexeme: &str, category: Category) -> TokenKind {
    Lexicon::global().classify(lexeme, category)
}

//! Scanner module.
//!
//! The scanner is a character-at-a-time state machine. This module holds the
//! state type and the transition function; the per-family transitions live in
//! smaller, focused submodules:
//! - `core` - Scanner struct, token finalization and diagnostics
//! - `identifier` - identifier and keyword accumulation
//! - `number` - number accumulation
//! - `string` - string literal bodies and escapes
//! - `operator` - operator munching and comment introducers
//! - `comment` - line and block comment bodies

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Scanner;

use crate::lexicon::{Category, CharClass, Lexicon};

/// The scanner's working memory for the token currently being recognized.
///
/// Every non-empty variant carries the text accumulated so far, opening
/// delimiters included. The state is reset to [`ScanState::Empty`] exactly
/// when a token is finalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScanState {
    /// No token in progress.
    #[default]
    Empty,
    /// Inside an identifier or keyword.
    Identifier(String),
    /// Inside a number; `fraction` is set once a `.` has been taken.
    Number {
        /// Digits (and at most one `.`) so far.
        text: String,
        /// Whether a fraction point was already consumed.
        fraction: bool,
    },
    /// Inside an operator spelling.
    Operator(String),
    /// Inside a string literal.
    String {
        /// Opening quote plus body so far.
        text: String,
        /// Whether the previous character was an unconsumed `\`.
        escaped: bool,
    },
    /// Inside a `//` comment.
    LineComment(String),
    /// Inside a `/* */` comment.
    BlockComment {
        /// Everything from the opening `/*` so far.
        text: String,
        /// Number of currently open `/*`.
        depth: u32,
        /// A `/` or `*` that may pair with the next character.
        pending: Option<char>,
    },
}

/// A completed token attempt, before classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finished {
    /// The family the attempt belongs to.
    pub category: Category,
    /// The full accumulated text, delimiters included.
    pub text: String,
}

impl Finished {
    fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

/// Outcome of feeding one character to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Character is whitespace between tokens; drop it.
    Skip,
    /// Character consumed; the token continues in the given state.
    Pending(ScanState),
    /// Character consumed and it completes the token.
    Emit(Finished),
    /// The token ended before this character, which must be offered again
    /// to an empty state.
    Yield(Finished),
}

impl ScanState {
    /// Returns true if no token is in progress.
    pub fn is_empty(&self) -> bool {
        matches!(self, ScanState::Empty)
    }

    /// Text accumulated so far.
    pub fn text(&self) -> &str {
        match self {
            ScanState::Empty => "",
            ScanState::Identifier(text)
            | ScanState::Operator(text)
            | ScanState::LineComment(text)
            | ScanState::Number { text, .. }
            | ScanState::String { text, .. }
            | ScanState::BlockComment { text, .. } => text,
        }
    }

    /// The transition function: total over every `(state, char)` pair.
    ///
    /// ```
    /// use dfalex_lex::{Lexicon, ScanState, Step};
    ///
    /// let lexicon = Lexicon::global();
    /// let Step::Pending(state) = ScanState::Empty.step('i', lexicon) else { panic!() };
    /// let Step::Pending(state) = state.step('f', lexicon) else { panic!() };
    /// assert_eq!(state.text(), "if");
    /// assert!(matches!(state.step(' ', lexicon), Step::Yield(_)));
    /// ```
    pub fn step(self, ch: char, lexicon: &Lexicon) -> Step {
        match self {
            ScanState::Empty => start(ch, lexicon),
            ScanState::Identifier(text) => identifier::step(text, ch),
            ScanState::Number { text, fraction } => number::step(text, fraction, ch),
            ScanState::Operator(text) => operator::step(text, ch, lexicon),
            ScanState::String { text, escaped } => string::step(text, escaped, ch),
            ScanState::LineComment(text) => comment::step_line(text, ch),
            ScanState::BlockComment {
                text,
                depth,
                pending,
            } => comment::step_block(text, depth, pending, ch),
        }
    }

    /// Finalizes whatever is in progress when the input runs out.
    ///
    /// Open strings and block comments become unterminated-literal errors.
    pub fn finish(self) -> Option<Finished> {
        let finished = match self {
            ScanState::Empty => return None,
            ScanState::Identifier(text) => Finished::new(Category::Identifier, text),
            ScanState::Number { text, .. } => Finished::new(Category::Number, text),
            ScanState::Operator(text) => Finished::new(Category::Operator, text),
            ScanState::LineComment(text) => Finished::new(Category::Comment, text),
            ScanState::String { text, .. } => Finished::new(Category::UnterminatedString, text),
            ScanState::BlockComment { text, .. } => {
                Finished::new(Category::UnterminatedComment, text)
            },
        };
        Some(finished)
    }
}

/// Transition out of the empty state, driven by the character-class table.
fn start(ch: char, lexicon: &Lexicon) -> Step {
    match lexicon.char_class(ch) {
        CharClass::Whitespace => Step::Skip,
        CharClass::Digit => Step::Pending(ScanState::Number {
            text: ch.to_string(),
            fraction: false,
        }),
        CharClass::IdentStart => Step::Pending(ScanState::Identifier(ch.to_string())),
        CharClass::Quote => Step::Pending(ScanState::String {
            text: ch.to_string(),
            escaped: false,
        }),
        CharClass::Slash | CharClass::OperatorStart => {
            Step::Pending(ScanState::Operator(ch.to_string()))
        },
        CharClass::Punctuation => Step::Emit(Finished::new(Category::Punctuation, ch)),
        CharClass::Other => Step::Emit(Finished::new(Category::Unrecognized, ch)),
    }
}

/// Appends `ch` and hands back the buffer.
fn push(mut text: String, ch: char) -> String {
    text.push(ch);
    text
}

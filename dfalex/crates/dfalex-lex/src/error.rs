//! Lexical error kinds.
//!
//! Errors never abort a scan. Each one is carried by an
//! [`TokenKind::Error`](crate::TokenKind::Error) token and mirrored as a
//! diagnostic on the scanner's [`Handler`](dfalex_util::Handler).

use dfalex_util::DiagnosticCode;
use thiserror::Error;

/// Why a lexeme was turned into an error token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token family.
    #[error("unexpected character")]
    UnexpectedChar,

    /// A string literal still open at end of input.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A block comment still open at end of input.
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// An operator prefix (such as a lone `&`) that is not itself an operator.
    #[error("unknown operator")]
    UnknownOperator,
}

impl LexErrorKind {
    /// Diagnostic code reported alongside this error.
    pub const fn code(self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnexpectedChar => DiagnosticCode::E_LEX_UNEXPECTED_CHAR,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEX_UNTERMINATED_STRING,
            LexErrorKind::UnterminatedComment => DiagnosticCode::E_LEX_UNTERMINATED_COMMENT,
            LexErrorKind::UnknownOperator => DiagnosticCode::E_LEX_UNKNOWN_OPERATOR,
        }
    }

    /// Short fix-it suggestion for the diagnostic.
    pub const fn help(self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedChar => "remove this character or place it inside a string",
            LexErrorKind::UnterminatedString => "add a closing `\"` to end the string",
            LexErrorKind::UnterminatedComment => "add a closing `*/` to end the comment",
            LexErrorKind::UnknownOperator => "this is only the start of an operator",
        }
    }

    /// Whether the error was caused by input ending too early.
    pub const fn is_unterminated(self) -> bool {
        matches!(
            self,
            LexErrorKind::UnterminatedString | LexErrorKind::UnterminatedComment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(LexErrorKind::UnexpectedChar.to_string(), "unexpected character");
        assert_eq!(
            LexErrorKind::UnterminatedString.to_string(),
            "unterminated string literal"
        );
        assert_eq!(
            LexErrorKind::UnterminatedComment.to_string(),
            "unterminated block comment"
        );
        assert_eq!(LexErrorKind::UnknownOperator.to_string(), "unknown operator");
    }

    #[test]
    fn test_codes() {
        assert_eq!(LexErrorKind::UnexpectedChar.code().as_str(), "E1001");
        assert_eq!(LexErrorKind::UnterminatedString.code().as_str(), "E1002");
        assert_eq!(LexErrorKind::UnterminatedComment.code().as_str(), "E1003");
        assert_eq!(LexErrorKind::UnknownOperator.code().as_str(), "E1004");
    }

    #[test]
    fn test_unterminated_flag() {
        assert!(LexErrorKind::UnterminatedString.is_unterminated());
        assert!(LexErrorKind::UnterminatedComment.is_unterminated());
        assert!(!LexErrorKind::UnexpectedChar.is_unterminated());
        assert!(!LexErrorKind::UnknownOperator.is_unterminated());
    }
}

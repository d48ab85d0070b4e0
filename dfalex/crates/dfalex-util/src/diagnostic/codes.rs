//! Diagnostic codes for categorizing errors and warnings.
//!
//! # Examples
//!
//! ```
//! use dfalex_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEX_UNEXPECTED_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

use std::fmt;

/// Stable identifier of a diagnostic kind.
///
/// Codes follow the format `{prefix}{number}` where `prefix` is "E" for
/// errors or "W" for warnings and `number` is zero-padded to four digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// A code from its parts.
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Rendered code, e.g. `E1001`.
    pub fn as_str(&self) -> String {
        self.to_string()
    }

    // =========================================================================
    // LEXER ERROR CODES (E1000-E1999)
    // =========================================================================

    /// E1001: A character that cannot start any token
    pub const E_LEX_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: String literal still open at end of input
    pub const E_LEX_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Block comment still open at end of input
    pub const E_LEX_UNTERMINATED_COMMENT: Self = Self::new("E", 1003);
    /// E1004: Operator prefix that is not a complete operator
    pub const E_LEX_UNKNOWN_OPERATOR: Self = Self::new("E", 1004);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

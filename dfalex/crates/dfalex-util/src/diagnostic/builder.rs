//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending source line underneath a message.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// A source code snippet for display in diagnostics
///
/// # Examples
///
/// ```
/// use dfalex_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("if x @ y", 1, 6, 7);
/// assert!(snippet.format().ends_with("|      ^"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Extract the snippet for `span` out of the full `source` text.
    ///
    /// Returns `None` when the span does not point into `source`. Spans that
    /// run across several lines are underlined up to the end of their first
    /// line.
    ///
    /// ```
    /// use dfalex_util::diagnostic::SourceSnippet;
    /// use dfalex_util::Span;
    ///
    /// let source = "a\nb \"open";
    /// let snippet = SourceSnippet::from_source(source, Span::new(4, 9, 2, 3)).unwrap();
    /// assert_eq!(snippet.line, "b \"open");
    /// assert_eq!(snippet.start_column, 3);
    /// assert_eq!(snippet.end_column, 8);
    /// ```
    pub fn from_source(source: &str, span: Span) -> Option<Self> {
        if span.line == 0 {
            return None;
        }
        let line = source.lines().nth(span.line as usize - 1)?;
        let covered = source.get(span.range())?;
        let width = covered.chars().take_while(|c| *c != '\n').count();
        let start_column = span.column as usize;
        Some(Self::new(
            line,
            span.line as usize,
            start_column,
            start_column + width,
        ))
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret (`^`) underline of the
    /// highlighted columns.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use dfalex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use dfalex_util::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unexpected character '@'")
///     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
///     .span(Span::new(0, 1, 1, 1))
///     .help("remove this character")
///     .emit(&handler);
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Starts a diagnostic with no location.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Starts an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Stable code printed in brackets after the level.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Where in the input the problem is.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Suggested fix.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// The finished diagnostic.
    pub fn build(self) -> Diagnostic {
        let Self {
            level,
            message,
            span,
            code,
            helps,
        } = self;
        Diagnostic {
            code,
            helps,
            ..Diagnostic::new(level, message, span)
        }
    }

    /// Builds and records on `handler` in one go.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

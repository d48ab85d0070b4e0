//! Diagnostics: what went wrong, where, and how to fix it.
//!
//! The scanner never fails; instead every malformed piece of input becomes an
//! error token plus a [`Diagnostic`] collected on a [`Handler`]. Front ends
//! render the collected diagnostics against the source text afterwards.
//!
//! # Examples
//!
//! ```
//! use dfalex_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use dfalex_util::Span;
//!
//! let handler = Handler::new();
//! handler
//!     .build_error(Span::new(2, 3, 1, 3), "unexpected character '@'")
//!     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! let report = handler.diagnostics()[0].render("a @ b");
//! assert!(report.starts_with("error[E1001]: unexpected character '@'"));
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// How serious a diagnostic is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// The input is malformed.
    Error,
}

impl Level {
    /// Lowercase name, as printed in report headers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity.
    pub level: Level,
    /// One-line summary, printed in the header.
    pub message: String,
    /// Offending region of the input; [`Span::DUMMY`] if there is none.
    pub span: Span,
    /// Stable code such as `E1001`.
    pub code: Option<DiagnosticCode>,
    /// `= help:` lines.
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// A bare diagnostic with no code or helps.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Shorthand for [`Level::Error`].
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Render the diagnostic as a multi-line report against `source`.
    ///
    /// The report has a `level[code]: message` header, a `--> line:column`
    /// locator, the offending source line with a caret underline, and any
    /// helps.
    pub fn render(&self, source: &str) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };

        if self.span != Span::DUMMY {
            out.push_str(&format!("  --> {}\n", self.span));
        }

        if let Some(snippet) = SourceSnippet::from_source(source, self.span) {
            out.push_str(&snippet.format());
            out.push('\n');
        }

        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {} at {}", self.level, code, self.message, self.span),
            None => write!(f, "{}: {} at {}", self.level, self.message, self.span),
        }
    }
}

/// Collects diagnostics during a scan.
///
/// Emitting takes `&self`; the list lives in a `RefCell`, so a scanner can
/// hold a shared reference while callers inspect the results afterwards.
/// A panicking handler turns the first error into a panic, for tests that
/// expect clean input.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    panic_on_error: bool,
}

impl Handler {
    /// An empty, non-panicking handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that panics as soon as an error is emitted.
    pub fn new_panicking() -> Self {
        Self {
            panic_on_error: true,
            ..Self::default()
        }
    }

    /// Records `diagnostic`.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("unexpected {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Starts an error at `span`; finish it with [`DiagnosticBuilder::emit`].
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics.borrow().iter().filter(|d| d.level == level).count()
    }

    /// Returns true once any error was recorded.
    pub fn has_errors(&self) -> bool {
        self.count(Level::Error) > 0
    }

    /// Number of errors recorded.
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Snapshot of everything recorded, oldest first.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().to_vec()
    }
}

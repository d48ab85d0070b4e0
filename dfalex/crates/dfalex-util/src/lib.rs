//! dfalex-util - Shared foundation types for the dfalex toolchain
//!
//! This crate holds the pieces that every other dfalex crate leans on:
//!
//! - [`span`] - byte ranges with line/column information
//! - [`diagnostic`] - error reporting (codes, builder, handler, rendering)
//!
//! It also re-exports the fast `FxHashMap`/`FxHashSet` so downstream crates
//! share a single hasher choice.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::Span;

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;

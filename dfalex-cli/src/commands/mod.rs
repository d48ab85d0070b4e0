//! Command modules for the dfalex CLI.
//!
//! Each subcommand is implemented in its own file following the same
//! pattern: an args struct, a handler implementing [`traits::Command`] and a
//! `run_*` entry point.

pub mod common;
pub mod traits;

pub mod keywords;
pub mod tokenize;

// Re-export command types and functions
pub use keywords::{run_keywords, KeywordsArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};

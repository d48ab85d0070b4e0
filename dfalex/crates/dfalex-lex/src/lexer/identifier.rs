//! Identifier and keyword accumulation.
//!
//! Identifiers are `[A-Za-z_][A-Za-z0-9_]*`. Whether the finished word is a
//! keyword is decided by the classifier, never while accumulating.

use super::{push, Finished, ScanState, Step};
use crate::lexicon::Category;

/// Returns true if `ch` can continue an identifier.
fn is_ident_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

pub(super) fn step(text: String, ch: char) -> Step {
    if is_ident_continue(ch) {
        Step::Pending(ScanState::Identifier(push(text, ch)))
    } else {
        Step::Yield(Finished::new(Category::Identifier, text))
    }
}

//! String literal bodies.
//!
//! A string absorbs every character, whitespace and newlines included, until
//! an unescaped `"`. A backslash escapes whatever follows it. Escapes are kept
//! verbatim in the lexeme; decoding them is left to later stages.

use super::{push, Finished, ScanState, Step};
use crate::lexicon::Category;

pub(super) fn step(text: String, escaped: bool, ch: char) -> Step {
    let text = push(text, ch);
    match ch {
        _ if escaped => Step::Pending(ScanState::String {
            text,
            escaped: false,
        }),
        '\\' => Step::Pending(ScanState::String {
            text,
            escaped: true,
        }),
        '"' => Step::Emit(Finished::new(Category::String, text)),
        _ => Step::Pending(ScanState::String {
            text,
            escaped: false,
        }),
    }
}

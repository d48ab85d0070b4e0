//! Operator munching.
//!
//! An operator keeps growing while the text so far plus the next character is
//! still a prefix of some spelling in the operator table. `/` is special: a
//! following `/` or `*` turns it into a comment instead.

use super::{push, Finished, ScanState, Step};
use crate::lexicon::{Category, Lexicon};

pub(super) fn step(text: String, ch: char, lexicon: &Lexicon) -> Step {
    let introduces_comment = text == "/";
    match ch {
        '/' if introduces_comment => Step::Pending(ScanState::LineComment(push(text, ch))),
        '*' if introduces_comment => Step::Pending(ScanState::BlockComment {
            text: push(text, ch),
            depth: 1,
            pending: None,
        }),
        _ if lexicon.extends_operator(&text, ch) => {
            Step::Pending(ScanState::Operator(push(text, ch)))
        },
        _ => Step::Yield(Finished::new(Category::Operator, text)),
    }
}

//! Number accumulation.
//!
//! Numbers are decimal digits with at most one fraction point: `42`, `3.14`,
//! `7.`. A second `.` or any non-digit ends the number; the terminating
//! character starts the next token, so `12ab` is `12` followed by `ab`.

use super::{push, Finished, ScanState, Step};
use crate::lexicon::Category;

pub(super) fn step(text: String, fraction: bool, ch: char) -> Step {
    match ch {
        '0'..='9' => Step::Pending(ScanState::Number {
            text: push(text, ch),
            fraction,
        }),
        '.' if !fraction => Step::Pending(ScanState::Number {
            text: push(text, ch),
            fraction: true,
        }),
        _ => Step::Yield(Finished::new(Category::Number, text)),
    }
}

//! Comment bodies.
//!
//! Line comments run up to, not including, the next line break. Block
//! comments nest: every `/*` inside one needs its own `*/`.

use super::{push, Finished, ScanState, Step};
use crate::lexicon::Category;

pub(super) fn step_line(text: String, ch: char) -> Step {
    match ch {
        '\n' | '\r' => Step::Yield(Finished::new(Category::Comment, text)),
        _ => Step::Pending(ScanState::LineComment(push(text, ch))),
    }
}

pub(super) fn step_block(text: String, depth: u32, pending: Option<char>, ch: char) -> Step {
    let text = push(text, ch);
    match (pending, ch) {
        (Some('*'), '/') if depth <= 1 => Step::Emit(Finished::new(Category::Comment, text)),
        (Some('*'), '/') => Step::Pending(ScanState::BlockComment {
            text,
            depth: depth - 1,
            pending: None,
        }),
        (Some('/'), '*') => Step::Pending(ScanState::BlockComment {
            text,
            depth: depth.saturating_add(1),
            pending: None,
        }),
        (_, '*' | '/') => Step::Pending(ScanState::BlockComment {
            text,
            depth,
            pending: Some(ch),
        }),
        _ => Step::Pending(ScanState::BlockComment {
            text,
            depth,
            pending: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    /// Feeds `rest` into a freshly opened block comment.
    fn run_block(rest: &str) -> Step {
        let mut state = ScanState::BlockComment {
            text: "/*".into(),
            depth: 1,
            pending: None,
        };
        let mut chars = rest.chars().peekable();
        while let Some(ch) = chars.next() {
            match state.step(ch, Lexicon::global()) {
                Step::Pending(next) => state = next,
                done if chars.peek().is_none() => return done,
                other => panic!("comment ended early: {other:?}"),
            }
        }
        Step::Pending(state)
    }

    #[test]
    fn test_line_comment_absorbs_whitespace() {
        assert_eq!(
            step_line("//".into(), ' '),
            Step::Pending(ScanState::LineComment("// ".into()))
        );
    }

    #[test]
    fn test_line_comment_stops_at_newline() {
        assert_eq!(
            step_line("// hi".into(), '\n'),
            Step::Yield(Finished::new(Category::Comment, "// hi"))
        );
    }

    #[test]
    fn test_block_comment_closes() {
        assert_eq!(
            run_block(" body */"),
            Step::Emit(Finished::new(Category::Comment, "/* body */"))
        );
    }

    #[test]
    fn test_block_comment_slash_star_slash_is_still_open() {
        assert!(matches!(run_block("/"), Step::Pending(_)));
    }

    #[test]
    fn test_block_comment_empty_body() {
        assert_eq!(
            run_block("*/"),
            Step::Emit(Finished::new(Category::Comment, "/**/"))
        );
    }

    #[test]
    fn test_block_comments_nest() {
        assert_eq!(
            run_block(" a /* b */ c */"),
            Step::Emit(Finished::new(Category::Comment, "/* a /* b */ c */"))
        );
    }

    #[test]
    fn test_block_comment_spans_lines() {
        assert_eq!(
            run_block("\n  x\n*/"),
            Step::Emit(Finished::new(Category::Comment, "/*\n  x\n*/"))
        );
    }
}

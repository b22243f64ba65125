//! Language-aware case folding.
//!
//! Each mode first runs the alphabet's own table for that mode
//! (`pre_lower`, `pre_upper`, `pre_title`), then the generic mapping:
//!
//! * **Lower**: the compiled generic lowercase table, then `i`/`ı` followed
//!   by U+0307 (possibly after other marks) collapses to plain `i`.
//! * **Upper**: full Unicode uppercase.
//! * **Title**: the first character takes its titlecase form, the rest is
//!   folded as Lower.

use crate::alphabet::{Alphabet, CaseMode, Step};
use crate::context::Context;
use crate::registry::generic_lowercase;
use crate::stage::Stage;
use crate::unicode::{COMBINING_DOT_ABOVE, changes_in_upper, is_combining_mark, push_titlecase};
use smallvec::SmallVec;
use std::borrow::Cow;

#[derive(Debug, Default, Clone, Copy)]
pub struct CaseFold;

impl Stage for CaseFold {
    fn name(&self) -> &'static str {
        "case_fold"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        match ctx.mode {
            CaseMode::Lower => needs_lower(ctx.alphabet, text),
            CaseMode::Upper => {
                pre_table_matches(ctx.alphabet, Step::PreUpper, text)
                    || text.chars().any(changes_in_upper)
            }
            CaseMode::Title => !text.is_empty(),
        }
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        match ctx.mode {
            CaseMode::Lower => lower(ctx.alphabet, text),
            CaseMode::Upper => upper(ctx.alphabet, text),
            CaseMode::Title => title(ctx.alphabet, text),
        }
    }
}

#[inline]
fn pre_table_matches(alphabet: &Alphabet, step: Step, text: &str) -> bool {
    alphabet.step(step).is_some_and(|t| t.needs_apply(text))
}

#[inline]
fn with_pre_table<'a>(alphabet: &Alphabet, step: Step, text: Cow<'a, str>) -> Cow<'a, str> {
    match alphabet.step(step) {
        Some(table) => table.apply(text),
        None => text,
    }
}

fn needs_lower(alphabet: &Alphabet, text: &str) -> bool {
    pre_table_matches(alphabet, Step::PreLower, text)
        || generic_lowercase().needs_apply(text)
        || text.contains(COMBINING_DOT_ABOVE)
}

fn lower<'a>(alphabet: &Alphabet, text: Cow<'a, str>) -> Cow<'a, str> {
    let text = with_pre_table(alphabet, Step::PreLower, text);
    let text = generic_lowercase().apply(text);
    collapse_dotted_i(text)
}

fn upper<'a>(alphabet: &Alphabet, text: Cow<'a, str>) -> Cow<'a, str> {
    let text = with_pre_table(alphabet, Step::PreUpper, text);
    if !text.chars().any(changes_in_upper) {
        return text;
    }
    Cow::Owned(text.chars().flat_map(char::to_uppercase).collect())
}

fn title<'a>(alphabet: &Alphabet, text: Cow<'a, str>) -> Cow<'a, str> {
    let Some(first) = text.chars().next() else {
        return text;
    };
    let split = first.len_utf8();
    let out = {
        let head = with_pre_table(alphabet, Step::PreTitle, Cow::Borrowed(&text[..split]));
        let mut head_chars = head.chars();
        let mut out = String::with_capacity(text.len() + 4);
        if let Some(c) = head_chars.next() {
            push_titlecase(&mut out, c);
        }
        out.push_str(head_chars.as_str());
        out.push_str(&lower(alphabet, Cow::Borrowed(&text[split..])));
        out
    };
    if out == *text {
        return text;
    }
    Cow::Owned(out)
}

/// `i`/`ı` + marks containing U+0307 → `i` + the other marks.
fn collapse_dotted_i(text: Cow<'_, str>) -> Cow<'_, str> {
    if !text.contains(COMBINING_DOT_ABOVE) {
        return text;
    }
    let mut out = String::with_capacity(text.len());
    let mut changed = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != 'i' && c != '\u{131}' {
            out.push(c);
            continue;
        }
        let mut marks: SmallVec<[char; 4]> = SmallVec::new();
        while let Some(&m) = chars.peek() {
            if !is_combining_mark(m) {
                break;
            }
            marks.push(m);
            chars.next();
        }
        match marks.iter().position(|&m| m == COMBINING_DOT_ABOVE) {
            Some(dot) => {
                marks.remove(dot);
                out.push('i');
                changed = true;
            }
            None => out.push(c),
        }
        out.extend(marks);
    }
    if changed { Cow::Owned(out) } else { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{default_alphabet, lookup};

    fn fold<'a>(code: &str, mode: CaseMode, text: &'a str) -> Cow<'a, str> {
        let alphabet = lookup(code).unwrap();
        CaseFold.apply(Cow::Borrowed(text), &Context::new(alphabet, mode))
    }

    #[test]
    fn lowercase_uses_generic_table() {
        assert_eq!(fold("rus", CaseMode::Lower, "ЁЛКА"), "ёлка");
        assert_eq!(fold("eng", CaseMode::Lower, "Hello"), "hello");
    }

    #[test]
    fn turkish_lowercase_keeps_dotless_i() {
        assert_eq!(fold("tur", CaseMode::Lower, "ISPARTA"), "\u{131}sparta");
        assert_eq!(fold("tur", CaseMode::Lower, "\u{130}zmir"), "izmir");
        // Generic folding turns İ into i + U+0307, which then collapses.
        assert_eq!(fold("eng", CaseMode::Lower, "\u{130}"), "i");
        assert_eq!(fold("eng", CaseMode::Lower, "I"), "i");
    }

    #[test]
    fn dot_above_collapses_after_other_marks() {
        assert_eq!(fold("eng", CaseMode::Lower, "i\u{301}\u{307}x"), "i\u{301}x");
        assert_eq!(fold("eng", CaseMode::Lower, "\u{131}\u{307}"), "i");
        assert_eq!(fold("eng", CaseMode::Lower, "a\u{307}"), "a\u{307}");
    }

    #[test]
    fn turkish_uppercase() {
        assert_eq!(fold("tur", CaseMode::Upper, "istanbul"), "\u{130}STANBUL");
        assert_eq!(fold("tur", CaseMode::Upper, "\u{131}\u{15F}\u{131}k"), "I\u{15E}IK");
        assert_eq!(fold("eng", CaseMode::Upper, "istanbul"), "ISTANBUL");
    }

    #[test]
    fn titlecase() {
        assert_eq!(fold("tur", CaseMode::Title, "izMIR"), "\u{130}zm\u{131}r");
        assert_eq!(fold("eng", CaseMode::Title, "lONDON"), "London");
        assert_eq!(fold("eng", CaseMode::Title, "\u{1C6}ep"), "\u{1C5}ep");
        assert_eq!(fold("eng", CaseMode::Title, ""), "");
    }

    #[test]
    fn unchanged_text_stays_borrowed() {
        let ctx = Context::new(default_alphabet(), CaseMode::Lower);
        assert!(!CaseFold.needs_apply("already lower", &ctx));
        let out = CaseFold.apply(Cow::Borrowed("already lower"), &ctx);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert!(matches!(fold("eng", CaseMode::Title, "Paris"), Cow::Borrowed(_)));
    }
}

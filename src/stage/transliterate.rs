//! One translit slot of the chain: pre-converter, derenyxer or converter.

use crate::alphabet::Step;
use crate::context::Context;
use crate::stage::Stage;
use std::borrow::Cow;

/// Applies the alphabet's table for `step`; a no-op when the slot is empty.
#[derive(Debug, Clone, Copy)]
pub struct Transliterate(pub Step);

impl Stage for Transliterate {
    fn name(&self) -> &'static str {
        self.0.as_str()
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool {
        ctx.alphabet
            .step(self.0)
            .is_some_and(|table| table.needs_apply(text))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        match ctx.alphabet.step(self.0) {
            Some(table) => table.apply(text),
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::CaseMode;
    use crate::lookup;

    #[test]
    fn empty_slot_is_zero_copy() {
        let eng = lookup("eng").unwrap();
        let ctx = Context::new(eng, CaseMode::Lower);
        let stage = Transliterate(Step::Derenyxer);
        assert!(!stage.needs_apply("hello", &ctx));
        assert!(matches!(stage.apply(Cow::Borrowed("hello"), &ctx), Cow::Borrowed(_)));
    }

    #[test]
    fn converter_folds_apostrophes() {
        let ger = lookup("ger").unwrap();
        let ctx = Context::new(ger, CaseMode::Lower);
        let stage = Transliterate(Step::Converter);
        assert!(stage.needs_apply("don’t", &ctx));
        assert_eq!(stage.apply(Cow::Borrowed("don’t"), &ctx), "don't");
        assert!(!stage.needs_apply("don't", &ctx));
    }

    #[test]
    fn derenyxer_restores_cyrillic() {
        let rus = lookup("rus").unwrap();
        let ctx = Context::new(rus, CaseMode::Lower);
        let stage = Transliterate(Step::Derenyxer);
        assert_eq!(stage.name(), "derenyxer");
        assert_eq!(stage.apply(Cow::Borrowed("cop"), &ctx), "сор");
    }
}

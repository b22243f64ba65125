//! Canonical composition and decomposition.
//!
//! [`Nfc`] runs ahead of the pre-converter so that single-codepoint table
//! keys (`ё`, `â`) match text typed with combining marks. [`Nfd`] is the
//! inverse, for custom pipelines whose tables match on base letters and
//! strip or map the marks separately.

use crate::context::Context;
use crate::stage::Stage;
use icu_normalizer::{
    ComposingNormalizer, ComposingNormalizerBorrowed, DecomposingNormalizer,
    DecomposingNormalizerBorrowed,
};
use std::borrow::Cow;
use std::sync::LazyLock;

static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);
static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizer::new_nfd);

/// Unicode Normalization Form C.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nfc;

/// Unicode Normalization Form D.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nfd;

macro_rules! impl_normalization_stage {
    ($stage:ty, $name:literal, $norm:ident) => {
        impl Stage for $stage {
            fn name(&self) -> &'static str {
                $name
            }

            #[inline(always)]
            fn needs_apply(&self, text: &str, _ctx: &Context) -> bool {
                !$norm.is_normalized(text)
            }

            fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Cow<'a, str> {
                if $norm.is_normalized(&text) {
                    return text;
                }
                Cow::Owned($norm.normalize(&text).into_owned())
            }
        }
    };
}

impl_normalization_stage!(Nfc, "nfc", ICU4X_NFC);
impl_normalization_stage!(Nfd, "nfd", ICU4X_NFD);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{CaseMode, Step};
    use crate::process::Pipeline;
    use crate::stage::transliterate::Transliterate;
    use crate::{default_alphabet, lookup};

    fn ctx() -> Context<'static> {
        Context::new(default_alphabet(), CaseMode::Lower)
    }

    #[test]
    fn composes_combining_sequences() {
        let ctx = ctx();
        assert!(Nfc.needs_apply("e\u{308}", &ctx));
        assert_eq!(Nfc.apply(Cow::Borrowed("e\u{308}"), &ctx), "\u{EB}");
        assert_eq!(Nfc.apply(Cow::Borrowed("\u{435}\u{308}"), &ctx), "\u{451}");
    }

    #[test]
    fn composed_text_is_borrowed() {
        let ctx = ctx();
        assert!(!Nfc.needs_apply("ёлка", &ctx));
        assert!(matches!(Nfc.apply(Cow::Borrowed("ёлка"), &ctx), Cow::Borrowed(_)));
    }

    #[test]
    fn decomposes_precomposed_letters() {
        let ctx = ctx();
        assert!(Nfd.needs_apply("\u{E9}", &ctx));
        assert_eq!(Nfd.apply(Cow::Borrowed("caf\u{E9}"), &ctx), "cafe\u{301}");
        assert_eq!(Nfd.apply(Cow::Borrowed("\u{451}лка"), &ctx), "\u{435}\u{308}лка");
        assert!(!Nfd.needs_apply("plain", &ctx));
        assert!(matches!(Nfd.apply(Cow::Borrowed("plain"), &ctx), Cow::Borrowed(_)));
    }

    #[test]
    fn decompose_then_compose_round_trips() {
        let ctx = ctx();
        let nfd = Nfd.apply(Cow::Borrowed("na\u{EF}ve \u{451}"), &ctx);
        assert_eq!(Nfc.apply(nfd, &ctx), "na\u{EF}ve \u{451}");
    }

    #[test]
    fn decomposition_exposes_stress_to_the_derenyxer() {
        let rus = lookup("rus").unwrap();
        let ctx = Context::new(rus, CaseMode::Lower);
        let pipeline = Pipeline::new().push(Nfd).push(Transliterate(Step::Derenyxer));
        assert_eq!(pipeline.process(Cow::Borrowed("c\u{F3}p"), &ctx), "сор");
    }
}

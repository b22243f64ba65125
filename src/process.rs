//! Stage pipelines.
//!
//! A [`Pipeline`] runs its stages in order, skipping any whose `needs_apply`
//! says there is nothing to do. Stages carry no language data, so the two
//! builtin chains are process-wide statics shared by every alphabet.

use crate::alphabet::Step;
use crate::context::Context;
use crate::stage::Stage;
use crate::stage::case_fold::CaseFold;
use crate::stage::normalization::Nfc;
use crate::stage::transliterate::Transliterate;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

/// Pre-converter → case fold → derenyxer → converter.
pub(crate) static NORMALIZE: LazyLock<Pipeline> = LazyLock::new(|| {
    Pipeline::new()
        .push(Transliterate(Step::PreConverter))
        .push(CaseFold)
        .push(Transliterate(Step::Derenyxer))
        .push(Transliterate(Step::Converter))
});

/// NFC → pre-converter.
pub(crate) static PRE_CONVERT: LazyLock<Pipeline> =
    LazyLock::new(|| Pipeline::new().push(Nfc).push(Transliterate(Step::PreConverter)));

#[derive(Default)]
pub struct Pipeline {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 4]>,
}

impl Pipeline {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Stage names in run order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|stage| stage.name())
    }

    pub fn process<'a>(&self, mut text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
        for stage in &self.stages {
            if !stage.needs_apply(&text, ctx) {
                continue;
            }
            text = stage.apply(text, ctx);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::CaseMode;
    use crate::lookup;

    #[test]
    fn chain_order_is_fixed() {
        let names: Vec<_> = NORMALIZE.names().collect();
        assert_eq!(names, ["pre_converter", "case_fold", "derenyxer", "converter"]);
        let names: Vec<_> = PRE_CONVERT.names().collect();
        assert_eq!(names, ["nfc", "pre_converter"]);
    }

    #[test]
    fn custom_pipeline() {
        let rus = lookup("rus").unwrap();
        let ctx = Context::new(rus, CaseMode::Upper);
        let pipeline = Pipeline::new().push(CaseFold);
        assert_eq!(pipeline.process(Cow::Borrowed("ёлка"), &ctx), "ЁЛКА");
        assert!(matches!(
            Pipeline::new().process(Cow::Borrowed("ёлка"), &ctx),
            Cow::Borrowed(_)
        ));
    }
}

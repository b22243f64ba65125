//! Normalization stage abstraction.
//!
//! A stage is one link of an alphabet's normalization chain. Stages are
//! stateless: everything language-specific comes from the [`Context`], so a
//! single pipeline value serves every alphabet.
//!
//! Stages must be zero-copy when they have nothing to do: `apply` on text
//! that `needs_apply` rejects returns its input unchanged, still borrowed if
//! it was borrowed.

pub mod case_fold;
pub mod normalization;
pub mod transliterate;

use crate::context::Context;
use std::borrow::Cow;

/// A single normalization step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in debug output.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> bool;

    /// Allocation-aware transformation.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str>;
}

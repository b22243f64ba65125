//! Per-call state handed to every stage.

use crate::alphabet::{Alphabet, CaseMode};

/// The alphabet being normalized against and the active case mode.
///
/// Cheap to build and `Copy`; stages read their tables through it.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub alphabet: &'a Alphabet,
    pub mode: CaseMode,
}

impl<'a> Context<'a> {
    #[inline(always)]
    pub fn new(alphabet: &'a Alphabet, mode: CaseMode) -> Self {
        Self { alphabet, mode }
    }
}

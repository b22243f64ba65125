//! Leaf vocabulary shared by definitions, the compiler and the emitter.

use std::fmt;

/// One alphabet element: a single codepoint or a short multi-codepoint string.
pub type Unit = String;

/// Collect single codepoints into units.
pub fn units(chars: &[char]) -> Vec<Unit> {
    chars.iter().map(|c| c.to_string()).collect()
}

/// Every scalar value in `start..=end`, in order. Surrogates are skipped.
pub fn range_units(start: u32, end: u32) -> Vec<Unit> {
    (start..=end)
        .filter_map(char::from_u32)
        .map(String::from)
        .collect()
}

/// Per-language character class. Declaration order doubles as the emission
/// order of a descriptor's class lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Required,
    Normal,
    Alien,
    Accidental,
    Sign,
}

impl CharClass {
    pub const ALL: [CharClass; 5] = [
        CharClass::Required,
        CharClass::Normal,
        CharClass::Alien,
        CharClass::Accidental,
        CharClass::Sign,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CharClass::Required => "required",
            CharClass::Normal => "normal",
            CharClass::Alien => "alien",
            CharClass::Accidental => "accidental",
            CharClass::Sign => "sign",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slot in the normalization chain of a descriptor.
///
/// `PreConverter`, `Derenyxer` and `Converter` run in that order around the
/// case fold; `PreLower`/`PreUpper`/`PreTitle` are consulted by the case fold
/// for the matching mode only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    PreConverter,
    PreLower,
    PreUpper,
    PreTitle,
    Derenyxer,
    Converter,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::PreConverter,
        Step::PreLower,
        Step::PreUpper,
        Step::PreTitle,
        Step::Derenyxer,
        Step::Converter,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Step::PreConverter => "pre_converter",
            Step::PreLower => "pre_lower",
            Step::PreUpper => "pre_upper",
            Step::PreTitle => "pre_title",
            Step::Derenyxer => "derenyxer",
            Step::Converter => "converter",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

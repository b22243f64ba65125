//! The compiled language descriptor and its queries.

use crate::context::Context;
use crate::data::{ALPHABETS, CHAR_SETS, DIACRITICS, TRANSLITS};
use crate::process::{NORMALIZE, PRE_CONVERT};
use crate::tables::{CharSet, DiacriticsMap, Translit};
use std::borrow::Cow;
use std::fmt;

/// Class of a character within one alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Required,
    Normal,
    Alien,
    Accidental,
    Sign,
    /// Absent from all five sets.
    Unknown,
}

impl CharClass {
    /// The five declared classes, in table order.
    pub const DECLARED: [CharClass; 5] = [
        CharClass::Required,
        CharClass::Normal,
        CharClass::Alien,
        CharClass::Accidental,
        CharClass::Sign,
    ];

    /// Required or Normal: a native letter.
    #[inline]
    pub const fn is_letter(self) -> bool {
        matches!(self, CharClass::Required | CharClass::Normal)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CharClass::Required => "required",
            CharClass::Normal => "normal",
            CharClass::Alien => "alien",
            CharClass::Accidental => "accidental",
            CharClass::Sign => "sign",
            CharClass::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slot in the normalization chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    PreConverter,
    PreLower,
    PreUpper,
    PreTitle,
    Derenyxer,
    Converter,
}

impl Step {
    #[inline]
    const fn index(self) -> usize {
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

/// Case used by the case-fold step of the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseMode {
    #[default]
    Lower,
    Upper,
    Title,
}

/// One compiled language descriptor.
///
/// Descriptors live in static tables and refer to char sets, translit tables
/// and diacritics maps by handle. A secondary copied from another language
/// reports that language's code; a fully declared one reports its owner's.
#[derive(Debug)]
pub struct Alphabet {
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) classes: [&'static [u16]; 5],
    pub(crate) steps: [Option<u16>; 6],
    pub(crate) diacritics: Option<u16>,
    pub(crate) secondary: Option<u16>,
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Alphabet {}

impl Alphabet {
    /// Three-letter language code.
    #[inline]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// English display name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Char sets making up `class`; empty for [`CharClass::Unknown`].
    pub fn char_sets(&self, class: CharClass) -> impl Iterator<Item = &'static CharSet> + '_ {
        let ids: &'static [u16] = match class {
            CharClass::Unknown => &[],
            declared => self.classes[declared as usize],
        };
        ids.iter().map(|&id| &CHAR_SETS[usize::from(id)])
    }

    /// Table for `step`, if the language defines one.
    #[inline]
    pub fn step(&self, step: Step) -> Option<&'static Translit> {
        self.steps[step.index()].map(|id| &TRANSLITS[usize::from(id)])
    }

    pub fn classify(&self, c: char) -> CharClass {
        CharClass::DECLARED
            .into_iter()
            .find(|&class| self.char_sets(class).any(|set| set.contains_char(c)))
            .unwrap_or(CharClass::Unknown)
    }

    /// Like [`classify`](Self::classify) for a unit that may span several
    /// codepoints.
    pub fn classify_unit(&self, unit: &str) -> CharClass {
        CharClass::DECLARED
            .into_iter()
            .find(|&class| self.char_sets(class).any(|set| set.contains(unit)))
            .unwrap_or(CharClass::Unknown)
    }

    /// Alternate descriptor for romanized or code-switched input.
    #[inline]
    pub fn secondary(&self) -> Option<&'static Alphabet> {
        self.secondary.map(|id| &ALPHABETS[usize::from(id)])
    }

    #[inline]
    pub fn diacritics(&self) -> Option<&'static DiacriticsMap> {
        self.diacritics.map(|id| &DIACRITICS[usize::from(id)])
    }

    /// Ordered candidates for a plain base letter, preferred first.
    pub fn restore_diacritics(&self, letter: &str) -> &'static [&'static str] {
        self.diacritics()
            .map(|map| map.candidates(letter))
            .unwrap_or_default()
    }

    /// Full chain in lowercase mode.
    #[inline]
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.normalize_with(text, CaseMode::Lower)
    }

    /// Pre-converter, case fold in `mode`, derenyxer, converter.
    pub fn normalize_with<'a>(&self, text: &'a str, mode: CaseMode) -> Cow<'a, str> {
        NORMALIZE.process(Cow::Borrowed(text), &Context::new(self, mode))
    }

    /// NFC composition followed by the pre-converter.
    pub fn pre_convert<'a>(&self, text: &'a str) -> Cow<'a, str> {
        PRE_CONVERT.process(Cow::Borrowed(text), &Context::new(self, CaseMode::Lower))
    }

    /// Every character is a native letter or a sign.
    pub fn is_normalized(&self, text: &str) -> bool {
        text.chars().all(|c| {
            matches!(
                self.classify(c),
                CharClass::Required | CharClass::Normal | CharClass::Sign
            )
        })
    }

    /// Every character is classified and at least one is a native letter.
    pub fn accepts(&self, word: &str) -> bool {
        let mut letter = false;
        for c in word.chars() {
            match self.classify(c) {
                CharClass::Unknown => return false,
                class => letter |= class.is_letter(),
            }
        }
        letter
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

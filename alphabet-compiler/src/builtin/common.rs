//! Sets and tables shared across scripts.

use crate::config::GENERIC_LOWERCASE;
use crate::definition::{CharSetDef, Definition, TranslitDef};
use crate::translit::TranslitTable;

pub(super) const APOST_AND_HYPH: &str = "APOST_AND_HYPH";
pub(super) const STRESS: &str = "STRESS";
pub(super) const STRESS_BULGARIAN: &str = "STRESS_BULGARIAN";
pub(super) const CIRCUMFLEX: &str = "CIRCUMFLEX";
pub(super) const LATIN_VOWELS: &str = "LATIN_VOWELS";
pub(super) const LATIN_CONSONANTS: &str = "LATIN_CONSONANTS";

pub(super) const APOSTROPHE_CONVERTER: &str = "APOSTROPHE_CONVERTER";
pub(super) const REMOVE_STRESS: &str = "REMOVE_STRESS";
pub(super) const LOWERCASE: &str = GENERIC_LOWERCASE;

pub(super) const APOSTROPHES: &[char] = &['\'', '\u{2019}'];
pub(super) const HYPHENS: &[char] = &['-'];

pub(super) const LATIN_VOWEL_CHARS: &[char] = &['A', 'E', 'I', 'O', 'U', 'a', 'e', 'i', 'o', 'u'];

#[rustfmt::skip]
pub(super) const LATIN_CONSONANT_CHARS: &[char] = &[
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M',
    'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'X', 'Y', 'Z',
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm',
    'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x', 'y', 'z',
];

/// `(from, to)` pairs to a table.
pub(super) fn table(pairs: &[(char, &str)]) -> TranslitTable {
    TranslitTable::from_pairs(pairs.iter().map(|&(from, to)| (from.to_string(), to)))
}

pub(super) fn definitions() -> Vec<Definition> {
    let apost_and_hyph: Vec<char> = APOSTROPHES.iter().chain(HYPHENS).copied().collect();
    vec![
        CharSetDef::chars(APOST_AND_HYPH, &apost_and_hyph).into(),
        CharSetDef::chars(STRESS, &['\u{301}']).into(),
        CharSetDef::chars(STRESS_BULGARIAN, &['\u{300}']).into(),
        CharSetDef::chars(CIRCUMFLEX, &['\u{302}']).into(),
        CharSetDef::chars(LATIN_VOWELS, LATIN_VOWEL_CHARS).into(),
        CharSetDef::chars(LATIN_CONSONANTS, LATIN_CONSONANT_CHARS).into(),
        TranslitDef::literal(APOSTROPHE_CONVERTER, table(&[('\u{2019}', "'")])).into(),
        TranslitDef::literal(REMOVE_STRESS, TranslitTable::new().with_removed(["\u{301}"])).into(),
    ]
}

//! Code → alphabet dispatch over the compiled registry.

use crate::alphabet::{Alphabet, CharClass};
use crate::data::{ALPHABETS, CODES, GENERIC_LOWERCASE, REGISTRY, TRANSLITS};
use crate::tables::Translit;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("language `{0}` is not registered")]
    LanguageNotFound(String),
}

/// Descriptor used for unregistered input: no classes, generic case folding
/// only.
static UNKNOWN: Alphabet = Alphabet {
    code: "unk",
    name: "unknown",
    classes: [&[], &[], &[], &[], &[]],
    steps: [None; 6],
    diacritics: None,
    secondary: None,
};

/// Find the alphabet registered under `code`, ignoring ASCII case.
pub fn lookup(code: &str) -> Result<&'static Alphabet, LookupError> {
    let key: Cow<'_, str> = if code.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(code.to_ascii_lowercase())
    } else {
        Cow::Borrowed(code)
    };
    REGISTRY
        .get(key.as_ref())
        .map(|&id| &ALPHABETS[usize::from(id)])
        .ok_or_else(|| LookupError::LanguageNotFound(code.to_owned()))
}

/// Like [`lookup`], falling back to [`default_alphabet`].
pub fn lookup_or_default(code: &str) -> &'static Alphabet {
    lookup(code).unwrap_or(&UNKNOWN)
}

#[inline]
pub fn default_alphabet() -> &'static Alphabet {
    &UNKNOWN
}

/// Registered codes in declaration order.
#[inline]
pub fn list_codes() -> &'static [&'static str] {
    CODES
}

/// Primary alphabets in declaration order.
pub fn alphabets() -> impl Iterator<Item = &'static Alphabet> {
    CODES.iter().filter_map(|code| {
        REGISTRY
            .get(*code)
            .map(|&id| &ALPHABETS[usize::from(id)])
    })
}

/// Secondary alphabets, in the order of their primaries.
pub fn secondaries() -> impl Iterator<Item = &'static Alphabet> {
    alphabets().filter_map(Alphabet::secondary)
}

/// The table every alphabet lowercases with after its own `pre_lower`.
#[inline]
pub fn generic_lowercase() -> &'static Translit {
    &TRANSLITS[usize::from(GENERIC_LOWERCASE)]
}

/// Codes of the primary alphabets that accept every character of `word`.
pub fn guess_languages(word: &str) -> Vec<&'static str> {
    alphabets()
        .filter(|alphabet| alphabet.accepts(word))
        .map(Alphabet::code)
        .collect()
}

/// Codes of the primaries whose secondary alphabet accepts every character
/// of `word`.
pub fn guess_secondary_languages(word: &str) -> Vec<&'static str> {
    alphabets()
        .filter(|alphabet| alphabet.secondary().is_some_and(|sec| sec.accepts(word)))
        .map(Alphabet::code)
        .collect()
}

/// Class of `c` in the alphabet registered under `code`.
pub fn classify(code: &str, c: char) -> Result<CharClass, LookupError> {
    Ok(lookup(code)?.classify(c))
}

/// Run the full lowercase chain of `code` over `text`.
pub fn normalize<'a>(code: &str, text: &'a str) -> Result<Cow<'a, str>, LookupError> {
    Ok(lookup(code)?.normalize(text))
}

/// Restoration candidates for `letter` in `code`, preferred first.
pub fn restore_diacritics(code: &str, letter: &str) -> Result<&'static [&'static str], LookupError> {
    Ok(lookup(code)?.restore_diacritics(letter))
}

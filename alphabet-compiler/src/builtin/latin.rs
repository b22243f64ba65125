//! Latin-script alphabets.

use super::common::{
    APOST_AND_HYPH, APOSTROPHE_CONVERTER, CIRCUMFLEX, LATIN_CONSONANTS, LATIN_VOWELS, LOWERCASE,
    REMOVE_STRESS, STRESS, table,
};
use crate::definition::{Definition, DiacriticsDef, LanguageDef, SetRef, TranslitDef};

pub(super) const GERMAN_CONVERTER: &str = "GERMAN_CONVERTER";

const GERMAN_UMLAUT_FOLD: &str = "GERMAN_UMLAUT_FOLD";
const PORTUGUESE_CONVERTER: &str = "PORTUGUESE_CONVERTER";
const ROMANIAN_RENYXA: &str = "ROMANIAN_RENYXA";
const ROMANIAN_DERENYXER: &str = "ROMANIAN_DERENYXER";
const ROMANIAN_PRE_CONVERTER: &str = "ROMANIAN_PRE_CONVERTER";
const TURKISH_PRE_LOWER: &str = "TURKISH_PRE_LOWER";
const TURKISH_PRE_UPPER: &str = "TURKISH_PRE_UPPER";
const TURKISH_PRE_CONVERTER: &str = "TURKISH_PRE_CONVERTER";
const TURKISH_CONVERTER: &str = "TURKISH_CONVERTER";
const TURKISH_DIACRITICS: &str = "TURKISH_DIACRITICS";

pub(super) fn definitions() -> Vec<Definition> {
    vec![
        TranslitDef::literal(
            GERMAN_UMLAUT_FOLD,
            table(&[('\u{E4}', "ae"), ('\u{F6}', "oe"), ('\u{FC}', "ue"), ('\u{DF}', "ss")]),
        )
        .into(),
        TranslitDef::merge(GERMAN_CONVERTER, &[APOSTROPHE_CONVERTER, GERMAN_UMLAUT_FOLD]).into(),
        TranslitDef::literal(PORTUGUESE_CONVERTER, table(&[('\u{2019}', "'")])).into(),
        // Comma-below letters to their legacy cedilla forms.
        TranslitDef::literal(
            ROMANIAN_RENYXA,
            table(&[
                ('\u{218}', "\u{15E}"),
                ('\u{219}', "\u{15F}"),
                ('\u{21A}', "\u{162}"),
                ('\u{21B}', "\u{163}"),
            ]),
        )
        .into(),
        TranslitDef::merge(ROMANIAN_DERENYXER, &[ROMANIAN_RENYXA, REMOVE_STRESS]).into(),
        TranslitDef::compose(ROMANIAN_PRE_CONVERTER, &[LOWERCASE, ROMANIAN_RENYXA]).into(),
        // Dotted and dotless I.
        TranslitDef::literal(
            TURKISH_PRE_LOWER,
            table(&[('\u{130}', "i"), ('I', "\u{131}")]),
        )
        .into(),
        TranslitDef::reverse(TURKISH_PRE_UPPER, TURKISH_PRE_LOWER).into(),
        TranslitDef::compose(TURKISH_PRE_CONVERTER, &[TURKISH_PRE_LOWER, LOWERCASE]).into(),
        TranslitDef::literal(
            TURKISH_CONVERTER,
            table(&[
                ('\u{C2}', "A"),
                ('\u{E2}', "a"),
                ('\u{CE}', "I"),
                ('\u{EE}', "i"),
                ('\u{DB}', "U"),
                ('\u{FB}', "u"),
            ])
            .with_removed(["\u{2019}", "'"]),
        )
        .into(),
        DiacriticsDef::new(
            TURKISH_DIACRITICS,
            &[
                &['c', '\u{E7}'],
                &['g', '\u{11F}'],
                &['i', '\u{131}'],
                &['o', '\u{F6}'],
                &['s', '\u{15F}'],
                &['u', '\u{FC}'],
            ],
        )
        .into(),
    ]
}

fn vowels(extra: &[char]) -> Vec<SetRef> {
    if extra.is_empty() {
        vec![SetRef::named(LATIN_VOWELS)]
    } else {
        vec![SetRef::named(LATIN_VOWELS), SetRef::chars(extra)]
    }
}

fn consonants(extra: &[char]) -> Vec<SetRef> {
    if extra.is_empty() {
        vec![SetRef::named(LATIN_CONSONANTS)]
    } else {
        vec![SetRef::named(LATIN_CONSONANTS), SetRef::chars(extra)]
    }
}

fn signs() -> Vec<SetRef> {
    vec![SetRef::named(APOST_AND_HYPH)]
}

fn stress() -> Vec<SetRef> {
    vec![SetRef::named(STRESS)]
}

// Vowels plus Æ Ø Å.
const NORDIC_VOWELS: &[char] = &['\u{C6}', '\u{D8}', '\u{C5}', '\u{E6}', '\u{F8}', '\u{E5}'];

pub(super) fn cze() -> LanguageDef {
    // Syllabic R/r counts as a vowel.
    LanguageDef::new("cze", "czech")
        .required(vowels(&[
            '\u{C1}', '\u{E1}', '\u{C9}', '\u{E9}', '\u{11A}', '\u{11B}', '\u{CD}', '\u{ED}',
            '\u{D3}', '\u{F3}', '\u{DA}', '\u{FA}', '\u{16E}', '\u{16F}', '\u{DD}', '\u{FD}',
            'R', 'r', '\u{158}', '\u{159}',
        ]))
        .normal(vec![SetRef::derived(
            LATIN_CONSONANTS,
            &['R', 'r'],
            &[
                '\u{10C}', '\u{10D}', '\u{10E}', '\u{10F}', '\u{147}', '\u{148}', '\u{160}',
                '\u{161}', '\u{164}', '\u{165}', '\u{17D}', '\u{17E}',
            ],
        )])
        .signs(signs())
}

pub(super) fn dan() -> LanguageDef {
    LanguageDef::new("dan", "danish")
        .required(vowels(NORDIC_VOWELS))
        .normal(consonants(&[]))
        .accidental(stress())
        .signs(signs())
}

pub(super) fn dut() -> LanguageDef {
    LanguageDef::new("dut", "dutch")
        .required(vowels(&[]))
        .normal(consonants(&[]))
        .accidental(stress())
        .signs(signs())
}

pub(super) fn eng() -> LanguageDef {
    LanguageDef::new("eng", "english")
        .required(vowels(&[]))
        .normal(consonants(&[]))
        .accidental(stress())
        .signs(signs())
}

pub(super) fn est() -> LanguageDef {
    LanguageDef::new("est", "estonian")
        .required(vowels(&[
            '\u{D5}', '\u{F5}', '\u{C4}', '\u{E4}', '\u{D6}', '\u{F6}', '\u{DC}', '\u{FC}', 'Y',
            'y',
        ]))
        .normal(vec![SetRef::derived(
            LATIN_CONSONANTS,
            &['Y', 'y'],
            &['\u{160}', '\u{161}', '\u{17D}', '\u{17E}'],
        )])
        .signs(signs())
}

pub(super) fn fin() -> LanguageDef {
    LanguageDef::new("fin", "finnish")
        .required(vowels(&['\u{C5}', '\u{E5}', '\u{C4}', '\u{E4}', '\u{D6}', '\u{F6}']))
        .normal(consonants(&['\u{160}', '\u{161}', '\u{17D}', '\u{17E}']))
        .signs(signs())
}

pub(super) fn fre() -> LanguageDef {
    LanguageDef::new("fre", "french")
        .required(vowels(&[
            '\u{C0}', '\u{E0}', '\u{C2}', '\u{E2}', '\u{C8}', '\u{E8}', '\u{C9}', '\u{E9}',
            '\u{CA}', '\u{EA}', '\u{CB}', '\u{EB}', '\u{CE}', '\u{EE}', '\u{CF}', '\u{EF}',
            '\u{D4}', '\u{F4}', '\u{D9}', '\u{F9}', '\u{DB}', '\u{FB}', '\u{DC}', '\u{FC}',
            '\u{178}', '\u{FF}', '\u{C6}', '\u{E6}', '\u{152}', '\u{153}',
        ]))
        .normal(consonants(&['\u{C7}', '\u{E7}']))
        .signs(signs())
}

pub(super) fn ger() -> LanguageDef {
    LanguageDef::new("ger", "german")
        .required(vowels(&['\u{C4}', '\u{E4}', '\u{D6}', '\u{F6}', '\u{DC}', '\u{FC}']))
        .normal(consonants(&['\u{DF}']))
        .signs(signs())
        .converter(GERMAN_CONVERTER)
}

pub(super) fn gle() -> LanguageDef {
    LanguageDef::new("gle", "gaelic")
        .required(vowels(&[
            '\u{C1}', '\u{C9}', '\u{CD}', '\u{D3}', '\u{DA}', '\u{E1}', '\u{E9}', '\u{ED}',
            '\u{F3}', '\u{FA}',
        ]))
        .normal(consonants(&[]))
        .signs(signs())
}

pub(super) fn hun() -> LanguageDef {
    LanguageDef::new("hun", "hungarian")
        .required(vowels(&[
            '\u{C1}', '\u{C9}', '\u{CD}', '\u{D3}', '\u{D6}', '\u{150}', '\u{DA}', '\u{DC}',
            '\u{170}', 'Y', '\u{E1}', '\u{E9}', '\u{ED}', '\u{F3}', '\u{F6}', '\u{151}',
            '\u{FA}', '\u{FC}', '\u{171}', 'y',
        ]))
        .normal(vec![SetRef::derived(LATIN_CONSONANTS, &['Y', 'y'], &[])])
        .signs(signs())
}

pub(super) fn ind() -> LanguageDef {
    LanguageDef::new("ind", "indonesian")
        .required(vowels(&[]))
        .normal(consonants(&[]))
        .accidental(vec![SetRef::named(CIRCUMFLEX)])
        .signs(signs())
}

pub(super) fn ita() -> LanguageDef {
    LanguageDef::new("ita", "italian")
        .required(vowels(&[
            '\u{C0}', '\u{E0}', '\u{C1}', '\u{E1}', '\u{C8}', '\u{E8}', '\u{C9}', '\u{E9}',
            '\u{CC}', '\u{EC}', '\u{CD}', '\u{ED}', '\u{D2}', '\u{F2}', '\u{D3}', '\u{F3}',
            '\u{D9}', '\u{F9}', '\u{DA}', '\u{FA}',
        ]))
        .normal(consonants(&[]))
        .accidental(vec![SetRef::named(CIRCUMFLEX)])
        .signs(signs())
}

pub(super) fn lav() -> LanguageDef {
    LanguageDef::new("lav", "latvian")
        .required(vowels(&[
            '\u{100}', '\u{101}', '\u{112}', '\u{113}', '\u{12A}', '\u{12B}', '\u{16A}', '\u{16B}',
        ]))
        .normal(consonants(&[
            '\u{10C}', '\u{10D}', '\u{122}', '\u{123}', '\u{136}', '\u{137}', '\u{13B}', '\u{13C}',
            '\u{145}', '\u{146}', '\u{160}', '\u{161}', '\u{17D}', '\u{17E}',
        ]))
        .signs(signs())
}

pub(super) fn lit() -> LanguageDef {
    LanguageDef::new("lit", "lithuanian")
        .required(vowels(&[
            '\u{104}', '\u{105}', '\u{118}', '\u{119}', '\u{116}', '\u{117}', '\u{12E}', '\u{12F}',
            'Y', 'y', 'J', 'j', '\u{172}', '\u{173}', '\u{16A}', '\u{16B}',
        ]))
        .normal(vec![SetRef::derived(
            LATIN_CONSONANTS,
            &['J', 'j', 'Q', 'q', 'W', 'w', 'X', 'x', 'Y', 'y'],
            &['\u{10C}', '\u{10D}', '\u{160}', '\u{161}', '\u{17D}', '\u{17E}'],
        )])
        .signs(signs())
}

pub(super) fn nor() -> LanguageDef {
    LanguageDef::new("nor", "norwegian")
        .required(vowels(NORDIC_VOWELS))
        .normal(consonants(&[]))
        .accidental(stress())
        .signs(signs())
}

pub(super) fn pol() -> LanguageDef {
    LanguageDef::new("pol", "polish")
        .required(vowels(&['\u{104}', '\u{105}', '\u{118}', '\u{119}', '\u{D3}', '\u{F3}']))
        .normal(consonants(&[
            '\u{106}', '\u{107}', '\u{141}', '\u{142}', '\u{143}', '\u{144}', '\u{15A}', '\u{15B}',
            '\u{179}', '\u{17A}', '\u{17B}', '\u{17C}',
        ]))
        .accidental(stress())
        .signs(signs())
}

pub(super) fn por() -> LanguageDef {
    LanguageDef::new("por", "portuguese")
        .required(vowels(&[
            '\u{C0}', '\u{E0}', '\u{C1}', '\u{E1}', '\u{C2}', '\u{E2}', '\u{C3}', '\u{E3}',
            '\u{C9}', '\u{E9}', '\u{CA}', '\u{EA}', '\u{CD}', '\u{ED}', '\u{D3}', '\u{F3}',
            '\u{D4}', '\u{F4}', '\u{D5}', '\u{F5}', '\u{DA}', '\u{FA}',
        ]))
        .normal(consonants(&['\u{C7}', '\u{E7}']))
        .signs(signs())
        .converter(PORTUGUESE_CONVERTER)
}

pub(super) fn rum() -> LanguageDef {
    LanguageDef::new("rum", "romanian")
        .required(vowels(&['\u{102}', '\u{103}', '\u{C2}', '\u{E2}', '\u{CE}', '\u{EE}']))
        // Comma-below letters and their cedilla twins.
        .normal(consonants(&[
            '\u{218}', '\u{219}', '\u{15E}', '\u{15F}', '\u{21A}', '\u{21B}', '\u{162}', '\u{163}',
        ]))
        .accidental(stress())
        .signs(signs())
        .pre_converter(ROMANIAN_PRE_CONVERTER)
        .derenyxer(ROMANIAN_DERENYXER)
}

pub(super) fn spa() -> LanguageDef {
    LanguageDef::new("spa", "spanish")
        .required(vowels(&[
            '\u{C1}', '\u{E1}', '\u{C9}', '\u{E9}', '\u{CD}', '\u{ED}', '\u{D3}', '\u{F3}',
            '\u{DA}', '\u{FA}', '\u{DC}', '\u{FC}',
        ]))
        .normal(consonants(&['\u{D1}', '\u{F1}']))
        .signs(signs())
}

pub(super) fn tur() -> LanguageDef {
    LanguageDef::new("tur", "turkish")
        .required(vowels(&[
            '\u{C2}', '\u{E2}', '\u{130}', '\u{131}', '\u{CE}', '\u{EE}', '\u{D6}', '\u{F6}',
            '\u{DB}', '\u{FB}', '\u{DC}', '\u{FC}',
        ]))
        .normal(consonants(&['\u{C7}', '\u{E7}', '\u{11E}', '\u{11F}', '\u{15E}', '\u{15F}']))
        .signs(signs())
        .pre_converter(TURKISH_PRE_CONVERTER)
        .pre_lower(TURKISH_PRE_LOWER)
        .pre_upper(TURKISH_PRE_UPPER)
        .pre_title(TURKISH_PRE_UPPER)
        .converter(TURKISH_CONVERTER)
        .diacritics(TURKISH_DIACRITICS)
        .secondary_override("eng", Vec::new())
}

pub(super) fn aze() -> LanguageDef {
    LanguageDef::new("aze", "azerbaijani")
        .required(vowels(&['\u{D6}', '\u{DC}', '\u{F6}', '\u{FC}', '\u{130}']))
        .normal(vec![SetRef::derived(
            LATIN_CONSONANTS,
            &['W', 'w'],
            &[
                '\u{C7}', '\u{E7}', '\u{11E}', '\u{11F}', '\u{131}', '\u{15E}', '\u{15F}',
                '\u{18F}', '\u{259}',
            ],
        )])
        .signs(signs())
}

pub(super) fn swe() -> LanguageDef {
    LanguageDef::new("swe", "swedish")
        .required(vowels(&['\u{C4}', '\u{C5}', '\u{D6}', '\u{E4}', '\u{E5}', '\u{F6}']))
        .normal(consonants(&[]))
        .signs(signs())
}

pub(super) fn tgl() -> LanguageDef {
    LanguageDef::new("tgl", "tagalog")
        .required(vowels(&[]))
        .normal(vec![SetRef::derived(
            LATIN_CONSONANTS,
            &['C', 'F', 'J', 'Q', 'V', 'X', 'Z', 'c', 'f', 'j', 'q', 'v', 'x', 'z'],
            &[],
        )])
        .signs(signs())
}

pub(super) fn tuk() -> LanguageDef {
    LanguageDef::new("tuk", "turkmen")
        .required(vowels(&['\u{C4}', '\u{D6}', '\u{DC}', '\u{E4}', '\u{F6}', '\u{FC}']))
        .normal(vec![SetRef::derived(
            LATIN_CONSONANTS,
            &['C', 'Q', 'V', 'X', 'c', 'q', 'v', 'x'],
            &[
                '\u{C7}', '\u{DD}', '\u{E7}', '\u{FD}', '\u{147}', '\u{148}', '\u{15E}', '\u{15F}',
                '\u{17D}', '\u{17E}',
            ],
        )])
        .signs(signs())
}

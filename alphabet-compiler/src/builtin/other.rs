//! Arabic, Armenian, Georgian, Greek and Hebrew.

use super::common::APOST_AND_HYPH;
use super::latin::GERMAN_CONVERTER;
use crate::definition::{CharSetDef, Definition, LanguageDef, SetRef};

const ARA_HARAKAT: &str = "ARA_HARAKAT";
const ARM_LETTERS: &str = "ARM_LETTERS";

#[rustfmt::skip]
const ARA_HARAKAT_CHARS: &[char] = &[
    '\u{670}', // superscript alef
    '\u{64E}', '\u{64F}', '\u{650}', // fatha, damma, kasra
    '\u{64B}', '\u{64C}', '\u{64D}', // tanwin
    '\u{651}', '\u{652}', // shadda, sukun
];

#[rustfmt::skip]
const ARM_VOWELS: &[char] = &[
    '\u{531}', '\u{535}', '\u{537}', '\u{538}', '\u{53B}', '\u{548}', '\u{555}',
    '\u{561}', '\u{565}', '\u{567}', '\u{568}', '\u{56B}', '\u{578}', '\u{585}',
];

pub(super) fn definitions() -> Vec<Definition> {
    vec![
        CharSetDef::chars(ARA_HARAKAT, ARA_HARAKAT_CHARS).into(),
        CharSetDef::new(
            ARM_LETTERS,
            vec![
                SetRef::range(0x531, 0x556),
                SetRef::range(0x561, 0x587),
            ],
        )
        .into(),
    ]
}

fn signs() -> Vec<SetRef> {
    vec![SetRef::named(APOST_AND_HYPH)]
}

pub(super) fn ara() -> LanguageDef {
    let mut letters = vec!['\u{621}', '\u{622}', '\u{623}', '\u{625}'];
    letters.extend('\u{627}'..='\u{63A}');
    letters.extend('\u{641}'..='\u{647}');
    letters.extend(['\u{624}', '\u{648}', '\u{649}', '\u{64A}', '\u{626}', '\u{671}']);
    LanguageDef::new("ara", "arabic")
        .required(vec![SetRef::chars(&letters)])
        .accidental(vec![SetRef::named(ARA_HARAKAT)])
}

pub(super) fn arm() -> LanguageDef {
    LanguageDef::new("arm", "armenian")
        .required(vec![SetRef::chars(ARM_VOWELS)])
        .normal(vec![SetRef::derived(ARM_LETTERS, ARM_VOWELS, &[])])
        .accidental(vec![SetRef::chars(&['\u{55B}', '\u{55C}', '\u{55E}'])])
        // Left half ring and the Armenian apostrophe.
        .signs(vec![SetRef::named(APOST_AND_HYPH), SetRef::chars(&['\u{559}', '\u{55A}'])])
}

pub(super) fn geo() -> LanguageDef {
    LanguageDef::new("geo", "georgian")
        .required(vec![SetRef::chars(&[
            '\u{10D0}', '\u{10D4}', '\u{10F1}', '\u{10D8}', '\u{10F2}', '\u{10DD}', '\u{10E3}',
            '\u{10EF}',
        ])])
        .normal(vec![SetRef::chars(&[
            '\u{10D1}', '\u{10D2}', '\u{10D3}', '\u{10D5}', '\u{10D6}', '\u{10D7}', '\u{10D9}',
            '\u{10DA}', '\u{10DB}', '\u{10DC}', '\u{10DE}', '\u{10DF}', '\u{10E0}', '\u{10E1}',
            '\u{10E2}', '\u{10F3}', '\u{10E4}', '\u{10E5}', '\u{10E6}', '\u{10E7}', '\u{10E8}',
            '\u{10E9}', '\u{10EA}', '\u{10EB}', '\u{10EC}', '\u{10ED}', '\u{10EE}', '\u{10F0}',
            '\u{10F5}', '\u{10F6}',
        ])])
        .signs(signs())
}

pub(super) fn gre() -> LanguageDef {
    LanguageDef::new("gre", "greek")
        .required(vec![SetRef::chars(&[
            '\u{386}', '\u{388}', '\u{38A}', '\u{38C}', '\u{38E}', '\u{390}', '\u{3AA}', '\u{3AB}',
            '\u{3B0}', '\u{3CA}', '\u{3CB}', '\u{391}', '\u{3B1}', '\u{395}', '\u{3B5}', '\u{397}',
            '\u{3B7}', '\u{399}', '\u{3B9}', '\u{39F}', '\u{3BF}', '\u{3A5}', '\u{3C5}', '\u{3A9}',
            '\u{3C9}', '\u{3AC}', '\u{3CE}', '\u{3CD}', '\u{3AD}', '\u{3AF}', '\u{3CC}', '\u{3AE}',
        ])])
        .normal(vec![SetRef::chars(&[
            '\u{389}', '\u{38F}', '\u{392}', '\u{3B2}', '\u{393}', '\u{3B3}', '\u{394}', '\u{3B4}',
            '\u{396}', '\u{3B6}', '\u{398}', '\u{3B8}', '\u{39A}', '\u{3BA}', '\u{39B}', '\u{3BB}',
            '\u{39C}', '\u{3BC}', '\u{39D}', '\u{3BD}', '\u{39E}', '\u{3BE}', '\u{3A0}', '\u{3C0}',
            '\u{3A1}', '\u{3C1}', '\u{3A3}', '\u{3C3}', '\u{3C2}', '\u{3A4}', '\u{3C4}', '\u{3A6}',
            '\u{3C6}', '\u{3A7}', '\u{3C7}', '\u{3A8}', '\u{3C8}',
        ])])
        .signs(signs())
        .converter(GERMAN_CONVERTER)
}

pub(super) fn heb() -> LanguageDef {
    LanguageDef::new("heb", "hebrew")
        .required(vec![SetRef::range(0x5D0, 0x5EA)])
        .signs(signs())
}

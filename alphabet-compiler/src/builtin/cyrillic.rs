//! Cyrillic alphabets and the look-alike ("renyxa") machinery they share.

use super::common::{
    APOST_AND_HYPH, APOSTROPHE_CONVERTER, LATIN_CONSONANTS, LATIN_VOWELS, LOWERCASE,
    REMOVE_STRESS, STRESS, STRESS_BULGARIAN, table,
};
use crate::definition::{
    CharSetDef, Definition, DiacriticsDef, LanguageDef, SetRef, TranslitDef,
};

pub(super) const RUS_VOWELS: &str = "RUS_VOWELS";
pub(super) const RUS_CONSONANTS: &str = "RUS_CONSONANTS";
pub(super) const CYRILLIC_RENYXA: &str = "CYRILLIC_RENYXA";
pub(super) const ES_RENYXA: &str = "EASTERN_SLAVIC_RENYXA";

const ES_RENYXA_ASCII: &str = "ES_RENYXA_ASCII";
const ES_RENYXA_HISTORIC: &str = "ES_RENYXA_HISTORIC";
const ES_RENYXA_MAP: &str = "ES_RENYXA_MAP";
const ES_DERENYXER: &str = "ES_DERENYXER";
const ES_PRE_CONVERTER: &str = "ES_PRE_CONVERTER";
const YO_FOLD: &str = "YO_FOLD";
const GHE_FOLD: &str = "GHE_FOLD";
const GENERAL_CYRILLIC_CONVERTER: &str = "GENERAL_CYRILLIC_CONVERTER";
const BELARUSIAN_CONVERTER: &str = "BELARUSIAN_CONVERTER";
const KAZ_DERENYXER: &str = "KAZ_DERENYXER";
const KAZ_SECONDARY_PRE_CONVERTER: &str = "KAZ_SECONDARY_PRE_CONVERTER";
const KAZ_DIACRITICS: &str = "KAZ_DIACRITICS";

#[rustfmt::skip]
const RUS_VOWEL_CHARS: &[char] = &[
    '\u{410}', '\u{415}', '\u{418}', '\u{41E}', '\u{423}', '\u{42B}',
    '\u{42D}', '\u{42E}', '\u{42F}', '\u{401}',
    '\u{430}', '\u{435}', '\u{438}', '\u{43E}', '\u{443}', '\u{44B}',
    '\u{44D}', '\u{44E}', '\u{44F}', '\u{451}',
];

#[rustfmt::skip]
const RUS_CONSONANT_CHARS: &[char] = &[
    '\u{411}', '\u{412}', '\u{413}', '\u{414}', '\u{416}', '\u{417}',
    '\u{419}', '\u{41A}', '\u{41B}', '\u{41C}', '\u{41D}', '\u{41F}',
    '\u{420}', '\u{421}', '\u{422}', '\u{424}', '\u{425}', '\u{426}',
    '\u{427}', '\u{428}', '\u{429}', '\u{42A}', '\u{42C}',
    '\u{431}', '\u{432}', '\u{433}', '\u{434}', '\u{436}', '\u{437}',
    '\u{439}', '\u{43A}', '\u{43B}', '\u{43C}', '\u{43D}', '\u{43F}',
    '\u{440}', '\u{441}', '\u{442}', '\u{444}', '\u{445}', '\u{446}',
    '\u{447}', '\u{448}', '\u{449}', '\u{44A}', '\u{44C}',
];

// Latin letters that pass for Cyrillic ones.
#[rustfmt::skip]
const CYRILLIC_RENYXA_CHARS: &[char] = &[
    'A', 'B', 'C', 'E', 'H', 'I', 'K', 'M', 'O', 'P',
    'a', 'c', 'e', 'g', 'i', 'k', 'n', 'o', 'p',
    'T', 'X', 'Y',
    'u', 'x', 'y',
];

const HARD_SIGN: &[char] = &['\u{42A}', '\u{44A}'];
const SHORT_I: &[char] = &['\u{419}', '\u{439}'];

#[rustfmt::skip]
const ES_RENYXA_ASCII_PAIRS: &[(char, &str)] = &[
    ('A', "\u{410}"), ('B', "\u{412}"), ('C', "\u{421}"), ('E', "\u{415}"),
    ('H', "\u{41D}"), ('I', "\u{406}"), ('K', "\u{41A}"), ('M', "\u{41C}"),
    ('O', "\u{41E}"), ('P', "\u{420}"), ('T', "\u{422}"), ('X', "\u{425}"),
    ('Y', "\u{423}"),
    ('a', "\u{430}"), ('b', "\u{432}"), ('c', "\u{441}"), ('e', "\u{435}"),
    ('g', "\u{434}"), ('h', "\u{43D}"), ('i', "\u{456}"), ('k', "\u{43A}"),
    ('m', "\u{43C}"), ('n', "\u{43F}"), ('o', "\u{43E}"), ('p', "\u{440}"),
    ('t', "\u{442}"), ('u', "\u{438}"), ('x', "\u{445}"), ('y', "\u{443}"),
];

// Ë/ë and pre-reform letters.
#[rustfmt::skip]
const ES_RENYXA_HISTORIC_PAIRS: &[(char, &str)] = &[
    ('\u{CB}', "\u{401}"), ('\u{EB}', "\u{451}"),
    ('\u{462}', "\u{415}"), ('\u{472}', "\u{424}"), ('\u{474}', "\u{418}"),
    ('\u{463}', "\u{435}"), ('\u{473}', "\u{444}"), ('\u{475}', "\u{438}"),
];

pub(super) fn definitions() -> Vec<Definition> {
    vec![
        CharSetDef::chars(RUS_VOWELS, RUS_VOWEL_CHARS).into(),
        CharSetDef::chars(RUS_CONSONANTS, RUS_CONSONANT_CHARS).into(),
        CharSetDef::chars(CYRILLIC_RENYXA, CYRILLIC_RENYXA_CHARS).into(),
        CharSetDef::new(
            ES_RENYXA,
            vec![SetRef::named(CYRILLIC_RENYXA), SetRef::chars(&['\u{CB}', '\u{EB}'])],
        )
        .into(),
        TranslitDef::literal(ES_RENYXA_ASCII, table(ES_RENYXA_ASCII_PAIRS)).into(),
        TranslitDef::literal(ES_RENYXA_HISTORIC, table(ES_RENYXA_HISTORIC_PAIRS)).into(),
        TranslitDef::merge(ES_RENYXA_MAP, &[ES_RENYXA_ASCII, ES_RENYXA_HISTORIC]).into(),
        TranslitDef::merge(ES_DERENYXER, &[ES_RENYXA_MAP, REMOVE_STRESS]).into(),
        TranslitDef::compose(ES_PRE_CONVERTER, &[LOWERCASE, ES_RENYXA_MAP]).into(),
        TranslitDef::literal(
            YO_FOLD,
            table(&[('\u{401}', "\u{415}"), ('\u{451}', "\u{435}")]),
        )
        .into(),
        TranslitDef::literal(
            GHE_FOLD,
            table(&[('\u{490}', "\u{413}"), ('\u{491}', "\u{433}")]),
        )
        .into(),
        TranslitDef::merge(
            GENERAL_CYRILLIC_CONVERTER,
            &[APOSTROPHE_CONVERTER, YO_FOLD, GHE_FOLD, REMOVE_STRESS],
        )
        .into(),
        TranslitDef::merge(
            BELARUSIAN_CONVERTER,
            &[APOSTROPHE_CONVERTER, GHE_FOLD, REMOVE_STRESS],
        )
        .into(),
        TranslitDef::reverse(KAZ_DERENYXER, ES_RENYXA_ASCII).into(),
        TranslitDef::compose(KAZ_SECONDARY_PRE_CONVERTER, &[LOWERCASE, KAZ_DERENYXER]).into(),
        DiacriticsDef::new(
            KAZ_DIACRITICS,
            &[
                &['\u{430}', '\u{4D9}'],
                &['\u{433}', '\u{493}'],
                &['\u{438}', '\u{456}'],
                &['\u{43A}', '\u{49B}'],
                &['\u{43D}', '\u{4A3}'],
                &['\u{43E}', '\u{4E9}'],
                &['\u{443}', '\u{4AF}', '\u{4B1}'],
                &['\u{445}', '\u{4BB}'],
            ],
        )
        .into(),
    ]
}

/// Pre-converter and derenyxer shared by the Eastern Slavic group.
fn eastern_slavic(def: LanguageDef) -> LanguageDef {
    def.pre_converter(ES_PRE_CONVERTER).derenyxer(ES_DERENYXER)
}

fn signs() -> Vec<SetRef> {
    vec![SetRef::named(APOST_AND_HYPH)]
}

pub(super) fn bak() -> LanguageDef {
    LanguageDef::new("bak", "bashkir")
        .required(vec![
            SetRef::named(RUS_VOWELS),
            SetRef::chars(&['\u{4E8}', '\u{4E9}', '\u{4D8}', '\u{4D9}']),
        ])
        .normal(vec![
            SetRef::named(RUS_CONSONANTS),
            SetRef::chars(&[
                '\u{492}', '\u{493}', '\u{498}', '\u{499}', '\u{4A0}', '\u{4A1}', '\u{4A2}',
                '\u{4A3}', '\u{4AA}', '\u{4AB}', '\u{4AE}', '\u{4AF}', '\u{4BA}', '\u{4BB}',
            ]),
        ])
        .signs(signs())
}

pub(super) fn bel() -> LanguageDef {
    let def = LanguageDef::new("bel", "belarusian")
        .required(vec![SetRef::chars(&[
            '\u{410}', '\u{415}', '\u{41E}', '\u{423}', '\u{42B}', '\u{42D}', '\u{42E}', '\u{42F}',
            '\u{401}', '\u{406}', '\u{430}', '\u{435}', '\u{43E}', '\u{443}', '\u{44B}', '\u{44D}',
            '\u{44E}', '\u{44F}', '\u{451}', '\u{456}',
        ])])
        .normal(vec![SetRef::derived(
            RUS_CONSONANTS,
            &['\u{429}', '\u{42A}', '\u{449}', '\u{44A}'],
            &['\u{40E}', '\u{490}', '\u{45E}', '\u{491}'],
        )])
        .alien(vec![SetRef::named(ES_RENYXA)])
        .accidental(vec![SetRef::named(STRESS)])
        .signs(signs())
        .converter(BELARUSIAN_CONVERTER);
    eastern_slavic(def)
}

pub(super) fn bul() -> LanguageDef {
    let def = LanguageDef::new("bul", "bulgarian")
        .required(vec![SetRef::chars(&[
            '\u{410}', '\u{415}', '\u{418}', '\u{41E}', '\u{423}', '\u{42A}', '\u{42E}', '\u{42F}',
            '\u{430}', '\u{435}', '\u{438}', '\u{43E}', '\u{443}', '\u{44A}', '\u{44E}', '\u{44F}',
        ])])
        .normal(vec![SetRef::derived(RUS_CONSONANTS, HARD_SIGN, &[])])
        .alien(vec![SetRef::named(CYRILLIC_RENYXA)])
        .accidental(vec![SetRef::named(STRESS_BULGARIAN)])
        .signs(signs())
        .converter(GENERAL_CYRILLIC_CONVERTER);
    eastern_slavic(def)
}

pub(super) fn chu() -> LanguageDef {
    let def = LanguageDef::new("chu", "church slavonic")
        .required(vec![
            SetRef::named(RUS_VOWELS),
            SetRef::chars(&[
                '\u{404}', '\u{454}', // yest
                '\u{406}', '\u{456}', // i
                '\u{460}', '\u{461}', // omega
                '\u{462}', '\u{463}', // yat
                '\u{474}', '\u{475}', // izhitsa
                '\u{478}', '\u{479}', // uk
                '\u{47A}', '\u{47B}', // round omega
                '\u{47C}', '\u{47D}', // omega with titlo
            ]),
        ])
        .normal(vec![
            SetRef::named(RUS_CONSONANTS),
            SetRef::chars(&[
                '\u{405}', '\u{455}', '\u{46E}', '\u{46F}', '\u{470}', '\u{471}', '\u{472}',
                '\u{473}', '\u{47E}', '\u{47F}',
            ]),
        ])
        // Stress marks and titlo.
        .accidental(vec![SetRef::chars(&[
            '\u{300}', '\u{301}', '\u{302}', '\u{30F}', '\u{311}', '\u{483}',
        ])])
        .signs(signs())
        .converter(GENERAL_CYRILLIC_CONVERTER);
    eastern_slavic(def)
}

pub(super) fn kaz() -> LanguageDef {
    let def = LanguageDef::new("kaz", "kazakh")
        .required(vec![SetRef::named(RUS_VOWELS)])
        .normal(vec![
            SetRef::named(RUS_CONSONANTS),
            SetRef::chars(&[
                '\u{492}', '\u{493}', '\u{4B0}', '\u{4B1}', '\u{4E8}', '\u{4E9}', '\u{4A2}',
                '\u{4A3}', '\u{49A}', '\u{49B}', '\u{4BA}', '\u{4BB}', '\u{4AE}', '\u{4AF}',
                '\u{406}', '\u{456}', '\u{4D8}', '\u{4D9}',
            ]),
        ])
        .alien(vec![SetRef::named(ES_RENYXA)])
        .accidental(vec![SetRef::named(STRESS)])
        .signs(signs())
        .converter(GENERAL_CYRILLIC_CONVERTER)
        .diacritics(KAZ_DIACRITICS)
        .secondary(kaz_latin());
    eastern_slavic(def)
}

/// Romanized Kazakh: Latin letters are native, their Cyrillic look-alikes
/// are alien and fold back to Latin.
fn kaz_latin() -> LanguageDef {
    LanguageDef::new("kaz", "kazakh (latin)")
        .required(vec![SetRef::named(LATIN_VOWELS)])
        .normal(vec![SetRef::named(LATIN_CONSONANTS)])
        .alien(vec![SetRef::chars(&[
            '\u{410}', '\u{412}', '\u{421}', '\u{415}', '\u{41D}', '\u{406}', '\u{41A}', '\u{41C}',
            '\u{41E}', '\u{420}', '\u{422}', '\u{425}', '\u{423}', '\u{430}', '\u{432}', '\u{441}',
            '\u{435}', '\u{434}', '\u{43D}', '\u{456}', '\u{43A}', '\u{43C}', '\u{43F}', '\u{43E}',
            '\u{440}', '\u{442}', '\u{438}', '\u{445}', '\u{443}',
        ])])
        .accidental(vec![SetRef::named(STRESS)])
        .signs(signs())
        .pre_converter(KAZ_SECONDARY_PRE_CONVERTER)
        .derenyxer(KAZ_DERENYXER)
}

pub(super) fn rus() -> LanguageDef {
    let def = LanguageDef::new("rus", "russian")
        .required(vec![SetRef::named(RUS_VOWELS)])
        .normal(vec![
            SetRef::named(RUS_CONSONANTS),
            // pre-reform letters
            SetRef::chars(&[
                '\u{406}', '\u{456}', '\u{462}', '\u{463}', '\u{472}', '\u{473}', '\u{474}',
                '\u{475}',
            ]),
        ])
        .alien(vec![SetRef::named(ES_RENYXA)])
        .accidental(vec![SetRef::named(STRESS)])
        .signs(signs())
        .converter(GENERAL_CYRILLIC_CONVERTER)
        .secondary_override("eng", Vec::new());
    eastern_slavic(def)
}

pub(super) fn tat() -> LanguageDef {
    let def = LanguageDef::new("tat", "tatar")
        .required(vec![SetRef::named(RUS_VOWELS)])
        .normal(vec![
            SetRef::named(RUS_CONSONANTS),
            SetRef::chars(&[
                '\u{4E8}', '\u{4E9}', '\u{4A2}', '\u{4A3}', '\u{4BA}', '\u{4BB}', '\u{4AE}',
                '\u{4AF}', '\u{496}', '\u{497}', '\u{4D8}', '\u{4D9}',
            ]),
        ])
        .alien(vec![SetRef::named(ES_RENYXA)])
        .accidental(vec![SetRef::named(STRESS)])
        .signs(signs())
        .converter(GENERAL_CYRILLIC_CONVERTER);
    eastern_slavic(def)
}

pub(super) fn ukr() -> LanguageDef {
    let def = LanguageDef::new("ukr", "ukrainian")
        .required(vec![SetRef::chars(&[
            '\u{410}', '\u{415}', '\u{418}', '\u{41E}', '\u{423}', '\u{42E}', '\u{42F}', '\u{404}',
            '\u{406}', '\u{407}', '\u{430}', '\u{435}', '\u{438}', '\u{43E}', '\u{443}', '\u{44E}',
            '\u{44F}', '\u{454}', '\u{456}', '\u{457}',
        ])])
        .normal(vec![SetRef::derived(RUS_CONSONANTS, HARD_SIGN, &['\u{490}', '\u{491}'])])
        .alien(vec![SetRef::named(CYRILLIC_RENYXA), SetRef::chars(&['\u{401}', '\u{451}'])])
        .accidental(vec![SetRef::named(STRESS)])
        .signs(signs())
        .converter(GENERAL_CYRILLIC_CONVERTER)
        .secondary_override("eng", Vec::new());
    eastern_slavic(def)
}

pub(super) fn kir() -> LanguageDef {
    LanguageDef::new("kir", "kirghiz")
        .required(vec![SetRef::named(RUS_VOWELS), SetRef::chars(SHORT_I)])
        .normal(vec![SetRef::derived(
            RUS_CONSONANTS,
            SHORT_I,
            &['\u{4A2}', '\u{4A3}', '\u{4AE}', '\u{4AF}', '\u{4E8}', '\u{4E9}'],
        )])
        .signs(signs())
}

pub(super) fn mon() -> LanguageDef {
    LanguageDef::new("mon", "mongolian")
        .required(vec![SetRef::named(RUS_VOWELS), SetRef::chars(SHORT_I)])
        .normal(vec![SetRef::derived(
            RUS_CONSONANTS,
            SHORT_I,
            &['\u{4AE}', '\u{4AF}', '\u{4E8}', '\u{4E9}'],
        )])
        .signs(signs())
}

pub(super) fn tgk() -> LanguageDef {
    LanguageDef::new("tgk", "tajik")
        .required(vec![SetRef::chars(&[
            '\u{401}', '\u{410}', '\u{415}', '\u{418}', '\u{419}', '\u{41E}', '\u{423}', '\u{42D}',
            '\u{42E}', '\u{42F}', '\u{430}', '\u{435}', '\u{438}', '\u{439}', '\u{43E}', '\u{443}',
            '\u{44D}', '\u{44E}', '\u{44F}', '\u{451}', '\u{4E2}', '\u{4E3}', '\u{4EE}', '\u{4EF}',
        ])])
        .normal(vec![SetRef::chars(&[
            '\u{411}', '\u{412}', '\u{413}', '\u{414}', '\u{416}', '\u{417}', '\u{41A}', '\u{41B}',
            '\u{41C}', '\u{41D}', '\u{41F}', '\u{420}', '\u{421}', '\u{422}', '\u{424}', '\u{425}',
            '\u{427}', '\u{428}', '\u{42A}', '\u{431}', '\u{432}', '\u{433}', '\u{434}', '\u{436}',
            '\u{437}', '\u{43A}', '\u{43B}', '\u{43C}', '\u{43D}', '\u{43F}', '\u{440}', '\u{441}',
            '\u{442}', '\u{444}', '\u{445}', '\u{447}', '\u{448}', '\u{44A}', '\u{492}', '\u{493}',
            '\u{49A}', '\u{49B}', '\u{4B2}', '\u{4B3}', '\u{4B6}', '\u{4B7}',
        ])])
        .signs(signs())
}

/// Uzbek is written in both scripts.
pub(super) fn uzb() -> LanguageDef {
    LanguageDef::new("uzb", "uzbek")
        .required(vec![
            SetRef::named(LATIN_VOWELS),
            SetRef::chars(&[
                '\u{401}', '\u{40E}', '\u{410}', '\u{415}', '\u{418}', '\u{419}', '\u{41E}',
                '\u{423}', '\u{42D}', '\u{42E}', '\u{42F}', '\u{430}', '\u{435}', '\u{438}',
                '\u{439}', '\u{43E}', '\u{443}', '\u{44D}', '\u{44E}', '\u{44F}', '\u{451}',
                '\u{45E}',
            ]),
        ])
        .normal(vec![
            SetRef::derived(LATIN_CONSONANTS, &['W', 'w'], &[]),
            SetRef::chars(&[
                '\u{411}', '\u{412}', '\u{413}', '\u{414}', '\u{416}', '\u{417}', '\u{41A}',
                '\u{41B}', '\u{41C}', '\u{41D}', '\u{41F}', '\u{420}', '\u{421}', '\u{422}',
                '\u{424}', '\u{425}', '\u{426}', '\u{427}', '\u{428}', '\u{42A}', '\u{42C}',
                '\u{431}', '\u{432}', '\u{433}', '\u{434}', '\u{436}', '\u{437}', '\u{43A}',
                '\u{43B}', '\u{43C}', '\u{43D}', '\u{43F}', '\u{440}', '\u{441}', '\u{442}',
                '\u{444}', '\u{445}', '\u{446}', '\u{447}', '\u{448}', '\u{44A}', '\u{44C}',
                '\u{492}', '\u{493}', '\u{49A}', '\u{49B}', '\u{4B2}', '\u{4B3}',
            ]),
        ])
        .signs(signs())
}
